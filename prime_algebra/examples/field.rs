use num_bigint::BigInt;
use prime_algebra::{
    morphism::{PrimeFieldBridge, RingHomomorphism},
    prime::{big, fixed},
    BigPrimeField, Field, FiniteField, FixedPrimeField, ModularRing, Ring,
};

fn main() -> Result<(), prime_algebra::AlgebraError> {
    // A field is built from a prime characteristic, which is checked.
    let field = FixedPrimeField::new(7)?;
    assert!(FixedPrimeField::new(4).is_err());

    // Every result lies in `[0, characteristic)`.
    assert_eq!(field.add(&5, &4), 2);
    assert_eq!(field.subtract(&2, &5), 4);
    assert_eq!(field.multiply(&3, &5), 1);
    assert_eq!(field.negate(&3), 4);
    assert_eq!(field.standardize(&-1), 6);

    // Inversion, division and powers of any sign.
    assert_eq!(field.invert(&3)?, 5);
    assert_eq!(field.divide(&1, &3)?, 5);
    assert_eq!(field.pow(&3, 6)?, 1);
    assert_eq!(field.pow(&3, -1)?, 5);
    assert!(field.invert(&0).is_err());

    // Operators through a bound element.
    let a = field.element(5);
    let b = field.element(4);
    println!("in {field}: 5 + 4 = {}, 5 * 4 = {}", &a + &b, &a * &b);

    // Sampling and enumeration.
    let r = field.random_element();
    println!("random element of {field}: {r}");
    let elements: Vec<i64> = field.all_elements().collect();
    println!("elements of {field}: {elements:?}, cardinality {}", field.cardinality());

    // Large characteristics use the arbitrary-precision field.
    let p = big::next_probable_prime(&(BigInt::from(1) << 200u32));
    let big_field = BigPrimeField::new(p)?;
    let x = big_field.random_element();
    if big_field.is_unit(&x) {
        let inv = big_field.invert(&x)?;
        assert!(big_field.is_one(&big_field.multiply(&x, &inv)));
    }
    println!("characteristic of the large field: {}", big_field.characteristic());

    // Prime sources.
    let first: Vec<i64> = fixed::primes().take(10).collect();
    println!("first primes: {first:?}");
    println!("1000003 is prime: {}", fixed::is_prime(1_000_003)?);

    // The two representations of GF(7) are isomorphic.
    let bridge = PrimeFieldBridge::from_fixed(field)?;
    assert!(bridge.preserves_one() && bridge.respects_multiplication(&3, &5));
    println!("3 in the arbitrary-precision field: {}", bridge.apply(&3));

    Ok(())
}
