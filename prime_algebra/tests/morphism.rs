use num_bigint::BigInt;
use prime_algebra::morphism::{
    Identity, PrimeFieldBridge, RingAutomorphism, RingHomomorphism, RingIsomorphism,
};
use prime_algebra::{AlgebraError, BigPrimeField, FiniteField, FixedPrimeField, Ring};

/// `x -> 2x` on a prime field: additive, but not a ring homomorphism.
struct Doubling {
    field: FixedPrimeField,
}

impl RingHomomorphism for Doubling {
    type Domain = FixedPrimeField;
    type Codomain = FixedPrimeField;

    fn domain(&self) -> &FixedPrimeField {
        &self.field
    }

    fn codomain(&self) -> &FixedPrimeField {
        &self.field
    }

    fn apply(&self, a: &i64) -> i64 {
        self.field.add(a, a)
    }
}

#[test]
fn test_bridge_is_isomorphism() {
    let fixed = FixedPrimeField::new(101).unwrap();
    let bridge = PrimeFieldBridge::from_fixed(fixed).unwrap();

    assert!(bridge.preserves_zero());
    assert!(bridge.preserves_one());
    for a in fixed.all_elements() {
        for b in fixed.all_elements().step_by(7) {
            assert!(bridge.respects_addition(&a, &b));
            assert!(bridge.respects_multiplication(&a, &b));
        }
        assert!(bridge.is_inverse_correct_forward(&a));
        assert!(bridge.is_inverse_correct_backward(&BigInt::from(a)));
    }

    let inverse = bridge.inverse();
    assert!(inverse.preserves_zero());
    assert!(inverse.preserves_one());
    assert_eq!(inverse.apply(&BigInt::from(-1)), 100);
    assert!(inverse.respects_multiplication(&BigInt::from(50), &BigInt::from(60)));
    assert!(inverse.is_inverse_correct_forward(&BigInt::from(77)));
}

#[test]
fn test_bridge_mismatch() {
    let fixed = FixedPrimeField::new(101).unwrap();
    let big = BigPrimeField::new(BigInt::from(103)).unwrap();
    assert!(matches!(
        PrimeFieldBridge::new(fixed, big),
        Err(AlgebraError::CharacteristicMismatch { .. })
    ));
}

#[test]
fn test_identity_automorphism() {
    let field = BigPrimeField::new(BigInt::from(13)).unwrap();
    let identity = Identity::new(field.clone());
    assert!(identity.preserves_zero());
    assert!(identity.preserves_one());
    for a in field.all_elements() {
        assert!(identity.respects_addition(&a, &BigInt::from(5)));
        assert!(identity.respects_multiplication(&a, &BigInt::from(5)));
        assert!(identity.is_inverse_correct_forward(&a));
        assert!(round_trips::<BigPrimeField, _>(&identity, &a));
    }
}

/// Round trip through an automorphism and through its inverse, which is an
/// automorphism of the same field.
fn round_trips<F, A>(automorphism: &A, a: &F::Element) -> bool
where
    F: Ring,
    A: RingAutomorphism<F>,
    A::Inverse: RingAutomorphism<F>,
{
    let inverse = automorphism.inverse();
    automorphism.is_inverse_correct_forward(a)
        && inverse.is_inverse_correct_forward(a)
        && inverse.is_inverse_correct_backward(a)
}

#[test]
fn test_predicates_are_not_enforced() {
    let doubling = Doubling {
        field: FixedPrimeField::new(7).unwrap(),
    };
    assert!(doubling.preserves_zero());
    assert!(!doubling.preserves_one());
    assert!(doubling.respects_addition(&3, &5));
    assert!(!doubling.respects_multiplication(&3, &5));
}
