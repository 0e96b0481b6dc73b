use std::fmt::Display;

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{FiniteField, ModularRing, PrimeField};
use crate::prime::big::is_prime;
use crate::{AlgebraError, Field, Ring};

/// A prime field whose elements are [`BigInt`] values in `[0, characteristic)`.
///
/// Arithmetic is exact before reduction, so there is no bound on the size of
/// the characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BigInt", into = "BigInt")]
pub struct BigPrimeField {
    characteristic: BigInt,
}

impl BigPrimeField {
    /// Creates a new [`BigPrimeField`] of the given characteristic.
    ///
    /// Primality is checked with the Miller-Rabin test at
    /// [`DEFAULT_CERTAINTY`](crate::prime::DEFAULT_CERTAINTY).
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotPrime`] if `characteristic` is not prime.
    pub fn new(characteristic: BigInt) -> Result<Self, AlgebraError> {
        if !is_prime(&characteristic) {
            return Err(AlgebraError::not_prime(characteristic));
        }
        debug!(%characteristic, bits = characteristic.bits(), "constructed arbitrary-precision prime field");
        Ok(Self { characteristic })
    }
}

impl Display for BigPrimeField {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GF({})", self.characteristic)
    }
}

impl TryFrom<BigInt> for BigPrimeField {
    type Error = AlgebraError;

    #[inline]
    fn try_from(characteristic: BigInt) -> Result<Self, Self::Error> {
        Self::new(characteristic)
    }
}

impl From<BigPrimeField> for BigInt {
    #[inline]
    fn from(field: BigPrimeField) -> Self {
        field.characteristic
    }
}

impl Ring for BigPrimeField {
    type Element = BigInt;

    #[inline]
    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    #[inline]
    fn one(&self) -> BigInt {
        BigInt::one()
    }

    /// Floored modulo, which is non-negative for a positive characteristic.
    #[inline]
    fn standardize(&self, a: &BigInt) -> BigInt {
        a.mod_floor(&self.characteristic)
    }

    #[inline]
    fn is_zero(&self, a: &BigInt) -> bool {
        self.standardize(a).is_zero()
    }

    #[inline]
    fn is_unit(&self, a: &BigInt) -> bool {
        !self.is_zero(a)
    }

    #[inline]
    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.standardize(&(a + b))
    }

    #[inline]
    fn subtract(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.standardize(&(a - b))
    }

    #[inline]
    fn multiply(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.standardize(&(a * b))
    }

    #[inline]
    fn negate(&self, a: &BigInt) -> BigInt {
        self.standardize(&-a)
    }

    #[inline]
    fn pow(&self, base: &BigInt, exponent: i64) -> Result<BigInt, AlgebraError> {
        self.pow_signed(base, exponent)
    }
}

impl Field for BigPrimeField {
    fn invert(&self, a: &BigInt) -> Result<BigInt, AlgebraError> {
        if self.is_zero(a) {
            return Err(AlgebraError::no_inverse(
                a.clone(),
                self.characteristic.clone(),
            ));
        }

        let mut t = BigInt::zero();
        let mut new_t = BigInt::one();
        let mut r = self.characteristic.clone();
        let mut new_r = self.standardize(a);

        while !new_r.is_zero() {
            let quotient = &r / &new_r;
            let next_t = &t - &quotient * &new_t;
            t = std::mem::replace(&mut new_t, next_t);
            let next_r = &r - &quotient * &new_r;
            r = std::mem::replace(&mut new_r, next_r);
        }

        Ok(self.standardize(&t))
    }
}

impl FiniteField for BigPrimeField {
    type Elements = BigElements;

    #[inline]
    fn cardinality(&self) -> BigUint {
        self.characteristic.magnitude().clone()
    }

    /// Draws as many random bits as the characteristic has and redraws while the
    /// candidate is at least the characteristic. Fewer than two draws are
    /// expected on average.
    fn random_element_with<R>(&self, rng: &mut R) -> BigInt
    where
        R: Rng + CryptoRng,
    {
        let bound = self.characteristic.magnitude();
        let bits = bound.bits();
        loop {
            let candidate = rng.gen_biguint(bits);
            if &candidate < bound {
                return BigInt::from(candidate);
            }
            trace!(%candidate, "rejected out of range sample");
        }
    }

    #[inline]
    fn all_elements(&self) -> BigElements {
        BigElements {
            next: BigInt::zero(),
            end: self.characteristic.clone(),
        }
    }
}

impl ModularRing for BigPrimeField {
    #[inline]
    fn characteristic(&self) -> &BigInt {
        &self.characteristic
    }
}

impl PrimeField for BigPrimeField {}

/// Lazily walks `0, 1, …, characteristic - 1`.
#[derive(Debug, Clone)]
pub struct BigElements {
    next: BigInt,
    end: BigInt,
}

impl Iterator for BigElements {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next.clone();
        self.next += 1u32;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.end - &self.next).to_usize() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for BigElements {}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    /// 2^127 - 1
    fn mersenne_127() -> BigPrimeField {
        BigPrimeField::new(big("170141183460469231731687303715884105727")).unwrap()
    }

    #[test]
    fn test_construction() {
        assert!(BigPrimeField::new(BigInt::from(7)).is_ok());
        assert!(matches!(
            BigPrimeField::new(BigInt::from(4)),
            Err(AlgebraError::NotPrime { .. })
        ));
        assert!(matches!(
            BigPrimeField::new(BigInt::from(-7)),
            Err(AlgebraError::NotPrime { .. })
        ));
    }

    #[test]
    fn test_standardize_negative() {
        let field = BigPrimeField::new(BigInt::from(7)).unwrap();
        assert_eq!(field.standardize(&BigInt::from(-1)), BigInt::from(6));
        assert_eq!(field.standardize(&BigInt::from(-14)), BigInt::from(0));
        assert_eq!(field.negate(&BigInt::from(3)), BigInt::from(4));
        assert!(field.is_zero(&BigInt::from(21)));
        assert!(field.is_one(&BigInt::from(-6)));
    }

    #[test]
    fn test_invert_large() {
        let field = mersenne_127();
        for _ in 0..50 {
            let a = field.random_element();
            if field.is_zero(&a) {
                continue;
            }
            let inv = field.invert(&a).unwrap();
            assert!(field.is_one(&field.multiply(&a, &inv)));
            assert_eq!(field.invert(&inv).unwrap(), a);
        }
    }

    #[test]
    fn test_invert_zero() {
        let field = mersenne_127();
        assert!(matches!(
            field.invert(&BigInt::zero()),
            Err(AlgebraError::NoInverse { .. })
        ));
        assert!(matches!(
            field.pow(&BigInt::zero(), -3),
            Err(AlgebraError::NoInverse { .. })
        ));
    }

    #[test]
    fn test_pow() {
        let small = BigPrimeField::new(BigInt::from(1_000_000_007u64)).unwrap();
        let a = BigInt::from(123_456_789u64);
        assert!(small.is_one(&small.pow_unsigned(&a, 1_000_000_006)));

        let field = mersenne_127();
        let a = field.random_element();
        let lhs = field.pow(&a, 1_000_003).unwrap();
        let rhs = field.multiply(
            &field.pow(&a, 1_000_000).unwrap(),
            &field.pow(&a, 3).unwrap(),
        );
        assert_eq!(lhs, rhs);
        if !field.is_zero(&a) {
            let inv = field.pow(&a, -5).unwrap();
            assert!(field.is_one(&field.multiply(&inv, &field.pow(&a, 5).unwrap())));
        }
    }

    #[test]
    fn test_random_element_in_range() {
        let field = BigPrimeField::new(BigInt::from(257)).unwrap();
        for _ in 0..1000 {
            let a = field.random_element();
            assert!(a >= BigInt::zero() && a < BigInt::from(257));
        }
    }

    #[test]
    fn test_all_elements() {
        let field = BigPrimeField::new(BigInt::from(11)).unwrap();
        let elements: Vec<BigInt> = field.all_elements().collect();
        assert_eq!(elements, (0..11).map(BigInt::from).collect::<Vec<_>>());
        assert_eq!(field.all_elements().size_hint(), (11, Some(11)));
        assert_eq!(field.all_elements().count(), 11);
        assert_eq!(field.cardinality(), BigUint::from(11u32));
    }
}
