use std::fmt::Display;
use std::ops::Range;

use num_bigint::BigUint;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{FiniteField, ModularRing, PrimeField};
use crate::prime::fixed::is_prime;
use crate::{AlgebraError, Field, Ring};

/// A prime field whose elements are `i64` values in `[0, characteristic)`.
///
/// Every intermediate result is computed in `i128`, so each prime up to
/// `i64::MAX` is supported without overflow: operands are below `2^63` and
/// their product is below `2^126`.
///
/// Elements given to the operations need not be standardized. Negative
/// values are accepted and reduced like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct FixedPrimeField {
    characteristic: i64,
}

impl FixedPrimeField {
    /// Creates a new [`FixedPrimeField`] of the given characteristic.
    ///
    /// Primality is checked by trial division, which takes `O(√characteristic)`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotPrime`] if `characteristic` is not prime, or
    /// [`AlgebraError::NegativePrimalityInput`] if it is negative.
    pub fn new(characteristic: i64) -> Result<Self, AlgebraError> {
        if !is_prime(characteristic)? {
            return Err(AlgebraError::not_prime(characteristic));
        }
        debug!(characteristic, "constructed fixed-width prime field");
        Ok(Self { characteristic })
    }

    /// Reduces a wide intermediate into `[0, characteristic)`.
    ///
    /// The remainder of a negative operand is negative, hence the second reduction.
    #[inline]
    fn reduce(&self, a: i128) -> i64 {
        let p = self.characteristic as i128;
        (((a % p) + p) % p) as i64
    }
}

impl Display for FixedPrimeField {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GF({})", self.characteristic)
    }
}

impl TryFrom<i64> for FixedPrimeField {
    type Error = AlgebraError;

    #[inline]
    fn try_from(characteristic: i64) -> Result<Self, Self::Error> {
        Self::new(characteristic)
    }
}

impl From<FixedPrimeField> for i64 {
    #[inline]
    fn from(field: FixedPrimeField) -> Self {
        field.characteristic
    }
}

impl Ring for FixedPrimeField {
    type Element = i64;

    #[inline]
    fn zero(&self) -> i64 {
        0
    }

    #[inline]
    fn one(&self) -> i64 {
        1
    }

    #[inline]
    fn standardize(&self, a: &i64) -> i64 {
        self.reduce(*a as i128)
    }

    #[inline]
    fn is_unit(&self, a: &i64) -> bool {
        !self.is_zero(a)
    }

    #[inline]
    fn add(&self, a: &i64, b: &i64) -> i64 {
        self.reduce(*a as i128 + *b as i128)
    }

    #[inline]
    fn subtract(&self, a: &i64, b: &i64) -> i64 {
        self.reduce(*a as i128 - *b as i128)
    }

    #[inline]
    fn multiply(&self, a: &i64, b: &i64) -> i64 {
        // Standardize first so the product stays below `2^126`.
        self.reduce(self.standardize(a) as i128 * self.standardize(b) as i128)
    }

    #[inline]
    fn negate(&self, a: &i64) -> i64 {
        self.reduce(-(*a as i128))
    }

    #[inline]
    fn pow(&self, base: &i64, exponent: i64) -> Result<i64, AlgebraError> {
        self.pow_signed(base, exponent)
    }
}

impl Field for FixedPrimeField {
    /// Extended Euclidean algorithm over `(t, new_t, r, new_r)`.
    fn invert(&self, a: &i64) -> Result<i64, AlgebraError> {
        if self.is_zero(a) {
            return Err(AlgebraError::no_inverse(*a, self.characteristic));
        }

        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = self.characteristic as i128;
        let mut new_r = self.standardize(a) as i128;

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        Ok(self.reduce(t))
    }
}

impl FiniteField for FixedPrimeField {
    type Elements = Range<i64>;

    #[inline]
    fn cardinality(&self) -> BigUint {
        BigUint::from(self.characteristic.unsigned_abs())
    }

    /// Rejection sampling over `[0, i64::MAX]`.
    ///
    /// Draws in the tail `[i64::MAX - (i64::MAX mod p), i64::MAX]` are discarded,
    /// so the accepted range is a whole number of copies of `[0, p)`.
    fn random_element_with<R>(&self, rng: &mut R) -> i64
    where
        R: Rng + CryptoRng,
    {
        let p = self.characteristic;
        let limit = i64::MAX - i64::MAX % p;
        loop {
            let candidate = (rng.gen::<u64>() >> 1) as i64;
            if candidate < limit {
                return candidate % p;
            }
            trace!(candidate, characteristic = p, "rejected biased sample");
        }
    }

    #[inline]
    fn all_elements(&self) -> Range<i64> {
        0..self.characteristic
    }
}

impl ModularRing for FixedPrimeField {
    #[inline]
    fn characteristic(&self) -> &i64 {
        &self.characteristic
    }
}

impl PrimeField for FixedPrimeField {}
