//! Fields, finite fields and the two concrete prime fields.

use crate::ring::Ring;
use crate::AlgebraError;

mod big;
mod finite;
mod fixed;

pub use big::{BigElements, BigPrimeField};
pub use finite::{FiniteField, ModularRing, PrimeField};
pub use fixed::FixedPrimeField;

/// A trait defining the algebraic structure of a mathematical field.
///
/// A field is a [`Ring`] in which every nonzero element has a multiplicative
/// inverse, so every nonzero element is a unit and negative exponents are
/// meaningful.
///
/// A trait's default methods cannot replace those of its supertrait, so
/// implementors are expected to define [`Ring::is_unit`] as `!is_zero(a)` and
/// [`Ring::pow`] as [`Field::pow_signed`].
pub trait Field: Ring {
    /// Calculates the multiplicative inverse of `a`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NoInverse`] if `a` is zero.
    fn invert(&self, a: &Self::Element) -> Result<Self::Element, AlgebraError>;

    /// Calculates `a / b`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NoInverse`] if `b` is zero.
    #[inline]
    fn divide(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, AlgebraError> {
        Ok(self.multiply(a, &self.invert(b)?))
    }

    /// Calculates `base^exponent` for any sign of `exponent`.
    ///
    /// A negative exponent is handled as `invert(base)^(-exponent)`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NoInverse`] if `exponent` is negative and `base` is zero.
    fn pow_signed(
        &self,
        base: &Self::Element,
        exponent: i64,
    ) -> Result<Self::Element, AlgebraError> {
        if exponent >= 0 {
            Ok(self.pow_unsigned(base, exponent.unsigned_abs()))
        } else {
            let inverse = self.invert(base)?;
            Ok(self.pow_unsigned(&inverse, exponent.unsigned_abs()))
        }
    }
}
