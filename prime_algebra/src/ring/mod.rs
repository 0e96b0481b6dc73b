//! This place defines the algebraic contract of a ring.

use std::fmt::Debug;

use crate::AlgebraError;

mod element;

pub use element::RingElement;

/// A trait defining the algebraic structure of a mathematical ring.
///
/// A ring is a set with two binary operations, addition and multiplication,
/// together with their identities. Multiplicative inverses are not required.
///
/// The ring is a value of its own (for example a modulus) and its elements
/// are plain values of [`Ring::Element`]. Every operation takes the ring by
/// shared reference and returns a fresh element, so a ring can be shared
/// across threads freely.
///
/// Implementations that reduce into a canonical range override
/// [`Ring::standardize`] and standardize every result they return.
pub trait Ring {
    /// The type of the elements of this ring.
    type Element: Clone + PartialEq + Debug;

    /// Returns the additive identity.
    fn zero(&self) -> Self::Element;

    /// Returns the multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Maps `a` to its canonical representative.
    ///
    /// Defaults to the identity.
    #[inline]
    fn standardize(&self, a: &Self::Element) -> Self::Element {
        a.clone()
    }

    /// Returns `true` if `a` is the additive identity.
    #[inline]
    fn is_zero(&self, a: &Self::Element) -> bool {
        self.standardize(a) == self.standardize(&self.zero())
    }

    /// Returns `true` if `a` is the multiplicative identity.
    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        self.standardize(a) == self.standardize(&self.one())
    }

    /// Returns `true` if `a` has a multiplicative inverse.
    fn is_unit(&self, a: &Self::Element) -> bool;

    /// Calculates `a + b`.
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Calculates `a - b`.
    fn subtract(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Calculates `a * b`.
    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Calculates `-a`.
    fn negate(&self, a: &Self::Element) -> Self::Element;

    /// Calculates `a * a`.
    #[inline]
    fn square(&self, a: &Self::Element) -> Self::Element {
        self.multiply(a, a)
    }

    /// Calculates `base^exponent` by square-and-multiply.
    ///
    /// Takes `O(log exponent)` multiplications. `base^0` is [`Ring::one`]
    /// for every `base`.
    fn pow_unsigned(&self, base: &Self::Element, mut exponent: u64) -> Self::Element {
        let mut base = self.standardize(base);
        let mut acc = self.one();
        while exponent != 0 {
            if exponent & 1 == 1 {
                acc = self.multiply(&acc, &base);
            }
            exponent >>= 1;
            if exponent != 0 {
                base = self.square(&base);
            }
        }
        acc
    }

    /// Calculates `base^exponent`.
    ///
    /// # Errors
    ///
    /// A general ring has no inverses, so a negative `exponent` returns
    /// [`AlgebraError::NegativeExponent`]. Fields override this method to
    /// accept negative exponents.
    fn pow(&self, base: &Self::Element, exponent: i64) -> Result<Self::Element, AlgebraError> {
        match u64::try_from(exponent) {
            Ok(exponent) => Ok(self.pow_unsigned(base, exponent)),
            Err(_) => Err(AlgebraError::NegativeExponent { exponent }),
        }
    }

    /// Pairs `value` with this ring so that `+`, `-` and `*` can be used on it.
    #[inline]
    fn element(&self, value: Self::Element) -> RingElement<'_, Self>
    where
        Self: Sized,
    {
        RingElement::new(self, value)
    }
}
