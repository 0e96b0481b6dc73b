//! Ring homomorphisms.
//!
//! These morphisms are contracts that are never checked by the library.
//! Whoever implements one is responsible for the required properties; the
//! predicates below let tests check them on chosen inputs.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::field::{BigPrimeField, FixedPrimeField, ModularRing};
use crate::ring::Ring;
use crate::AlgebraError;

/// A map between two rings that respects addition, multiplication and both identities.
pub trait RingHomomorphism {
    /// The ring mapped from.
    type Domain: Ring;

    /// The ring mapped into.
    type Codomain: Ring;

    /// Returns the domain.
    fn domain(&self) -> &Self::Domain;

    /// Returns the codomain.
    fn codomain(&self) -> &Self::Codomain;

    /// Maps `a` into the codomain.
    fn apply(
        &self,
        a: &<Self::Domain as Ring>::Element,
    ) -> <Self::Codomain as Ring>::Element;

    /// Checks `f(a1) + f(a2) = f(a1 + a2)`.
    fn respects_addition(
        &self,
        a1: &<Self::Domain as Ring>::Element,
        a2: &<Self::Domain as Ring>::Element,
    ) -> bool {
        let codomain = self.codomain();
        codomain.standardize(&codomain.add(&self.apply(a1), &self.apply(a2)))
            == codomain.standardize(&self.apply(&self.domain().add(a1, a2)))
    }

    /// Checks `f(a1) * f(a2) = f(a1 * a2)`.
    fn respects_multiplication(
        &self,
        a1: &<Self::Domain as Ring>::Element,
        a2: &<Self::Domain as Ring>::Element,
    ) -> bool {
        let codomain = self.codomain();
        codomain.standardize(&codomain.multiply(&self.apply(a1), &self.apply(a2)))
            == codomain.standardize(&self.apply(&self.domain().multiply(a1, a2)))
    }

    /// Checks `f(0) = 0`.
    fn preserves_zero(&self) -> bool {
        self.codomain().is_zero(&self.apply(&self.domain().zero()))
    }

    /// Checks `f(1) = 1`.
    fn preserves_one(&self) -> bool {
        self.codomain().is_one(&self.apply(&self.domain().one()))
    }
}

/// A homomorphism from the ring `R` to itself.
pub trait RingEndomorphism<R: Ring>: RingHomomorphism<Domain = R, Codomain = R> {}

/// An injective homomorphism.
pub trait RingMonomorphism: RingHomomorphism {}

/// A surjective homomorphism.
pub trait RingEpimorphism: RingHomomorphism {}

/// A bijective homomorphism, together with its inverse.
pub trait RingIsomorphism: RingMonomorphism + RingEpimorphism {
    /// The type of the inverse map.
    type Inverse: RingHomomorphism<Domain = Self::Codomain, Codomain = Self::Domain>;

    /// Returns the inverse map.
    fn inverse(&self) -> Self::Inverse;

    /// Checks `inverse(f(a)) = a`.
    fn is_inverse_correct_forward(&self, a: &<Self::Domain as Ring>::Element) -> bool {
        let domain = self.domain();
        domain.standardize(&self.inverse().apply(&self.apply(a))) == domain.standardize(a)
    }

    /// Checks `f(inverse(b)) = b`.
    fn is_inverse_correct_backward(&self, b: &<Self::Codomain as Ring>::Element) -> bool {
        let codomain = self.codomain();
        codomain.standardize(&self.apply(&self.inverse().apply(b))) == codomain.standardize(b)
    }
}

/// An isomorphism from the ring `R` to itself, whose inverse is again an automorphism of `R`.
pub trait RingAutomorphism<R: Ring>:
    RingIsomorphism<Inverse: RingEndomorphism<R>> + RingEndomorphism<R>
{
}

/// The identity map of a ring.
///
/// For a prime field this is the only automorphism.
#[derive(Debug, Clone)]
pub struct Identity<F> {
    field: F,
}

impl<F: Ring> Identity<F> {
    /// Creates the identity map of `field`.
    #[inline]
    pub fn new(field: F) -> Self {
        Self { field }
    }
}

impl<F: Ring> RingHomomorphism for Identity<F> {
    type Domain = F;
    type Codomain = F;

    #[inline]
    fn domain(&self) -> &F {
        &self.field
    }

    #[inline]
    fn codomain(&self) -> &F {
        &self.field
    }

    #[inline]
    fn apply(&self, a: &F::Element) -> F::Element {
        self.field.standardize(a)
    }
}

impl<F: Ring> RingEndomorphism<F> for Identity<F> {}
impl<F: Ring> RingMonomorphism for Identity<F> {}
impl<F: Ring> RingEpimorphism for Identity<F> {}

impl<F: Ring + Clone> RingIsomorphism for Identity<F> {
    type Inverse = Self;

    #[inline]
    fn inverse(&self) -> Self {
        self.clone()
    }
}

impl<F: Ring + Clone> RingAutomorphism<F> for Identity<F> {}

/// The isomorphism between the fixed-width and the arbitrary-precision
/// prime fields of the same characteristic.
#[derive(Debug, Clone)]
pub struct PrimeFieldBridge {
    fixed: FixedPrimeField,
    big: BigPrimeField,
}

impl PrimeFieldBridge {
    /// Creates the bridge from `fixed` to `big`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::CharacteristicMismatch`] if the fields have
    /// different characteristics.
    pub fn new(fixed: FixedPrimeField, big: BigPrimeField) -> Result<Self, AlgebraError> {
        let left = *fixed.characteristic();
        if BigInt::from(left) != *big.characteristic() {
            return Err(AlgebraError::CharacteristicMismatch {
                left: Box::new(left),
                right: Box::new(big.characteristic().clone()),
            });
        }
        Ok(Self { fixed, big })
    }

    /// Creates the bridge onto a freshly built [`BigPrimeField`].
    pub fn from_fixed(fixed: FixedPrimeField) -> Result<Self, AlgebraError> {
        let big = BigPrimeField::new(BigInt::from(*fixed.characteristic()))?;
        Self::new(fixed, big)
    }
}

impl RingHomomorphism for PrimeFieldBridge {
    type Domain = FixedPrimeField;
    type Codomain = BigPrimeField;

    #[inline]
    fn domain(&self) -> &FixedPrimeField {
        &self.fixed
    }

    #[inline]
    fn codomain(&self) -> &BigPrimeField {
        &self.big
    }

    #[inline]
    fn apply(&self, a: &i64) -> BigInt {
        BigInt::from(self.fixed.standardize(a))
    }
}

impl RingMonomorphism for PrimeFieldBridge {}
impl RingEpimorphism for PrimeFieldBridge {}

impl RingIsomorphism for PrimeFieldBridge {
    type Inverse = PrimeFieldBridgeInverse;

    #[inline]
    fn inverse(&self) -> PrimeFieldBridgeInverse {
        PrimeFieldBridgeInverse {
            big: self.big.clone(),
            fixed: self.fixed,
        }
    }
}

/// The inverse of [`PrimeFieldBridge`].
#[derive(Debug, Clone)]
pub struct PrimeFieldBridgeInverse {
    big: BigPrimeField,
    fixed: FixedPrimeField,
}

impl RingHomomorphism for PrimeFieldBridgeInverse {
    type Domain = BigPrimeField;
    type Codomain = FixedPrimeField;

    #[inline]
    fn domain(&self) -> &BigPrimeField {
        &self.big
    }

    #[inline]
    fn codomain(&self) -> &FixedPrimeField {
        &self.fixed
    }

    fn apply(&self, b: &BigInt) -> i64 {
        // Both fields share the characteristic, so a standardized value fits in `i64`.
        self.big
            .standardize(b)
            .to_i64()
            .expect("standardized value exceeds the fixed-width characteristic")
    }
}

impl RingMonomorphism for PrimeFieldBridgeInverse {}
impl RingEpimorphism for PrimeFieldBridgeInverse {}

impl RingIsomorphism for PrimeFieldBridgeInverse {
    type Inverse = PrimeFieldBridge;

    #[inline]
    fn inverse(&self) -> PrimeFieldBridge {
        PrimeFieldBridge {
            fixed: self.fixed,
            big: self.big.clone(),
        }
    }
}
