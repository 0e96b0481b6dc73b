use num_bigint::BigUint;
use rand::{CryptoRng, Rng};

use super::Field;
use crate::ring::Ring;

/// A field with finitely many elements.
pub trait FiniteField: Field {
    /// The iterator returned by [`FiniteField::all_elements`].
    type Elements: Iterator<Item = Self::Element>;

    /// Returns the number of elements of the field.
    ///
    /// This is always an arbitrary-precision integer, since the size of a
    /// fixed-width field need not fit in its own representation.
    fn cardinality(&self) -> BigUint;

    /// Samples a uniformly random element with `rng`.
    fn random_element_with<R>(&self, rng: &mut R) -> Self::Element
    where
        R: Rng + CryptoRng;

    /// Samples a uniformly random element with the thread-local secure generator.
    #[inline]
    fn random_element(&self) -> Self::Element {
        self.random_element_with(&mut rand::thread_rng())
    }

    /// Returns every element of the field in increasing order.
    ///
    /// Each call starts over from the first element.
    fn all_elements(&self) -> Self::Elements;
}

/// A ring of integers modulo its characteristic.
pub trait ModularRing: Ring {
    /// Returns the modulus of the ring.
    fn characteristic(&self) -> &Self::Element;
}

/// A finite field of prime order.
///
/// Its cardinality equals its characteristic, which is prime.
pub trait PrimeField: FiniteField + ModularRing {}
