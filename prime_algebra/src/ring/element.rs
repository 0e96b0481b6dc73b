use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use super::Ring;

/// An element bound to the ring it lives in.
///
/// This only exists so that `+`, `-` and `*` can be written infix; each
/// operator calls the matching [`Ring`] method. In a binary operation the
/// left operand's ring is used, and both operands are expected to come
/// from the same ring.
pub struct RingElement<'r, R: Ring> {
    ring: &'r R,
    value: R::Element,
}

impl<'r, R: Ring> RingElement<'r, R> {
    /// Creates a new [`RingElement`], standardizing `value`.
    #[inline]
    pub fn new(ring: &'r R, value: R::Element) -> Self {
        let value = ring.standardize(&value);
        Self { ring, value }
    }

    /// Returns the ring of this element.
    #[inline]
    pub fn ring(&self) -> &'r R {
        self.ring
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub fn value(&self) -> &R::Element {
        &self.value
    }

    /// Consumes the element, returning the inner value.
    #[inline]
    pub fn into_value(self) -> R::Element {
        self.value
    }

    #[inline]
    fn with(&self, value: R::Element) -> Self {
        Self {
            ring: self.ring,
            value,
        }
    }
}

impl<R: Ring> Clone for RingElement<'_, R> {
    #[inline]
    fn clone(&self) -> Self {
        self.with(self.value.clone())
    }
}

impl<R: Ring> Debug for RingElement<'_, R> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.value, f)
    }
}

impl<R: Ring> Display for RingElement<'_, R>
where
    R::Element: Display,
{
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Elements are equal when their rings are equal and their standardized values match.
impl<R: Ring + PartialEq> PartialEq for RingElement<'_, R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (std::ptr::eq(self.ring, other.ring) || self.ring == other.ring)
            && self.ring.standardize(&self.value) == other.ring.standardize(&other.value)
    }
}

impl<'r, R: Ring> Add for RingElement<'r, R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.with(self.ring.add(&self.value, &rhs.value))
    }
}

impl<'r, R: Ring> Add for &RingElement<'r, R> {
    type Output = RingElement<'r, R>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.with(self.ring.add(&self.value, &rhs.value))
    }
}

impl<'r, R: Ring> Sub for RingElement<'r, R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.with(self.ring.subtract(&self.value, &rhs.value))
    }
}

impl<'r, R: Ring> Sub for &RingElement<'r, R> {
    type Output = RingElement<'r, R>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.with(self.ring.subtract(&self.value, &rhs.value))
    }
}

impl<'r, R: Ring> Mul for RingElement<'r, R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.with(self.ring.multiply(&self.value, &rhs.value))
    }
}

impl<'r, R: Ring> Mul for &RingElement<'r, R> {
    type Output = RingElement<'r, R>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.with(self.ring.multiply(&self.value, &rhs.value))
    }
}

impl<'r, R: Ring> Neg for RingElement<'r, R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.with(self.ring.negate(&self.value))
    }
}

impl<'r, R: Ring> Neg for &RingElement<'r, R> {
    type Output = RingElement<'r, R>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.with(self.ring.negate(&self.value))
    }
}
