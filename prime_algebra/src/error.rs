//! This module defines some errors that
//! may occur during the execution of the library.

use std::fmt::Debug;

use thiserror::Error;

/// A boxed value carried by an error for reporting.
pub type ErrorValue = Box<dyn Debug + Send + Sync>;

/// Errors that may occur.
#[derive(Error, Debug)]
pub enum AlgebraError {
    /// Error that occurs when a field is requested with a characteristic that is not prime.
    #[error("Cannot create finite field of characteristic {value:?}: it is not prime!")]
    NotPrime {
        /// The rejected characteristic.
        value: ErrorValue,
    },
    /// Error that occurs when the given value has no inverse element with the given modulus.
    #[error("Value {value:?} has no inverse element with the modulus {modulus:?}!")]
    NoInverse {
        /// The value being inverted.
        value: ErrorValue,
        /// The modulus.
        modulus: ErrorValue,
    },
    /// Error that occurs when a ring without inverses is asked for a negative power.
    #[error("Exponent must be nonnegative, got {exponent}.")]
    NegativeExponent {
        /// The rejected exponent.
        exponent: i64,
    },
    /// Error that occurs when primality is queried for a negative fixed-width integer.
    #[error("Primality is undefined for the negative value {value}.")]
    NegativePrimalityInput {
        /// The rejected value.
        value: i64,
    },
    /// Error that occurs when two fields were expected to share a characteristic.
    #[error("Characteristic mismatch: {left:?} != {right:?}")]
    CharacteristicMismatch {
        /// Characteristic of the first field.
        left: ErrorValue,
        /// Characteristic of the second field.
        right: ErrorValue,
    },
}

impl AlgebraError {
    /// Builds [`AlgebraError::NotPrime`] from any debuggable value.
    #[inline]
    pub fn not_prime<T: Debug + Send + Sync + 'static>(value: T) -> Self {
        Self::NotPrime {
            value: Box::new(value),
        }
    }

    /// Builds [`AlgebraError::NoInverse`] from any debuggable values.
    #[inline]
    pub fn no_inverse<T, M>(value: T, modulus: M) -> Self
    where
        T: Debug + Send + Sync + 'static,
        M: Debug + Send + Sync + 'static,
    {
        Self::NoInverse {
            value: Box::new(value),
            modulus: Box::new(modulus),
        }
    }
}
