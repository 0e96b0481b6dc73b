#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Rings, fields and prime fields over fixed-width and arbitrary-precision integers.
//!
//! The algebraic contracts are the traits [`Ring`], [`Field`], [`FiniteField`],
//! [`ModularRing`] and [`PrimeField`]. There are two concrete prime fields:
//! [`FixedPrimeField`] over `i64` and [`BigPrimeField`] over
//! [`num_bigint::BigInt`]. Every operation returns a value in
//! `[0, characteristic)`.
//!
//! ```
//! use prime_algebra::{Field, FixedPrimeField, Ring};
//!
//! let field = FixedPrimeField::new(7)?;
//! assert_eq!(field.add(&5, &4), 2);
//! assert_eq!(field.invert(&3)?, 5);
//! assert_eq!(field.pow(&3, -1)?, 5);
//! # Ok::<(), prime_algebra::AlgebraError>(())
//! ```

pub mod error;
pub mod field;
pub mod morphism;
pub mod prime;
pub mod ring;

pub use error::AlgebraError;
pub use field::{BigPrimeField, Field, FiniteField, FixedPrimeField, ModularRing, PrimeField};
pub use ring::{Ring, RingElement};
