//! Primality testing and prime enumeration.
//!
//! [`fixed`] works on `i64` by exact trial division and an incremental sieve.
//! [`big`] works on [`num_bigint::BigInt`] with the Miller-Rabin test.

pub mod big;
pub mod fixed;

/// Certainty used when none is given: a composite passes with probability at most `2^-20`.
pub const DEFAULT_CERTAINTY: u32 = 20;

/// Certainty used when searching for the next probable prime.
pub const NEXT_PRIME_CERTAINTY: u32 = 100;

/// Records the primes < 64.
pub(crate) const PRIME_BIT_MASK: u64 = 1 << 2
    | 1 << 3
    | 1 << 5
    | 1 << 7
    | 1 << 11
    | 1 << 13
    | 1 << 17
    | 1 << 19
    | 1 << 23
    | 1 << 29
    | 1 << 31
    | 1 << 37
    | 1 << 41
    | 1 << 43
    | 1 << 47
    | 1 << 53
    | 1 << 59
    | 1 << 61;

/// The odd primes < 64, used as a cheap filter before the probabilistic rounds.
pub(crate) const SMALL_ODD_PRIMES: [u32; 17] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61,
];
