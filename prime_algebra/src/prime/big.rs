//! Probabilistic prime utilities for arbitrary-precision integers.

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use tracing::trace;

use super::{DEFAULT_CERTAINTY, NEXT_PRIME_CERTAINTY, PRIME_BIT_MASK, SMALL_ODD_PRIMES};

/// Checks whether `n` is prime with [`DEFAULT_CERTAINTY`].
#[inline]
pub fn is_prime(n: &BigInt) -> bool {
    is_probable_prime(n, DEFAULT_CERTAINTY)
}

/// Checks whether `n` is a prime number through Miller-Rabin primality test algorithm.
///
/// This is a probabilistic algorithm. A composite is reported prime with probability
/// at most `2^-certainty`, since each round errs with probability at most `1/4`
/// and `⌈certainty / 2⌉` rounds are run. A prime is always reported prime.
///
/// Values below `2` are never prime. With `certainty == 0` only the cheap
/// small-factor checks run.
///
/// See Handbook of Applied Cryptography, p. 139, Algorithm 4.24.
pub fn is_probable_prime(n: &BigInt, certainty: u32) -> bool {
    match n.to_biguint() {
        Some(value) => miller_rabin(&value, certainty.div_ceil(2)),
        None => false,
    }
}

fn miller_rabin(value: &BigUint, rounds: u32) -> bool {
    if let Some(small) = value.to_u64() {
        if small < 64 {
            return (PRIME_BIT_MASK & (1 << small)) != 0;
        }
    }

    // even
    if value.is_even() {
        return false;
    }

    if SMALL_ODD_PRIMES.iter().any(|&p| (value % p).is_zero()) {
        return false;
    }

    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let value_sub_one = value - &one;
    let r = value_sub_one.trailing_zeros().unwrap_or(0);
    let q = &value_sub_one >> r;

    let mut rng = rand::thread_rng();

    'next_round: for i in 0..rounds {
        let a = if i != 0 {
            // uniform in [2, value - 2]
            rng.gen_biguint_range(&two, &value_sub_one)
        } else {
            two.clone()
        };
        let mut x = a.modpow(&q, value);
        if x == one || x == value_sub_one {
            continue;
        }

        for _ in 1..r {
            x = &x * &x % value;
            if x == value_sub_one {
                continue 'next_round;
            }
            if x == one {
                break;
            }
        }
        trace!(witness = %a, "composite witness found");
        return false;
    }
    true
}

/// Returns the smallest probable prime strictly greater than `n`.
///
/// Any `n < 2` yields `2`. Candidates are tested with [`NEXT_PRIME_CERTAINTY`].
pub fn next_probable_prime(n: &BigInt) -> BigInt {
    let two = BigInt::from(2u32);
    if n < &two {
        return two;
    }

    let mut candidate = n + 1u32;
    if candidate.is_even() {
        candidate += 1u32;
    }
    while !is_probable_prime(&candidate, NEXT_PRIME_CERTAINTY) {
        candidate += 2u32;
    }
    candidate
}

/// Returns an infinite iterator over the probable primes `2, 3, 5, 7, …`.
#[inline]
pub fn primes() -> BigPrimes {
    BigPrimes::default()
}

/// Lazily walks the probable primes through [`next_probable_prime`].
#[derive(Debug, Clone, Default)]
pub struct BigPrimes {
    last: Option<BigInt>,
}

impl Iterator for BigPrimes {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &self.last {
            Some(last) => next_probable_prime(last),
            None => BigInt::from(2u32),
        };
        self.last = Some(next.clone());
        Some(next)
    }
}

impl std::iter::FusedIterator for BigPrimes {}
