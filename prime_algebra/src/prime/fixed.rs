//! Exact prime utilities for fixed-width integers.

use std::collections::HashMap;

use crate::AlgebraError;

/// Checks whether `n` is prime by trial division.
///
/// Every `d` with `2 <= d` and `d * d <= n` is tried, so this is `O(√n)`.
/// `0` and `1` are not prime.
///
/// # Errors
///
/// Returns [`AlgebraError::NegativePrimalityInput`] if `n` is negative.
pub fn is_prime(n: i64) -> Result<bool, AlgebraError> {
    if n < 0 {
        return Err(AlgebraError::NegativePrimalityInput { value: n });
    }
    if n < 2 {
        return Ok(false);
    }

    // `d <= n / d` avoids computing `d * d`, which overflows near `i64::MAX`.
    let mut d = 2i64;
    while d <= n / d {
        if n % d == 0 {
            return Ok(false);
        }
        d += 1;
    }
    Ok(true)
}

/// Returns an infinite iterator over the primes `2, 3, 5, 7, …`.
///
/// Each call returns a fresh iterator with its own sieve state.
#[inline]
pub fn primes() -> FixedPrimes {
    FixedPrimes::new()
}

/// An incremental sieve of Eratosthenes.
///
/// `composites` maps each upcoming composite to the primes that will mark it.
/// A candidate absent from the map is prime. Its square is registered with
/// the candidate as its witness. A candidate present in the map is composite,
/// and each of its witnesses moves forward to the next multiple.
///
/// The iterator is meant for one consumer. Use one iterator per consumer
/// rather than sharing one.
#[derive(Debug, Clone)]
pub struct FixedPrimes {
    composites: HashMap<i64, Vec<i64>>,
    candidate: Option<i64>,
}

impl FixedPrimes {
    /// Creates a sieve positioned before `2`.
    #[inline]
    pub fn new() -> Self {
        Self {
            composites: HashMap::new(),
            candidate: Some(2),
        }
    }
}

impl Default for FixedPrimes {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FixedPrimes {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.candidate?;
            self.candidate = candidate.checked_add(1);

            match self.composites.remove(&candidate) {
                None => {
                    // Squares past `i64::MAX` can never be reached as candidates.
                    if let Some(square) = candidate.checked_mul(candidate) {
                        self.composites.entry(square).or_default().push(candidate);
                    }
                    return Some(candidate);
                }
                Some(witnesses) => {
                    for prime in witnesses {
                        if let Some(next) = candidate.checked_add(prime) {
                            self.composites.entry(next).or_default().push(prime);
                        }
                    }
                }
            }
        }
    }
}

impl std::iter::FusedIterator for FixedPrimes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small() {
        let expected = [
            (0, false),
            (1, false),
            (2, true),
            (3, true),
            (4, false),
            (9, false),
            (17, true),
            (25, false),
            (341, false),
            (7919, true),
        ];
        for (n, prime) in expected {
            assert_eq!(is_prime(n).unwrap(), prime, "n = {n}");
        }
    }

    #[test]
    fn test_is_prime_large() {
        assert!(is_prime(2_147_483_647).unwrap());
        assert!(is_prime(1_000_000_007).unwrap());
        assert!(!is_prime(1_000_000_007 * 3).unwrap());
    }

    #[test]
    fn test_is_prime_negative() {
        assert!(matches!(
            is_prime(-7),
            Err(AlgebraError::NegativePrimalityInput { value: -7 })
        ));
    }

    #[test]
    fn test_sieve_matches_trial_division() {
        let sieved: Vec<i64> = primes().take_while(|&p| p < 10_000).collect();
        let divided: Vec<i64> = (0..10_000).filter(|&n| is_prime(n).unwrap()).collect();
        assert_eq!(sieved, divided);
    }

    #[test]
    fn test_sieve_is_restartable_per_instance() {
        let mut first = primes();
        assert_eq!(first.nth(100), Some(547));
        let second: Vec<i64> = primes().take(5).collect();
        assert_eq!(second, vec![2, 3, 5, 7, 11]);
    }
}
