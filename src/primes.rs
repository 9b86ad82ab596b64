//! Prime sizing helpers.
//!
//! Slot counts are always prime: any nonzero double-hash step is then
//! coprime to the table length, so a probe sequence cycles through every
//! slot before repeating. `next_prime` turns a nominal capacity tier into
//! the actual slot count.

/// Primality by trial division: 2, then odd divisors up to the integer
/// square root. No floating point anywhere in the sizing path.
pub(crate) fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    // `divisor <= n / divisor` is `divisor² <= n` without the overflow.
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Smallest prime greater than or equal to `n`.
pub(crate) fn next_prime(n: usize) -> usize {
    let mut candidate = n;
    loop {
        if is_prime(candidate) {
            return candidate;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: classification agrees with the start of the prime
    /// sequence, including the 0/1/2/3 edge cases.
    #[test]
    fn small_numbers_classified() {
        let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];
        for n in 0..=53 {
            assert_eq!(is_prime(n), primes.contains(&n), "n = {}", n);
        }
    }

    /// Invariant: `next_prime` is the identity on primes and rounds
    /// composites upward to the next prime.
    #[test]
    fn next_prime_rounds_up() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(4), 5);
        assert_eq!(next_prime(14), 17);
        assert_eq!(next_prime(53), 53);
        assert_eq!(next_prime(54), 59);
    }

    /// Invariant: the doubling capacity-tier chain starting at 53 yields
    /// the slot counts 53, 107, 223, 431, 853.
    #[test]
    fn doubling_tier_chain() {
        let mut tier = 53;
        let mut sizes = Vec::new();
        for _ in 0..5 {
            sizes.push(next_prime(tier));
            tier *= 2;
        }
        assert_eq!(sizes, [53, 107, 223, 431, 853]);
    }

    /// Invariant: every `next_prime` result is itself prime and no smaller
    /// candidate in between is.
    #[test]
    fn next_prime_is_minimal() {
        for n in 0..500 {
            let p = next_prime(n);
            assert!(is_prime(p));
            assert!((n..p).all(|m| !is_prime(m)));
        }
    }
}
