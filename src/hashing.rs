//! Polynomial string hashing and the double-hash probe sequence.
//!
//! A key hashes twice with two fixed prime bases: `hash_a` picks the
//! starting slot, `hash_b` derives the probe step. All arithmetic is exact
//! integer modular arithmetic, reduced at every multiplication, so the
//! result is the true polynomial residue for keys of any length.

/// Base of the first polynomial hash (starting slot).
pub(crate) const HASH_PRIME_A: u64 = 13;

/// Base of the second polynomial hash (probe step). Distinct from
/// `HASH_PRIME_A`, and both sit below the smallest table length (53), so
/// neither can coincide with a modulus.
pub(crate) const HASH_PRIME_B: u64 = 17;

/// `(a * b) mod m` through a 128-bit intermediate, safe for any `u64`
/// operands.
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

/// `base^exp mod m` by square-and-multiply, reducing at every step.
fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let mut acc = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}

/// Polynomial hash of `s` over its UTF-8 bytes:
///
/// ```text
/// h = Σ prime^(len-1-i) * byte[i]   (mod modulus)
/// ```
///
/// The result is always in `[0, modulus)`.
pub(crate) fn hash_str(s: &str, prime: u64, modulus: u64) -> u64 {
    let bytes = s.as_bytes();
    let len = bytes.len() as u64;
    let mut hash = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let weight = pow_mod(prime, len - 1 - i as u64, modulus);
        hash = (hash + mul_mod(weight, u64::from(byte), modulus)) % modulus;
    }
    hash
}

/// Double-hash probe sequence over a prime-length table.
///
/// Attempt `i` visits `(hash_a + i * step) mod len` with
/// `step = hash_b + 1`. `hash_b` lies in `[0, len)`, so the step lies in
/// `[1, len]`; the single degenerate value `len` (≡ 0, a sequence that
/// would never advance) is normalized to 1. Every remaining step is
/// coprime to the prime length, so the sequence visits each slot exactly
/// once per `len` attempts. The iterator itself is endless; callers bound
/// it with `take(len)`.
pub(crate) struct ProbeSeq {
    index: u64,
    step: u64,
    len: u64,
}

impl ProbeSeq {
    pub(crate) fn new(key: &str, table_len: usize) -> Self {
        let len = table_len as u64;
        let hash_a = hash_str(key, HASH_PRIME_A, len);
        let hash_b = hash_str(key, HASH_PRIME_B, len);
        let step = if hash_b + 1 == len { 1 } else { hash_b + 1 };
        Self {
            index: hash_a,
            step,
            len,
        }
    }
}

impl Iterator for ProbeSeq {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.index;
        self.index = (current + self.step) % self.len;
        Some(current as usize)
    }
}
