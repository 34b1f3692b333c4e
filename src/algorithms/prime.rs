//! Prime generation by trial division.
//!
//! The primality test is exact, not probabilistic: every candidate is checked
//! by dividing through all integers up to its square root. The `O(√n)` cost
//! dominates key generation and is the reason the default prime width stays
//! small; callers on a latency-sensitive path must treat key generation as a
//! synchronous cost.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Roots;
use num_traits::Zero;
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};

/// Returns `true` iff `n` is prime.
///
/// Exact for every representable integer: `n > 1` and no integer in
/// `[2, ⌊√n⌋]` divides it evenly.
pub fn is_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }

    let limit = n.sqrt();
    let mut i = two;
    while i <= limit {
        if (n % &i).is_zero() {
            return false;
        }
        i += 1u32;
    }

    true
}

/// Generates a prime of roughly `bit_size` bits from the given random source.
///
/// Draws a uniform integer in `[0, 2^bit_size)` and increments it until the
/// primality test accepts. A starting value of 0 or 1 advances to 2. The
/// search may step past `2^bit_size` when the starting value lies close to
/// the upper bound.
pub fn generate_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<BigUint> {
    if bit_size == 0 {
        return Err(Error::BitWidth);
    }

    let mut candidate = rng.gen_biguint(bit_size);
    while !is_prime(&candidate) {
        candidate += 1u32;
    }

    Ok(candidate)
}
