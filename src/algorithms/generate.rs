//! Generate the components of an RSA key pair.

use alloc::vec::Vec;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::algorithms::euclid::{find_public_exponent, mod_inverse};
use crate::algorithms::prime::generate_prime;
use crate::errors::{Error, Result};

pub(crate) struct KeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    /// Prime factors of `n`, in generation order.
    pub primes: Vec<BigUint>,
}

/// Generates a fresh set of key components from two primes of `bit_size`
/// bits each.
///
/// The primes are drawn independently and are not required to differ, so a
/// degenerate modulus `p * p` is possible in principle at small bit-widths.
/// Invariant on the result: `(e * d) mod phi == 1` with
/// `phi = (p-1) * (q-1)`.
pub(crate) fn generate_key_components<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<KeyComponents> {
    let p = generate_prime(rng, bit_size)?;
    let q = generate_prime(rng, bit_size)?;

    let n = &p * &q;
    let mut phi = (&p - 1u32) * (&q - 1u32);

    let e = find_public_exponent(&phi);
    // the exponent search guarantees gcd(e, phi) == 1
    let d = mod_inverse(&e, &phi).ok_or(Error::Internal)?;

    phi.zeroize();

    Ok(KeyComponents {
        n,
        e,
        d,
        primes: vec![p, q],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn components_satisfy_key_equation() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        for _ in 0..4 {
            let components = generate_key_components(&mut rng, 16).unwrap();

            let p = &components.primes[0];
            let q = &components.primes[1];
            assert_eq!(components.n, p * q);

            let phi = (p - 1u32) * (q - 1u32);
            if phi.is_one() {
                continue;
            }
            assert!(((&components.e * &components.d) % &phi).is_one());
            assert!(components.e >= BigUint::from(3u32));
        }
    }

    #[test]
    fn distinct_draws_distinct_keys() {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        let a = generate_key_components(&mut rng, 16).unwrap();
        let b = generate_key_components(&mut rng, 16).unwrap();
        assert_ne!(a.n, b.n);
    }
}
