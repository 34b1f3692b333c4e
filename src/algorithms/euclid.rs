//! Extended Euclidean algorithm and the public-exponent search.

use num_bigint::{BigInt, BigUint, Sign::Plus};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Computes the modular inverse of `e` modulo `phi` via the iterative
/// extended-Euclid coefficient update.
///
/// Returns the unique `d` in `[0, phi)` with `(e * d) mod phi == 1`, or
/// `None` when `gcd(e, phi) != 1` and no inverse exists. A negative final
/// coefficient is normalized by adding `phi` once.
pub fn mod_inverse(e: &BigUint, phi: &BigUint) -> Option<BigUint> {
    if e.is_zero() || phi.is_zero() {
        return None;
    }

    let modulus = BigInt::from_biguint(Plus, phi.clone());
    let mut a = BigInt::from_biguint(Plus, e.clone());
    let mut m = modulus.clone();
    let mut x0 = BigInt::zero();
    let mut x1 = BigInt::one();

    while a > BigInt::one() {
        if m.is_zero() {
            // remainder chain bottomed out above 1, so gcd(e, phi) != 1
            return None;
        }
        let q = &a / &m;
        let r = &a % &m;
        a = core::mem::replace(&mut m, r);

        let t = x0.clone();
        x0 = &x1 - &q * &x0;
        x1 = t;
    }

    let d = if x1.is_negative() { x1 + modulus } else { x1 };
    d.to_biguint()
}

/// Returns the smallest integer `e >= 3` coprime to `phi`, stepping upward
/// by one.
///
/// Loops forever when `phi` is zero; key generation never produces a zero
/// totient for primes greater than 1.
pub fn find_public_exponent(phi: &BigUint) -> BigUint {
    let mut e = BigUint::from(3u32);
    while !e.gcd(phi).is_one() {
        e += 1u32;
    }
    e
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_inverse() {
        // p = 61, q = 53 => phi = 3120
        let phi = BigUint::from(3120u32);
        let d = mod_inverse(&BigUint::from(17u32), &phi).unwrap();
        assert_eq!(d, BigUint::from(2753u32));
    }

    #[test]
    fn exponent_search_skips_shared_factors() {
        // 3120 = 2^4 * 3 * 5 * 13; 3 through 6 all share a factor
        let phi = BigUint::from(3120u32);
        let e = find_public_exponent(&phi);
        assert_eq!(e, BigUint::from(7u32));

        let d = mod_inverse(&e, &phi).unwrap();
        assert_eq!(d, BigUint::from(1783u32));
    }

    #[test]
    fn no_inverse_when_not_coprime() {
        assert_eq!(
            mod_inverse(&BigUint::from(4u32), &BigUint::from(8u32)),
            None
        );
        assert_eq!(
            mod_inverse(&BigUint::from(6u32), &BigUint::from(3120u32)),
            None
        );
    }

    #[test]
    fn zero_inputs_have_no_inverse() {
        assert_eq!(
            mod_inverse(&BigUint::from(0u32), &BigUint::from(7u32)),
            None
        );
        assert_eq!(
            mod_inverse(&BigUint::from(7u32), &BigUint::from(0u32)),
            None
        );
    }

    #[test]
    fn exhaustive_small_moduli() {
        for m in 2u32..60 {
            let modulus = BigUint::from(m);
            for x in 1u32..m {
                let element = BigUint::from(x);
                if !element.gcd(&modulus).is_one() {
                    assert_eq!(mod_inverse(&element, &modulus), None);
                    continue;
                }
                let inverse = mod_inverse(&element, &modulus).unwrap();
                assert!(inverse < modulus);
                assert!(
                    ((&inverse * &element) % &modulus).is_one(),
                    "mod_inverse({x}, {m}) = {inverse}"
                );
            }
        }
    }
}
