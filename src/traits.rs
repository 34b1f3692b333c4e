//! Traits for the components of public and private keys.

use num_bigint::BigUint;

/// Components of an RSA public key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the modulus size in bytes. Raw ciphertexts for this key are
    /// bounded by the modulus and fit in this many bytes.
    fn size(&self) -> usize {
        (self.n().bits() + 7) / 8
    }
}

/// Components of an RSA private key.
///
/// A private key carries its own modulus rather than extending
/// [`PublicKeyParts`]: keys supplied from outside the crate are `(d, n)`
/// pairs with no public exponent attached.
pub trait PrivateKeyParts {
    /// Returns the private exponent of the key.
    fn d(&self) -> &BigUint;

    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the prime factors, when known. Empty for keys built from
    /// externally supplied components.
    fn primes(&self) -> &[BigUint];
}
