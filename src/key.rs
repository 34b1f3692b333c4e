//! RSA key types and key-pair generation.

use alloc::string::String;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithms::generate::generate_key_components;
use crate::algorithms::rsa::{decode_message, encode_message, rsa_decrypt, rsa_encrypt};
use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Bit-width of each generated prime when no explicit width is given.
///
/// Keeps the trial-division primality test fast enough for interactive use;
/// the resulting modulus bounds asymmetric plaintexts to a few bytes.
pub const DEFAULT_PRIME_BITS: usize = 16;

/// Public half of an RSA key pair: the exponent `e` and modulus `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
}

/// Private half of an RSA key pair: the exponent `d` and modulus `n`.
///
/// The exponent and any known prime factors are zeroized when the key is
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    d: BigUint,
    n: BigUint,
    primes: Vec<BigUint>,
}

/// A matched public/private key pair, created once per session.
///
/// Neither half is serialized by this crate; persistence and transmission
/// encodings are the caller's concern.
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    /// Key used to encrypt outbound payloads.
    pub public_key: RsaPublicKey,
    /// Key used to recover inbound payloads.
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Creates a public key from its raw components.
    pub fn new(e: BigUint, n: BigUint) -> Self {
        Self { n, e }
    }

    /// Encrypts a short message to a single integer: `encode(msg)^e mod n`.
    ///
    /// The base-256 encoding of the message must be strictly below the
    /// modulus, otherwise [`Error::MessageTooLong`] is returned; the
    /// encode/decode pairing is only a bijection below `n`.
    pub fn encrypt(&self, msg: &str) -> Result<BigUint> {
        let m = encode_message(msg);
        if m >= self.n {
            return Err(Error::MessageTooLong);
        }
        Ok(rsa_encrypt(self, &m))
    }
}

impl PublicKeyParts for RsaPublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl RsaPrivateKey {
    /// Creates a private key from externally supplied components.
    ///
    /// Fails with [`Error::InvalidPrivateKey`] when either component is
    /// zero.
    pub fn from_components(d: BigUint, n: BigUint) -> Result<Self> {
        if d.is_zero() || n.is_zero() {
            return Err(Error::InvalidPrivateKey);
        }
        Ok(Self {
            d,
            n,
            primes: Vec::new(),
        })
    }

    /// Decrypts a single-integer ciphertext back into a string:
    /// `decode(c^d mod n)`.
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<String> {
        let m = rsa_decrypt(self, ciphertext)?;
        decode_message(m)
    }
}

impl PrivateKeyParts for RsaPrivateKey {
    fn d(&self) -> &BigUint {
        &self.d
    }

    fn n(&self) -> &BigUint {
        &self.n
    }

    fn primes(&self) -> &[BigUint] {
        &self.primes
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.d.zeroize();
        for prime in self.primes.iter_mut() {
            prime.zeroize();
        }
    }
}

impl ZeroizeOnDrop for RsaPrivateKey {}

impl RsaKeyPair {
    /// Generates a key pair from two primes of [`DEFAULT_PRIME_BITS`] bits.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Result<Self> {
        Self::generate_with_bits(rng, DEFAULT_PRIME_BITS)
    }

    /// Generates a key pair from two primes of `prime_bits` bits each.
    pub fn generate_with_bits<R: CryptoRngCore + ?Sized>(
        rng: &mut R,
        prime_bits: usize,
    ) -> Result<Self> {
        let components = generate_key_components(rng, prime_bits)?;
        Ok(Self {
            public_key: RsaPublicKey {
                n: components.n.clone(),
                e: components.e,
            },
            private_key: RsaPrivateKey {
                d: components.d,
                n: components.n,
                primes: components.primes,
            },
        })
    }
}
