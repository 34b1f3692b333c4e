//! Raw RSA transform and the base-256 message codec.
//!
//! These are the textbook operations with no padding scheme. The codec turns
//! a short string into a single integer and back; the transform is plain
//! modular exponentiation over arbitrary-precision integers
//! (square-and-multiply via [`BigUint::modpow`]).

use alloc::string::String;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Encodes a message as a single integer, treating each byte as a base-256
/// digit with the first byte most significant.
///
/// The empty message encodes to zero. Leading NUL bytes are absorbed by the
/// integer representation and do not survive a round-trip.
pub fn encode_message(msg: &str) -> BigUint {
    msg.as_bytes()
        .iter()
        .fold(BigUint::zero(), |acc, &byte| acc * 256u32 + u32::from(byte))
}

/// Decodes an integer back into a string by extracting base-256 digits,
/// least significant first, and prepending each one.
///
/// Fails with [`Error::Decryption`] when the recovered bytes are not valid
/// UTF-8, which happens when a ciphertext was produced under a different key
/// or tampered with in transit.
pub fn decode_message(mut value: BigUint) -> Result<String> {
    let mut bytes = Vec::with_capacity((value.bits() + 7) / 8);
    let base = BigUint::from(256u32);

    while !value.is_zero() {
        let digit = (&value % &base).to_u8().ok_or(Error::Internal)?;
        bytes.push(digit);
        value = &value / &base;
    }

    bytes.reverse();
    String::from_utf8(bytes).map_err(|_| Error::Decryption)
}

/// Raw RSA encryption of `m` with the public key: `m^e mod n`.
///
/// The caller must keep `m` below the modulus; see
/// [`RsaPublicKey::encrypt`][crate::RsaPublicKey::encrypt] for the checked
/// entry point.
#[inline]
pub fn rsa_encrypt<K: PublicKeyParts>(key: &K, m: &BigUint) -> BigUint {
    m.modpow(key.e(), key.n())
}

/// Raw RSA decryption of `c` with the private key: `c^d mod n`.
///
/// Fails with [`Error::InvalidPrivateKey`] when either component of the key
/// is zero.
#[inline]
pub fn rsa_decrypt<K: PrivateKeyParts>(key: &K, c: &BigUint) -> Result<BigUint> {
    if key.d().is_zero() || key.n().is_zero() {
        return Err(Error::InvalidPrivateKey);
    }

    Ok(c.modpow(key.d(), key.n()))
}
