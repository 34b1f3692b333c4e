//! Repeating-key XOR stream cipher and session-key generation.
//!
//! The transform is its own inverse: applying it twice with the same key
//! returns the original bytes, so encryption and decryption are the same
//! operation. The keystream is the key repeated from position zero on every
//! call, which makes the cipher order-insensitive across payloads.
//!
//! There is no authentication: a modified ciphertext decrypts to different,
//! valid-looking bytes with no detectable tampering. Callers needing
//! integrity must layer a separate mechanism.

use alloc::vec::Vec;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{Error, Result};

/// Byte length of generated session keys when no explicit length is given.
pub const DEFAULT_KEY_LEN: usize = 16;

/// Draws `len` bytes from the given cryptographically secure random source.
///
/// A length of zero yields an empty key, which the cipher itself rejects.
pub fn generate_key<R: CryptoRngCore + ?Sized>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut key = vec![0u8; len];
    rng.fill_bytes(&mut key);
    key
}

/// Encrypts `data` by XORing each byte with the key byte at the same
/// position modulo the key length.
///
/// Fails with [`Error::EmptyKey`] when the key is empty.
pub fn encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    apply(data, key)
}

/// Decrypts `data`; the transform is an involution, so this is [`encrypt`]
/// under another name.
pub fn decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    apply(data, key)
}

fn apply(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    Ok(data
        .iter()
        .enumerate()
        .map(|(i, &byte)| byte ^ key[i % key.len()])
        .collect())
}

/// A session key for the repeating-key cipher, zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct SymmetricKey(Vec<u8>);

impl SymmetricKey {
    /// Generates a key of [`DEFAULT_KEY_LEN`] bytes.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        Self::generate_with_len(rng, DEFAULT_KEY_LEN)
    }

    /// Generates a key of `len` bytes.
    pub fn generate_with_len<R: CryptoRngCore + ?Sized>(rng: &mut R, len: usize) -> Self {
        Self(generate_key(rng, len))
    }

    /// Wraps caller-supplied key bytes, rejecting an empty sequence.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyKey);
        }
        Ok(Self(bytes))
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the degenerate zero-length key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encrypts `data` with this key.
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        encrypt(data, &self.0)
    }

    /// Decrypts `data` with this key.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        decrypt(data, &self.0)
    }
}

impl core::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // key material stays out of logs
        f.debug_struct("SymmetricKey")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

impl Drop for SymmetricKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for SymmetricKey {}
