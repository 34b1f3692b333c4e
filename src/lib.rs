#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

//! Key-pair generation and payload sealing for the chatseal messenger.
//!
//! Two independent toolkits, both pure computation over numbers and byte
//! sequences with no I/O and no shared state:
//!
//! - **Asymmetric**: textbook RSA over arbitrary-precision integers. A
//!   [`RsaKeyPair`] is generated once per session from two trial-division
//!   primes; short messages are encoded as a single integer and protected by
//!   modular exponentiation.
//! - **Symmetric**: a repeating-key XOR stream cipher ([`xor`]) for
//!   arbitrary-length payloads, keyed by a random [`SymmetricKey`].
//!
//! Neither scheme uses padding or authentication; this is obfuscation for a
//! demo messenger, not protection against a real adversary. All randomness
//! comes from an injected [`rand_core::CryptoRngCore`] source so callers
//! control the entropy and tests can substitute a seeded generator.
//!
//! # Usage
//!
//! ```
//! use chatseal::{BigUint, RsaKeyPair, RsaPrivateKey, RsaPublicKey, SymmetricKey};
//! use chatseal::traits::PublicKeyParts;
//! use rand_chacha::ChaCha8Rng;
//! use rand_core::SeedableRng;
//!
//! # fn main() -> chatseal::Result<()> {
//! // Keys built from raw components: p = 61, q = 53.
//! let public_key = RsaPublicKey::new(BigUint::from(17u32), BigUint::from(3233u32));
//! let private_key =
//!     RsaPrivateKey::from_components(BigUint::from(2753u32), BigUint::from(3233u32))?;
//!
//! let ciphertext = public_key.encrypt("A")?;
//! assert_eq!(ciphertext, BigUint::from(2790u32));
//! assert_eq!(private_key.decrypt(&ciphertext)?, "A");
//!
//! // Fresh keys from an injected random source.
//! let mut rng = ChaCha8Rng::from_seed([42; 32]);
//! let key_pair = RsaKeyPair::generate(&mut rng)?;
//! assert!(key_pair.public_key.size() >= 1);
//!
//! // Symmetric sealing for arbitrary-length payloads.
//! let session_key = SymmetricKey::generate(&mut rng);
//! let sealed = session_key.encrypt(b"hello, world")?;
//! assert_eq!(session_key.decrypt(&sealed)?, b"hello, world");
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

pub mod algorithms;
pub mod errors;
pub mod traits;
pub mod xor;

mod key;

pub use crate::{
    errors::{Error, Result},
    key::{RsaKeyPair, RsaPrivateKey, RsaPublicKey, DEFAULT_PRIME_BITS},
    xor::SymmetricKey,
};
