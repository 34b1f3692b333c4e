//! Number-theoretic building blocks for key generation and the raw cipher.

pub mod euclid;
pub mod prime;
pub mod rsa;

pub(crate) mod generate;
