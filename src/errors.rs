//! Error types.

/// Alias for [`core::result::Result`] with the `chatseal` [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Private key with a missing (zero) exponent or modulus.
    InvalidPrivateKey,

    /// Message whose base-256 encoding does not fit below the modulus.
    MessageTooLong,

    /// Recovered plaintext could not be decoded back into a string.
    Decryption,

    /// Symmetric cipher invoked with an empty key.
    EmptyKey,

    /// Prime generation asked for a zero bit-width.
    BitWidth,

    /// Internal error.
    Internal,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidPrivateKey => write!(f, "invalid private key"),
            Error::MessageTooLong => write!(f, "message too long"),
            Error::Decryption => write!(f, "decryption error"),
            Error::EmptyKey => write!(f, "empty symmetric key"),
            Error::BitWidth => write!(f, "bit-width must be at least 1"),
            Error::Internal => write!(f, "internal error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
