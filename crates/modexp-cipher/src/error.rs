//! Error types for the cipher and its exponentiation primitive.

use thiserror::Error;

/// Domain errors from modular exponentiation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModExpError {
    /// Modulus of zero.
    #[error("modulus must be non-zero")]
    ZeroModulus,

    /// Negative modulus.
    #[error("modulus must be positive, got {0}")]
    NegativeModulus(i64),

    /// Negative exponent; inverses are not computed.
    #[error("exponent must be non-negative, got {0}")]
    NegativeExponent(i64),
}

/// Why a single code point could not be transformed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// The exponentiation primitive failed.
    #[error(transparent)]
    ModExp(#[from] ModExpError),

    /// The result cannot be represented as a code point.
    #[error("value {0} is not a valid code point")]
    InvalidCodePoint(i64),
}

/// Errors returned by [`encrypt`](crate::encrypt) and [`decrypt`](crate::decrypt).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Encrypting the code point at `position` failed.
    #[error("encryption failed at position {position}")]
    Encryption {
        /// Index of the offending element in the message.
        position: usize,
        /// Underlying cause.
        #[source]
        source: TransformError,
    },

    /// Decrypting the code point at `position` failed.
    #[error("decryption failed at position {position}")]
    Decryption {
        /// Index of the offending element in the ciphertext.
        position: usize,
        /// Underlying cause.
        #[source]
        source: TransformError,
    },
}
