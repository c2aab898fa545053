//! Toy RSA-style cipher applying modular exponentiation to each code point.
//!
//! This crate provides:
//! - A [`ModExp`] seam for the exponentiation primitive, with a square-and-multiply default.
//! - Per-character encryption and decryption that abort on the first failure.
//! - Plain key component types; no key generation or validation.
//!
//! None of this is secure: there is no padding, every character is encrypted
//! independently, and keys are tiny.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod key;
mod modexp;

pub use crate::cipher::{decrypt, encrypt, ModularCipher};
pub use crate::error::{CipherError, ModExpError, TransformError};
pub use crate::key::{PrivateKey, PublicKey};
pub use crate::modexp::{pow_mod, ModExp, SquareAndMultiply};
