//! Per-character encryption and decryption.

use log::debug;

use crate::error::{CipherError, TransformError};
use crate::key::{PrivateKey, PublicKey};
use crate::modexp::{ModExp, SquareAndMultiply};

/// Cipher parametrized by its exponentiation primitive.
#[derive(Clone, Debug, Default)]
pub struct ModularCipher<E: ModExp = SquareAndMultiply> {
    primitive: E,
}

impl ModularCipher<SquareAndMultiply> {
    /// Creates a cipher backed by [`SquareAndMultiply`].
    pub fn new() -> Self {
        Self::with_primitive(SquareAndMultiply)
    }
}

impl<E: ModExp> ModularCipher<E> {
    /// Creates a cipher backed by an explicit primitive.
    pub fn with_primitive(primitive: E) -> Self {
        Self { primitive }
    }

    /// Encrypts each code point as `c = m^e mod n`.
    ///
    /// Stops at the first element that fails; no partial output is returned.
    pub fn encrypt(&self, message: &[u32], key: &PublicKey) -> Result<Vec<u32>, CipherError> {
        message
            .iter()
            .enumerate()
            .map(|(position, &code_point)| {
                self.apply(code_point, key.exponent, key.modulus)
                    .and_then(to_code_point)
                    .map_err(|source| {
                        debug!("encryption aborted at position {position}: {source}");
                        CipherError::Encryption { position, source }
                    })
            })
            .collect()
    }

    /// Encrypts the `char`s of `message`.
    pub fn encrypt_str(&self, message: &str, key: &PublicKey) -> Result<Vec<u32>, CipherError> {
        let code_points: Vec<u32> = message.chars().map(u32::from).collect();
        self.encrypt(&code_points, key)
    }

    /// Decrypts each code point as `m = c^d mod n` and collects the text.
    ///
    /// Fails if the primitive fails or a result is not a Unicode scalar value.
    pub fn decrypt(&self, encrypted: &[u32], key: &PrivateKey) -> Result<String, CipherError> {
        encrypted
            .iter()
            .enumerate()
            .map(|(position, &code_point)| {
                self.apply(code_point, key.exponent, key.modulus)
                    .and_then(to_char)
                    .map_err(|source| {
                        debug!("decryption aborted at position {position}: {source}");
                        CipherError::Decryption { position, source }
                    })
            })
            .collect()
    }

    fn apply(&self, code_point: u32, exponent: i64, modulus: i64) -> Result<i64, TransformError> {
        Ok(self
            .primitive
            .pow_mod(i64::from(code_point), exponent, modulus)?)
    }
}

fn to_code_point(value: i64) -> Result<u32, TransformError> {
    u32::try_from(value).map_err(|_| TransformError::InvalidCodePoint(value))
}

fn to_char(value: i64) -> Result<char, TransformError> {
    to_code_point(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or(TransformError::InvalidCodePoint(value))
}

/// Encrypts `message` with the default primitive.
pub fn encrypt(
    message: &[u32],
    public_exponent: i64,
    modulus: i64,
) -> Result<Vec<u32>, CipherError> {
    ModularCipher::new().encrypt(message, &PublicKey::new(public_exponent, modulus))
}

/// Decrypts `encrypted` with the default primitive.
pub fn decrypt(
    encrypted: &[u32],
    private_exponent: i64,
    modulus: i64,
) -> Result<String, CipherError> {
    ModularCipher::new().decrypt(encrypted, &PrivateKey::new(private_exponent, modulus))
}
