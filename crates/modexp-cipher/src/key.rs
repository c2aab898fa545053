//! Key component types.

/// Public exponent and modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// Public exponent `e`.
    pub exponent: i64,
    /// Modulus `n`.
    pub modulus: i64,
}

impl PublicKey {
    /// Creates a public key from its components.
    pub fn new(exponent: i64, modulus: i64) -> Self {
        Self { exponent, modulus }
    }
}

impl From<(i64, i64)> for PublicKey {
    fn from((exponent, modulus): (i64, i64)) -> Self {
        Self::new(exponent, modulus)
    }
}

/// Private exponent and modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    /// Private exponent `d`.
    pub exponent: i64,
    /// Modulus `n`.
    pub modulus: i64,
}

impl PrivateKey {
    /// Creates a private key from its components.
    pub fn new(exponent: i64, modulus: i64) -> Self {
        Self { exponent, modulus }
    }
}

impl From<(i64, i64)> for PrivateKey {
    fn from((exponent, modulus): (i64, i64)) -> Self {
        Self::new(exponent, modulus)
    }
}
