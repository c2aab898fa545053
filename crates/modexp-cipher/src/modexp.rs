//! Modular exponentiation.

use crate::error::ModExpError;

/// Exponentiation primitive used by the cipher.
pub trait ModExp {
    /// Computes `base^exponent mod modulus`, in `0..modulus`.
    fn pow_mod(&self, base: i64, exponent: i64, modulus: i64) -> Result<i64, ModExpError>;
}

/// Right-to-left binary exponentiation over `i64` with `i128` products.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquareAndMultiply;

impl ModExp for SquareAndMultiply {
    #[inline]
    fn pow_mod(&self, base: i64, exponent: i64, modulus: i64) -> Result<i64, ModExpError> {
        pow_mod(base, exponent, modulus)
    }
}

impl<F> ModExp for F
where
    F: Fn(i64, i64, i64) -> Result<i64, ModExpError>,
{
    fn pow_mod(&self, base: i64, exponent: i64, modulus: i64) -> Result<i64, ModExpError> {
        self(base, exponent, modulus)
    }
}

/// Computes `base^exponent mod modulus`.
///
/// A negative base is reduced to `0..modulus` first. Fails for a zero or
/// negative modulus and for a negative exponent.
pub fn pow_mod(base: i64, exponent: i64, modulus: i64) -> Result<i64, ModExpError> {
    if modulus == 0 {
        return Err(ModExpError::ZeroModulus);
    }
    if modulus < 0 {
        return Err(ModExpError::NegativeModulus(modulus));
    }
    if exponent < 0 {
        return Err(ModExpError::NegativeExponent(exponent));
    }
    if modulus == 1 {
        return Ok(0);
    }

    // Operands stay below 2^63, so every product fits in i128.
    let m = i128::from(modulus);
    let mut base = i128::from(base).rem_euclid(m);
    let mut exponent = exponent as u64;
    let mut result: i128 = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % m;
        }
        exponent >>= 1;
        base = base * base % m;
    }

    Ok(result as i64)
}
