//! Round trips over randomly drawn messages and RSA-style keys.

use modexp_cipher::{
    decrypt, encrypt, pow_mod, CipherError, ModExpError, ModularCipher, PrivateKey, PublicKey,
    TransformError,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Inverse of `a` modulo `m` via the extended Euclidean algorithm.
fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut old_r, mut r) = (a, m);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    (old_r == 1).then(|| old_s.rem_euclid(m))
}

/// Key pair over two primes; the modulus exceeds every Unicode scalar value
/// and still fits a `u32` ciphertext.
fn unicode_keys() -> (PublicKey, PrivateKey) {
    let (p, q) = (2003i64, 2011i64);
    let n = p * q;
    let phi = (p - 1) * (q - 1);
    let e = 17;
    let d = mod_inverse(e, phi).unwrap();
    (PublicKey::new(e, n), PrivateKey::new(d, n))
}

#[test]
fn key_helper_is_sound() {
    let (public, private) = unicode_keys();
    assert_eq!(public.modulus, 4_028_033);
    assert_eq!(pow_mod(public.exponent * private.exponent, 1, 2002 * 2010), Ok(1));
}

#[test]
fn random_unicode_messages_round_trip() {
    let (public, private) = unicode_keys();
    let cipher = ModularCipher::new();
    let mut rng = ChaCha20Rng::from_seed([21u8; 32]);
    for _ in 0..200 {
        let len = rng.gen_range(0..32);
        let message: String = (0..len).map(|_| rng.gen::<char>()).collect();
        let encrypted = cipher.encrypt_str(&message, &public).unwrap();
        assert!(encrypted.iter().all(|&c| i64::from(c) < public.modulus));
        assert_eq!(cipher.decrypt(&encrypted, &private).unwrap(), message);
    }
}

#[test]
fn free_functions_round_trip() {
    let message: Vec<u32> = "Knuth, Morris & Pratt".chars().map(u32::from).collect();
    let encrypted = encrypt(&message, 17, 3233).unwrap();
    let decrypted = decrypt(&encrypted, 2753, 3233).unwrap();
    assert_eq!(decrypted, "Knuth, Morris & Pratt");
}

#[test]
fn negative_exponent_is_reported() {
    let err = encrypt(&[10, 20], -3, 3233).unwrap_err();
    assert_eq!(
        err,
        CipherError::Encryption {
            position: 0,
            source: TransformError::ModExp(ModExpError::NegativeExponent(-3)),
        }
    );
    assert_eq!(err.to_string(), "encryption failed at position 0");
}

#[test]
fn wrong_key_does_not_round_trip() {
    let (public, _) = unicode_keys();
    let message = "attack at dawn";
    let encrypted = ModularCipher::new().encrypt_str(message, &public).unwrap();
    match decrypt(&encrypted, 12345, public.modulus) {
        Ok(text) => assert_ne!(text, message),
        Err(CipherError::Decryption { .. }) => {}
        Err(other) => panic!("unexpected error {other:?}"),
    }
}
