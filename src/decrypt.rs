// RSA Decryption
// Validates, exponentiates, re-encodes, unpads; every structural failure
// surfaces the same generic error

use crate::bigint::{bytes_to_integer, integer_to_bytes, mod_pow};
use crate::error::RsaError;
use crate::keys::RsaPrivateKey;
use crate::padding::unpad_pkcs1_v15;

/// Decrypt a ciphertext using an RSA private key.
///
/// The ciphertext must be exactly `modulus_octets()` bytes and its
/// integer representative must lie below the modulus; those checks, and
/// any padding failure after exponentiation, all return the one generic
/// `DecryptionError`.
pub fn decrypt_bytes(ciphertext: &[u8], private_key: &RsaPrivateKey) -> Result<Vec<u8>, RsaError> {
    let k = private_key.modulus_octets();
    if ciphertext.len() != k {
        return Err(RsaError::DecryptionError);
    }

    let c1 = bytes_to_integer(ciphertext);
    if c1 >= private_key.n {
        return Err(RsaError::DecryptionError);
    }

    let m1 = mod_pow(&c1, &private_key.d, &private_key.n);

    // m1 < n <= 256^k, so the encoding always fits
    let em = integer_to_bytes(&m1, k).map_err(|_| RsaError::DecryptionError)?;

    unpad_pkcs1_v15(&em, k)
}

/// Decrypt a ciphertext and interpret the plaintext as UTF-8
pub fn decrypt_to_string(
    ciphertext: &[u8],
    private_key: &RsaPrivateKey,
) -> Result<String, RsaError> {
    let plaintext = decrypt_bytes(ciphertext, private_key)?;
    String::from_utf8(plaintext).map_err(|_| RsaError::DecryptionError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::from_u64;
    use crate::encrypt::encrypt_bytes;
    use crate::keys::RsaPublicKey;

    fn test_key() -> (RsaPublicKey, RsaPrivateKey) {
        // 512-bit key material; d computed for e = 65537
        let n = num_bigint::BigUint::parse_bytes(
            b"7926955442507415057210607385506121997689529697485136240574604\
              5037687888201201935325782860062911899726684274135003711427924\
              63105078406585121658835942452443",
            10,
        )
        .unwrap();
        let d = num_bigint::BigUint::parse_bytes(
            b"6738462466355350416593071822847117851187594625579358608093928\
              4909205943811542503734150101019176505456357830479043947956607\
              30048516179584987959212992503617",
            10,
        )
        .unwrap();
        (
            RsaPublicKey::new(n.clone(), from_u64(65537)),
            RsaPrivateKey::new(n, d),
        )
    }

    #[test]
    fn test_roundtrip_various_sizes() {
        let (public_key, private_key) = test_key();
        let k = public_key.modulus_octets();

        let cases: Vec<Vec<u8>> = vec![
            vec![],
            b"A".to_vec(),
            b"Hello, World!".to_vec(),
            vec![0x00; 16],
            vec![0xff; 16],
            vec![0x37; k - 11],
        ];

        for message in cases {
            let ciphertext = encrypt_bytes(&message, &public_key).unwrap();
            let decrypted = decrypt_bytes(&ciphertext, &private_key).unwrap();
            assert_eq!(decrypted, message);
        }
    }

    #[test]
    fn test_roundtrip_string() {
        let (public_key, private_key) = test_key();
        let message = "Test message for RSA decryption";

        let ciphertext = encrypt_bytes(message.as_bytes(), &public_key).unwrap();
        let decrypted = decrypt_to_string(&ciphertext, &private_key).unwrap();
        assert_eq!(decrypted, message);
    }

    #[test]
    fn test_decrypt_wrong_length() {
        let (_, private_key) = test_key();
        let k = private_key.modulus_octets();

        for len in [0usize, 1, 10, k - 1, k + 1, 2 * k] {
            let result = decrypt_bytes(&vec![0u8; len], &private_key);
            assert_eq!(result, Err(RsaError::DecryptionError), "len {}", len);
        }
    }

    #[test]
    fn test_decrypt_representative_out_of_range() {
        let (_, private_key) = test_key();
        let k = private_key.modulus_octets();

        // 256^k - 1 >= n for any k-byte modulus
        let result = decrypt_bytes(&vec![0xffu8; k], &private_key);
        assert_eq!(result, Err(RsaError::DecryptionError));
    }

    #[test]
    fn test_decrypt_garbage() {
        let (_, private_key) = test_key();
        let k = private_key.modulus_octets();

        // Valid length and range, but exponentiation yields no padding
        // structure; must error, never panic or return junk silently
        let mut junk = vec![0x5au8; k];
        junk[0] = 0x00;
        let result = decrypt_bytes(&junk, &private_key);
        assert_eq!(result, Err(RsaError::DecryptionError));
    }

    #[test]
    fn test_decrypt_tampered_ciphertext() {
        let (public_key, private_key) = test_key();

        let mut ciphertext = encrypt_bytes(b"intact", &public_key).unwrap();
        ciphertext[10] ^= 0x01;

        match decrypt_bytes(&ciphertext, &private_key) {
            Ok(recovered) => assert_ne!(recovered, b"intact"),
            Err(e) => assert_eq!(e, RsaError::DecryptionError),
        }
    }
}
