// RSA Encryption
// Pads, converts to an integer representative, exponentiates, encodes

use rand::Rng;

use crate::bigint::{bytes_to_integer, integer_to_bytes, mod_pow};
use crate::error::RsaError;
use crate::keys::RsaPublicKey;
use crate::padding::pad_pkcs1_v15;

/// Encrypt bytes using an RSA public key.
///
/// Returns a ciphertext of exactly `modulus_octets()` bytes. Entropy for
/// the padding string comes from the thread-local generator; this is the
/// only side effect of the encrypt path.
pub fn encrypt_bytes(plaintext: &[u8], public_key: &RsaPublicKey) -> Result<Vec<u8>, RsaError> {
    encrypt_bytes_with_rng(plaintext, public_key, &mut rand::thread_rng())
}

/// Encrypt bytes drawing padding randomness from the supplied generator.
pub fn encrypt_bytes_with_rng<R: Rng + ?Sized>(
    plaintext: &[u8],
    public_key: &RsaPublicKey,
    rng: &mut R,
) -> Result<Vec<u8>, RsaError> {
    let k = public_key.modulus_octets();

    let em = pad_pkcs1_v15(plaintext, k, rng)?;
    let m1 = bytes_to_integer(&em);
    let c1 = mod_pow(&m1, &public_key.e, &public_key.n);

    // m1 < n <= 256^k, so c1 always fits k bytes
    integer_to_bytes(&c1, k)
}

/// Encrypt a string using an RSA public key
pub fn encrypt_str(plaintext: &str, public_key: &RsaPublicKey) -> Result<Vec<u8>, RsaError> {
    encrypt_bytes(plaintext.as_bytes(), public_key)
}
