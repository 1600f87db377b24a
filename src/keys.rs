// RSA Key Types
// Plain value types around externally supplied key material; this core
// does not generate keys

use num_integer::Integer;

use crate::bigint::RsaBigInt;
use crate::error::RsaError;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub d: RsaBigInt, // Private exponent
}

/// Byte length of a modulus: ceil(bitlength(n) / 8).
///
/// Every ciphertext and padded block for the key is exactly this wide.
pub fn modulus_octets(n: &RsaBigInt) -> usize {
    let (octets, rem) = n.bits().div_rem(&8);
    (octets + u64::from(rem != 0)) as usize
}

impl RsaPublicKey {
    pub fn new(n: RsaBigInt, e: RsaBigInt) -> Self {
        Self { n, e }
    }

    /// Get the block size in bytes for this key
    pub fn modulus_octets(&self) -> usize {
        modulus_octets(&self.n)
    }

    /// Encrypt a message using this public key
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, RsaError> {
        crate::encrypt::encrypt_bytes(plaintext, self)
    }
}

impl RsaPrivateKey {
    pub fn new(n: RsaBigInt, d: RsaBigInt) -> Self {
        Self { n, d }
    }

    /// Get the block size in bytes for this key
    pub fn modulus_octets(&self) -> usize {
        modulus_octets(&self.n)
    }

    /// Decrypt a ciphertext using this private key
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, RsaError> {
        crate::decrypt::decrypt_bytes(ciphertext, self)
    }
}
