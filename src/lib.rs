// RSA Encryption Core
// Exports the arithmetic and encoding primitives plus the cipher surface

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keys;
pub mod mgf;
pub mod padding;

pub use decrypt::{decrypt_bytes, decrypt_to_string};
pub use encrypt::{encrypt_bytes, encrypt_str};
pub use error::RsaError;
pub use keys::{RsaPrivateKey, RsaPublicKey};
pub use mgf::generate_mask;
pub use padding::{pad_pkcs1_v15, unpad_pkcs1_v15};
