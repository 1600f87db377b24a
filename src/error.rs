// RSA Error Types
// One enum for every failure the core can surface

use thiserror::Error;

/// Errors returned by the RSA encryption core.
///
/// `DecryptionError` deliberately carries no detail: every structural
/// failure on the decrypt path (wrong ciphertext length, representative
/// out of range, malformed padding) collapses into this one variant so
/// the decoder cannot be used as a padding oracle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    /// The integer does not fit the requested fixed-width encoding.
    #[error("integer too large for {length}-byte encoding")]
    EncodingOverflow { length: usize },

    /// The plaintext exceeds the maximum the modulus can carry.
    #[error("message too long: max {max} bytes, got {actual}")]
    MessageTooLong { max: usize, actual: usize },

    /// The requested mask exceeds the MGF output cap.
    #[error("mask too long: requested {requested} bytes")]
    MaskTooLong { requested: usize },

    /// Generic decryption failure.
    #[error("decryption error")]
    DecryptionError,
}
