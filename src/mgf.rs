// Mask Generation Function (MGF1)
// Expands a seed into an arbitrary-length mask by hashing seed || counter

use sha2::digest::Digest;

use crate::error::RsaError;

/// Longest mask the generator will produce.
pub const MAX_MASK_LEN: usize = 0x10000;

/// Generate a `mask_len`-byte mask from `seed`.
///
/// The mask is the concatenation of `D(seed || BE32(counter))` for
/// counter = 0, 1, 2, ... truncated to `mask_len` bytes. Deterministic:
/// the same seed and length always yield the same mask.
///
/// Fails with `MaskTooLong` when `mask_len` exceeds [`MAX_MASK_LEN`].
pub fn generate_mask<D: Digest>(seed: &[u8], mask_len: usize) -> Result<Vec<u8>, RsaError> {
    if mask_len > MAX_MASK_LEN {
        return Err(RsaError::MaskTooLong {
            requested: mask_len,
        });
    }

    let mut mask = Vec::with_capacity(mask_len + <D as Digest>::output_size());
    let mut counter: u32 = 0;

    while mask.len() < mask_len {
        let mut hasher = D::new();
        hasher.update(seed);
        hasher.update(counter.to_be_bytes());
        mask.extend_from_slice(&hasher.finalize());
        counter += 1;
    }

    mask.truncate(mask_len);
    Ok(mask)
}
