// PKCS#1 v1.5 Padding
// Encodes messages into fixed-width blocks for encryption and validates
// the structure on decryption

use rand::Rng;

use crate::error::RsaError;

/// Fixed overhead of the padding structure:
/// 0x00 0x02 (2 bytes) + at least 8 padding bytes + 0x00 separator.
pub const PAD_OVERHEAD: usize = 11;

/// Pad a message into a `k`-byte encryption block.
///
/// Format: 0x00 || 0x02 || PS || 0x00 || message, where PS is
/// `k - len(message) - 3` random non-zero bytes. Non-zero is enforced by
/// rejection sampling so the separator scan on decryption cannot stop
/// inside the padding string.
///
/// Fails with `MessageTooLong` before any randomness is drawn when the
/// message exceeds `k - 11` bytes.
pub fn pad_pkcs1_v15<R: Rng + ?Sized>(
    message: &[u8],
    k: usize,
    rng: &mut R,
) -> Result<Vec<u8>, RsaError> {
    let max = match k.checked_sub(PAD_OVERHEAD) {
        Some(max) => max,
        None => {
            return Err(RsaError::MessageTooLong {
                max: 0,
                actual: message.len(),
            })
        }
    };
    if message.len() > max {
        return Err(RsaError::MessageTooLong {
            max,
            actual: message.len(),
        });
    }

    // Guaranteed >= 8 by the length check above
    let ps_len = k - message.len() - 3;

    let mut em = Vec::with_capacity(k);
    em.push(0x00);
    em.push(0x02);
    for _ in 0..ps_len {
        em.push(nonzero_byte(rng));
    }
    em.push(0x00);
    em.extend_from_slice(message);

    Ok(em)
}

fn nonzero_byte<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    loop {
        let byte: u8 = rng.gen();
        if byte != 0 {
            return byte;
        }
    }
}

/// Remove PKCS#1 v1.5 padding from a `k`-byte encryption block.
///
/// The recovered message is everything after the first 0x00 byte at or
/// beyond offset 2; it may be empty. Every structural failure (wrong
/// block length, bad marker bytes, missing separator) returns the same
/// `DecryptionError` so callers cannot distinguish which check failed.
pub fn unpad_pkcs1_v15(em: &[u8], k: usize) -> Result<Vec<u8>, RsaError> {
    if em.len() != k || k < PAD_OVERHEAD {
        return Err(RsaError::DecryptionError);
    }

    if em[0] != 0x00 || em[1] != 0x02 {
        return Err(RsaError::DecryptionError);
    }

    let separator = em[2..]
        .iter()
        .position(|&b| b == 0x00)
        .ok_or(RsaError::DecryptionError)?;

    Ok(em[separator + 3..].to_vec())
}
