// RSA Big Integer Operations
// Octet-string conversion and modular exponentiation over num-bigint

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::RsaError;

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Interpret bytes as a big-endian unsigned integer (OS2IP).
///
/// For fixed-width inputs, lexicographic byte order matches numeric order.
pub fn bytes_to_integer(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Encode a big integer as exactly `length` big-endian bytes (I2OSP),
/// left-padding with zero bytes.
///
/// Fails with `EncodingOverflow` when `value >= 256^length`.
pub fn integer_to_bytes(value: &RsaBigInt, length: usize) -> Result<Vec<u8>, RsaError> {
    if value.bits() > 8 * length as u64 {
        return Err(RsaError::EncodingOverflow { length });
    }

    let mut out = vec![0u8; length];
    if !value.is_zero() {
        let raw = value.to_bytes_be();
        out[length - raw.len()..].copy_from_slice(&raw);
    }
    Ok(out)
}

/// Modular exponentiation: base^exp mod modulus
/// Square-and-multiply over the exponent bits, most significant first.
///
/// The accumulator is squared on every bit; the extra multiplication by
/// the base happens only on set bits. Squaring unconditionally keeps the
/// per-bit control flow uniform.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }
    if exp.is_zero() {
        // Identity; not reached by the cipher paths.
        return RsaBigInt::one();
    }

    let base = base % modulus;
    let mut acc = base.clone();

    // The top bit is consumed by the initialization above.
    for i in (0..exp.bits() - 1).rev() {
        acc = (&acc * &acc) % modulus;
        if exp.bit(i) {
            acc = (&acc * &base) % modulus;
        }
    }

    acc
}
