//! Hash primitives: Keccak-256 to an integer, and a deterministic map from
//! bytes onto G1.

use ark_ff::{Field, PrimeField};
use num_bigint::BigUint;
use sha2::Sha256;
use sha3::{Digest, Keccak256};

use crate::affine::Affine;
use crate::basefield::{curve_rhs, sqrt_candidate, BaseField};
use crate::errors::CryptoError;

/// Keccak-256 digest (pre-NIST padding, as used by Ethereum).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Keccak-256 digest read as a big-endian integer.
pub fn keccak256_scalar(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&keccak256(data))
}

/// Maps arbitrary bytes to a point of G1 by try-and-increment.
///
/// For each one-byte counter `c`, `x = SHA-256(data || c) mod p`. The first
/// `x` for which `x^3 + 3` is a square yields the point `(x, (x^3 + 3)^((p+1)/4))`.
pub fn hash_to_point(data: &[u8]) -> Result<Affine, CryptoError> {
    let mut input = Vec::with_capacity(data.len() + 1);
    input.extend_from_slice(data);
    input.push(0);
    let counter_index = data.len();

    for counter in 0..=u8::MAX {
        input[counter_index] = counter;
        let digest = Sha256::digest(&input);
        let x = BaseField::from_be_bytes_mod_order(&digest);
        let rhs = curve_rhs(&x);
        let y = sqrt_candidate(&rhs);
        if y.square() == rhs {
            return Affine::from_coordinates(x, y);
        }
    }

    Err(CryptoError::InvalidPoint(
        "no counter maps the input onto the curve".to_string(),
    ))
}
