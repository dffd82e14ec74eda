//! Error types shared by the codec, the arithmetic operations and the protocols
//! built on top of them.

use thiserror::Error;

/// Errors raised while decoding operands or evaluating an operation.
///
/// Every variant is returned as a value to the immediate caller and passes
/// through composed operations unchanged, so a bad point inside a commitment
/// request is still reported as [`CryptoError::InvalidPoint`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// A hex operand is too short, lacks the `0x` prefix or contains non-hex digits.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Decoded bytes do not describe a point of G1.
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    /// `gcd(a, m) != 1`, so `a` has no inverse modulo `m`.
    #[error("value is not invertible modulo the given modulus")]
    NotInvertible,
}

impl CryptoError {
    /// Stable machine-readable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            CryptoError::MalformedInput(_) => "malformed_input",
            CryptoError::InvalidPoint(_) => "invalid_point",
            CryptoError::NotInvertible => "not_invertible",
        }
    }
}
