//! Canonical hex wire representation of scalars and points.
//!
//! Scalars travel as `0x`-prefixed lowercase hex of variable width. Point
//! coordinates and signature fields are fixed at 64 hex digits. Callers rely
//! on that asymmetry, so both encoders must keep their exact output.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::affine::Affine;
use crate::errors::CryptoError;
use crate::scalarfield::SCALAR_BYTES;

/// Prefix carried by every numeric wire value.
pub const HEX_PREFIX: &str = "0x";

/// Hex digits of a fixed-width 32-byte value.
pub const FIXED_HEX_DIGITS: usize = 2 * SCALAR_BYTES;

/// Wire form of a curve point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: String,
    pub y: String,
}

impl CurvePoint {
    /// Decodes both coordinates into a point of G1.
    pub fn decode(&self) -> Result<Affine, CryptoError> {
        decode_point(&self.x, &self.y)
    }
}

impl From<&Affine> for CurvePoint {
    fn from(point: &Affine) -> Self {
        encode_point(point)
    }
}

/// Returns the hex digits after the `0x` prefix.
fn hex_digits(input: &str) -> Result<&str, CryptoError> {
    if input.len() < HEX_PREFIX.len() + 1 {
        return Err(CryptoError::MalformedInput(format!(
            "hex value {input:?} is too short"
        )));
    }

    let digits = input
        .strip_prefix(HEX_PREFIX)
        .or_else(|| input.strip_prefix("0X"))
        .ok_or_else(|| {
            CryptoError::MalformedInput(format!("hex value {input:?} is missing the 0x prefix"))
        })?;

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CryptoError::MalformedInput(format!(
            "hex value {input:?} contains non-hex digits"
        )));
    }
    Ok(digits)
}

/// Parses a `0x`-prefixed hex string of any width.
pub fn decode_scalar(hex: &str) -> Result<BigUint, CryptoError> {
    let digits = hex_digits(hex)?;
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| CryptoError::MalformedInput(format!("failed to parse {hex:?} as base-16")))
}

/// `0x` followed by lowercase hex without padding; zero encodes as `0x0`.
pub fn encode_scalar(value: &BigUint) -> String {
    format!("{value:#x}")
}

/// `0x` followed by exactly 64 lowercase hex digits.
pub fn encode_scalar_fixed(value: &BigUint) -> String {
    format!("{HEX_PREFIX}{value:0width$x}", width = FIXED_HEX_DIGITS)
}

fn decode_coordinate(hex_value: &str, out: &mut [u8]) -> Result<(), CryptoError> {
    let digits = hex_digits(hex_value)?;
    if digits.len() > FIXED_HEX_DIGITS {
        return Err(CryptoError::MalformedInput(format!(
            "coordinate {hex_value:?} is wider than {FIXED_HEX_DIGITS} hex digits"
        )));
    }

    let padded = format!("{digits:0>width$}", width = FIXED_HEX_DIGITS);
    hex::decode_to_slice(padded, out)
        .map_err(|err| CryptoError::MalformedInput(format!("coordinate {hex_value:?}: {err}")))
}

/// Left-pads both coordinates to 32 bytes and deserializes `x || y`.
pub fn decode_point(x_hex: &str, y_hex: &str) -> Result<Affine, CryptoError> {
    let mut bytes = [0u8; Affine::SERIALIZED_SIZE];
    let (x_bytes, y_bytes) = bytes.split_at_mut(SCALAR_BYTES);
    decode_coordinate(x_hex, x_bytes)?;
    decode_coordinate(y_hex, y_bytes)?;
    Affine::from_bytes(&bytes)
}

/// Splits the 64-byte serialization into two fixed-width coordinates.
pub fn encode_point(point: &Affine) -> CurvePoint {
    let bytes = point.to_bytes();
    CurvePoint {
        x: format!("{HEX_PREFIX}{}", hex::encode(&bytes[..SCALAR_BYTES])),
        y: format!("{HEX_PREFIX}{}", hex::encode(&bytes[SCALAR_BYTES..])),
    }
}
