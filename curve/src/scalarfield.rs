//! Scalar field of G1. r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
//!
//! Wire scalars are arbitrary-precision integers; they only become field
//! elements (and thereby get reduced modulo r) when they act on a point.

use std::sync::OnceLock;

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

pub use ark_bn254::Fr as ScalarField;

/// Byte width of a canonical scalar.
pub const SCALAR_BYTES: usize = 32;

static GROUP_ORDER: OnceLock<BigUint> = OnceLock::new();

/// Order r of G1, identical to the scalar field modulus.
pub fn group_order() -> &'static BigUint {
    GROUP_ORDER.get_or_init(|| BigUint::from_bytes_le(&ScalarField::MODULUS.to_bytes_le()))
}

/// Conversion of integer scalars into the scalar field.
pub trait ScalarBits {
    /// Reduces the value modulo the group order.
    fn to_scalar_field(&self) -> ScalarField;
}

impl ScalarBits for BigUint {
    #[inline]
    fn to_scalar_field(&self) -> ScalarField {
        ScalarField::from_be_bytes_mod_order(&self.to_bytes_be())
    }
}
