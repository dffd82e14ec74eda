use std::sync::OnceLock;

use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::BigUint;

/// Base field of BN254, p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub use ark_bn254::Fq as BaseField;

static MODULUS: OnceLock<BigUint> = OnceLock::new();
static SQRT_EXPONENT: OnceLock<Vec<u64>> = OnceLock::new();

/// Base field modulus p as an integer.
pub(crate) fn modulus() -> &'static BigUint {
    MODULUS.get_or_init(|| BigUint::from_bytes_le(&BaseField::MODULUS.to_bytes_le()))
}

/// Right-hand side of the G1 equation y^2 = x^3 + 3.
pub(crate) fn curve_rhs(x: &BaseField) -> BaseField {
    x.square() * x + BaseField::from(3u64)
}

/// Returns a^((p+1)/4).
///
/// p = 3 (mod 4), so the result is a square root of `a` whenever one exists.
/// Callers must square the result to find out.
pub(crate) fn sqrt_candidate(a: &BaseField) -> BaseField {
    let exponent = SQRT_EXPONENT.get_or_init(|| ((modulus() + 1u32) >> 2u32).to_u64_digits());
    a.pow(exponent)
}
