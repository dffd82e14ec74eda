use ark_bn254::{G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup};
use num_bigint::BigUint;

use crate::scalarfield::ScalarBits;
use crate::Affine;

/// Compute a * P + b * Q with a single normalization at the end.
pub fn double_scalar_mul(a: &BigUint, p: &Affine, b: &BigUint, q: &Affine) -> Affine {
    let lhs = to_projective(p) * a.to_scalar_field();
    let rhs = to_projective(q) * b.to_scalar_field();
    from_projective(lhs + rhs)
}

/// Compute a * G + b * P, where G is the fixed generator.
pub fn double_scalar_mul_basepoint(a: &BigUint, b: &BigUint, point: &Affine) -> Affine {
    double_scalar_mul(a, &Affine::generator(), b, point)
}

#[inline]
fn to_projective(point: &Affine) -> G1Projective {
    G1Affine::from(*point).into_group()
}

#[inline]
fn from_projective(point: G1Projective) -> Affine {
    Affine::from(point.into_affine())
}
