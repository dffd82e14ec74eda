//! Pedersen commitments over G1.

use num_bigint::BigUint;

use crate::msm::double_scalar_mul;
use crate::Affine;

/// Commits to `value` under `blinding` as `blinding * H + value * G`.
///
/// H and G are taken as given. Hiding and binding only hold if the caller
/// picked generators whose discrete-log relation is unknown.
pub fn commit(blinding: &BigUint, value: &BigUint, h: &Affine, g: &Affine) -> Affine {
    double_scalar_mul(blinding, h, value, g)
}
