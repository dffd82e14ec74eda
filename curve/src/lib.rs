//! BN254 (alt_bn128) G1 arithmetic and wire codec.
//!
//! This crate provides the affine point type, the canonical hex codec used on
//! the wire, the big-integer operations exposed by the service, Pedersen
//! commitments and helpers for hashing and random sampling. The curve group
//! itself is provided by `ark-bn254`; the curve constants are fixed.

mod affine;
mod basefield;
pub mod bigint;
pub mod codec;
mod commitment;
mod errors;
mod group;
mod hash;
mod msm;
mod random;
mod scalarfield;


pub use affine::Affine;
pub use basefield::BaseField;
pub use codec::{
    decode_point, decode_scalar, encode_point, encode_scalar, encode_scalar_fixed, CurvePoint,
};
pub use commitment::commit;
pub use errors::CryptoError;
pub use group::Group;
pub use hash::{hash_to_point, keccak256, keccak256_scalar};
pub use msm::{double_scalar_mul, double_scalar_mul_basepoint};
pub use num_bigint::BigUint;
pub use random::random_scalar;
pub use scalarfield::{group_order, ScalarBits, ScalarField, SCALAR_BYTES};
