//! Signature record and challenge hashing for the Schnorr signature scheme.

use curve::{Affine, BigUint, keccak256_scalar};

/// A Schnorr signature over a text message.
///
/// The record carries everything a verifier needs besides the scheme
/// constants: the public point `P`, the nonce commitment `K = k * G`, the
/// signed message, the challenge `E` and the response `S`.
///
/// # Structure
///
/// `E = Keccak256(message || str(P) || str(K))` read as a big-endian integer
/// and left unreduced. `S = (k + E * x) mod n` where `x` is the secret scalar
/// and `n` the group order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The public point P the challenge was bound to
    pub public: Affine,
    /// The nonce commitment K = G * k
    pub nonce_commitment: Affine,
    /// The signed message
    pub message: String,
    /// The challenge E
    pub e: BigUint,
    /// The response S
    pub s: BigUint,
}

/// Computes the Fiat-Shamir challenge `E = H(msg || P || K)`.
///
/// Points enter the hash through their canonical `Display` form, so the
/// challenge depends on the exact text rendering of both points. The digest
/// is not reduced modulo the group order.
pub fn hash_challenge(msg: &str, public: &Affine, nonce_commitment: &Affine) -> BigUint {
    let transcript = format!("{msg}{public}{nonce_commitment}");
    keccak256_scalar(transcript.as_bytes())
}
