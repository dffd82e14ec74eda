//! Schnorr signature scheme over BN254 G1.
//!
//! This library implements a Schnorr signature scheme using:
//! - The BN254 (alt_bn128) G1 group from the `curve` crate
//! - Keccak-256 over the text transcript for the Fiat-Shamir challenge
//! - UTF-8 text messages
//!
//! # Example
//!
//! ```
//! use schnorr::{SigningKey, VerifyingKey};
//!
//! let mut rng = rand::rng();
//! let signing_key = SigningKey::random(&mut rng);
//! let verifying_key = VerifyingKey::from(&signing_key);
//!
//! let signature = signing_key.sign(&mut rng, "hello schnorr");
//! assert!(verifying_key.verify(&signature.message, &signature.e, &signature.s));
//! ```
//!
//! # Security Considerations
//!
//! - Each signature draws a fresh nonce; pass a CSPRNG outside of tests
//! - The challenge hashes the text form of `P` and `K`, so verifiers must
//!   render points exactly as the `curve` crate does

mod keys;
mod signatures;


pub use keys::{SigningKey, VerifyingKey};
pub use signatures::{Signature, hash_challenge};
