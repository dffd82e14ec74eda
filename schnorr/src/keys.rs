//! Signing and verifying keys for the Schnorr signature scheme.

use curve::{Affine, BigUint, Group, double_scalar_mul_basepoint, group_order, random_scalar};
use rand::Rng;

use crate::signatures::{Signature, hash_challenge};

/// A secret signing key for creating Schnorr signatures.
///
/// The signing key is a scalar `x`. Values at or above the group order are
/// accepted and act through their residue.
///
/// # Example
///
/// ```
/// use schnorr::SigningKey;
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningKey {
    scalar: BigUint,
}

/// A public verifying key for verifying Schnorr signatures.
///
/// Usually derived as `G * x`, but any point of G1 may be used; signatures
/// only verify when it matches the signing key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    point: Affine,
}

impl SigningKey {
    /// Wraps a caller-chosen secret scalar.
    pub fn from_scalar(scalar: BigUint) -> Self {
        Self { scalar }
    }

    /// Generates a random signing key uniformly below the group order.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: random_scalar(rng),
        }
    }

    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Derives the public verifying key `G * x`.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            point: Affine::mul_generator(&self.scalar),
        }
    }

    /// Signs a message using the derived verifying key as `P`.
    ///
    /// # Example
    ///
    /// ```
    /// use schnorr::SigningKey;
    ///
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let signature = signing_key.sign(&mut rng, "hello");
    /// assert!(signing_key.verifying_key().verify_signature(&signature));
    /// ```
    pub fn sign<R: Rng + ?Sized>(&self, rng: &mut R, msg: &str) -> Signature {
        self.sign_with_public(rng, &self.verifying_key(), msg)
    }

    /// Signs a message, binding the challenge to the supplied public point.
    ///
    /// The point is used verbatim. The algorithm:
    /// 1. Draw a random nonce `k`
    /// 2. Compute `K = G * k`
    /// 3. Compute challenge `E = H(msg || P || K)`
    /// 4. Compute `S = (k + E * x) mod n`
    ///
    /// If `public` is not `G * x` the resulting signature does not verify.
    pub fn sign_with_public<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        public: &VerifyingKey,
        msg: &str,
    ) -> Signature {
        let nonce = random_scalar(rng);
        let nonce_commitment = Affine::mul_generator(&nonce);

        let e = hash_challenge(msg, &public.point, &nonce_commitment);
        let s = (nonce + &e * &self.scalar) % group_order();

        Signature {
            public: public.point,
            nonce_commitment,
            message: msg.to_string(),
            e,
            s,
        }
    }
}

impl VerifyingKey {
    pub fn from_point(point: Affine) -> Self {
        Self { point }
    }

    pub fn point(&self) -> &Affine {
        &self.point
    }

    /// Verifies the pair `(e, s)` on `msg` under this key.
    ///
    /// Reconstructs `K' = G * s - P * e` and accepts iff
    /// `H(msg || P || K')` equals `e` exactly. A challenge that was reduced
    /// modulo the group order therefore does not verify.
    pub fn verify(&self, msg: &str, e: &BigUint, s: &BigUint) -> bool {
        let nonce_commitment = double_scalar_mul_basepoint(s, &negate_mod_order(e), &self.point);
        hash_challenge(msg, &self.point, &nonce_commitment) == *e
    }

    /// Verifies a full signature record against this key.
    pub fn verify_signature(&self, sig: &Signature) -> bool {
        self.verify(&sig.message, &sig.e, &sig.s)
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}

impl From<Affine> for VerifyingKey {
    fn from(point: Affine) -> Self {
        Self::from_point(point)
    }
}

fn negate_mod_order(value: &BigUint) -> BigUint {
    let order = group_order();
    (order - value % order) % order
}
