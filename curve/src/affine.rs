// BN254 (alt_bn128) G1 : y^2 = x^3 + 3 over GF(p)
// p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
// Generator: (1, 2)
// Group order: 21888242871839275222246405745257275088548364400416034343698204186575808495617 (254 bits)
// Cofactor: 1

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use ark_bn254::G1Affine;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, One, PrimeField, Zero};
use num_bigint::BigUint;

use crate::basefield::{modulus, BaseField};
use crate::errors::CryptoError;
use crate::group::Group;
use crate::scalarfield::{ScalarBits, SCALAR_BYTES};

/// Affine point of G1, or the point at infinity.
///
/// The serialized form is 64 bytes: x then y, each big-endian and 32 bytes
/// wide. The identity serializes as 64 zero bytes, which is never a valid
/// affine point because (0, 0) is not on the curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Affine {
    inner: G1Affine,
}

impl Affine {
    /// Size of the uncompressed serialization in bytes.
    pub const SERIALIZED_SIZE: usize = 2 * SCALAR_BYTES;

    /// The point at infinity (identity element).
    pub fn infinity() -> Self {
        Affine {
            inner: G1Affine::zero(),
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.inner.infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 + 3.
    pub fn is_on_curve(&self) -> bool {
        self.inner.is_on_curve()
    }

    /// Fixed base point (1, 2).
    pub fn generator() -> Self {
        Affine {
            inner: G1Affine::generator(),
        }
    }

    /// Builds a point from affine coordinates, mapping (0, 0) to the identity.
    pub fn from_coordinates(x: BaseField, y: BaseField) -> Result<Self, CryptoError> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self::infinity());
        }

        let inner = G1Affine::new_unchecked(x, y);
        if !inner.is_on_curve() {
            return Err(CryptoError::InvalidPoint(
                "point is not on the curve".to_string(),
            ));
        }
        Ok(Affine { inner })
    }

    /// Deserializes the 64-byte `x || y` form.
    pub fn from_bytes(bytes: &[u8; Self::SERIALIZED_SIZE]) -> Result<Self, CryptoError> {
        let (x_bytes, y_bytes) = bytes.split_at(SCALAR_BYTES);
        let x = decode_coordinate(x_bytes)?;
        let y = decode_coordinate(y_bytes)?;
        Self::from_coordinates(x, y)
    }

    /// Serializes to the 64-byte `x || y` form.
    pub fn to_bytes(&self) -> [u8; Self::SERIALIZED_SIZE] {
        let mut out = [0u8; Self::SERIALIZED_SIZE];
        if self.is_infinity() {
            return out;
        }

        out[..SCALAR_BYTES].copy_from_slice(&self.inner.x.into_bigint().to_bytes_be());
        out[SCALAR_BYTES..].copy_from_slice(&self.inner.y.into_bigint().to_bytes_be());
        out
    }

    /// Affine coordinates as rendered in the canonical string form.
    ///
    /// The identity has no affine coordinates; it renders as (0, 1).
    fn display_coordinates(&self) -> (BaseField, BaseField) {
        if self.is_infinity() {
            (BaseField::zero(), BaseField::one())
        } else {
            (self.inner.x, self.inner.y)
        }
    }

    #[inline]
    fn from_projective(point: ark_bn254::G1Projective) -> Self {
        Affine {
            inner: point.into_affine(),
        }
    }
}

fn decode_coordinate(bytes: &[u8]) -> Result<BaseField, CryptoError> {
    let value = BigUint::from_bytes_be(bytes);
    if &value >= modulus() {
        return Err(CryptoError::InvalidPoint(
            "coordinate exceeds modulus".to_string(),
        ));
    }
    Ok(BaseField::from_be_bytes_mod_order(bytes))
}

fn write_limbs(f: &mut Formatter<'_>, element: &BaseField) -> fmt::Result {
    let limbs = element.into_bigint().0;
    write!(
        f,
        "[{:016x} {:016x} {:016x} {:016x}]",
        limbs[0], limbs[1], limbs[2], limbs[3]
    )
}

/// Canonical string form `bn256.G1([x limbs], [y limbs])`.
///
/// Limbs are the little-endian 64-bit words of each coordinate. This text is
/// hashed into Schnorr challenges, so it must never change.
impl Display for Affine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (x, y) = self.display_coordinates();
        f.write_str("bn256.G1(")?;
        write_limbs(f, &x)?;
        f.write_str(", ")?;
        write_limbs(f, &y)?;
        f.write_str(")")
    }
}

impl From<G1Affine> for Affine {
    #[inline]
    fn from(inner: G1Affine) -> Self {
        Affine { inner }
    }
}

impl From<Affine> for G1Affine {
    #[inline]
    fn from(point: Affine) -> Self {
        point.inner
    }
}

impl Group for Affine {
    type Scalar = BigUint;

    #[inline]
    fn identity() -> Self {
        Self::infinity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn negate(&self) -> Self {
        -*self
    }

    fn scalar_mul(&self, scalar: &BigUint) -> Self {
        Self::from_projective(self.inner.into_group() * scalar.to_scalar_field())
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_projective(self.inner.into_group() + other.inner.into_group())
    }
}

impl AddAssign for Affine {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_projective(-self.inner.into_group())
    }
}
