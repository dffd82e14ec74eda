use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::scalarfield::ScalarBits;

/// Additive prime-order group operations used by the commitment and signature layers.
pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn negate(&self) -> Self;

    /// Multiplies by `scalar`, implicitly reduced modulo the group order.
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self;

    #[inline]
    fn mul_generator(scalar: &Self::Scalar) -> Self {
        Self::generator().scalar_mul(scalar)
    }

    /// Sum of `scalars[i] * points[i]`, accumulated left to right.
    fn multi_scalar_mul(points: &[Self], scalars: &[Self::Scalar]) -> Self {
        debug_assert_eq!(
            points.len(),
            scalars.len(),
            "Points and scalars must have same length"
        );

        let mut result = Self::identity();
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            result += point.scalar_mul(scalar);
        }
        result
    }
}
