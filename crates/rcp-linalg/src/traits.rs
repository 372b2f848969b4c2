use std::ops;

use crate::backend::estimate;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is all the vector kernels and [`matrix_multiply`][crate::matrix_multiply] need, so they
/// also work with the signed integer types.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + PartialEq
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + ops::AddAssign
        + ops::SubAssign
        + ops::MulAssign
        + PartialEq
        + PartialOrd
        + Copy
{
}

/// Floating-point types the [`NumericBackend`][crate::NumericBackend]s operate on.
///
/// Besides a few constants used by the Newton-Raphson iterations, this provides the coarse
/// reciprocal and reciprocal square root estimates the iterations are seeded with. See
/// [`NewtonRaphson`][crate::NewtonRaphson] for how they are refined.
pub trait Real: Number + Sqrt {
    /// Positive infinity.
    const INFINITY: Self;
    /// The largest finite value.
    const MAX: Self;
    /// `0.5`
    const HALF: Self;
    /// `1.5`
    const THREE_HALVES: Self;
    /// `2.0`
    const TWO: Self;
    /// `2^(2k)`, the even power of two by which inputs near either end of the exponent range are
    /// rescaled before an estimate is taken (`k` is 32 for `f32` and 64 for `f64`).
    ///
    /// A finite, non-zero magnitude below `RESCALE_INV` multiplied by `RESCALE` (or one above
    /// `RESCALE` multiplied by `RESCALE_INV`) is a normal number whose reciprocal and reciprocal
    /// square root are normal as well.
    const RESCALE: Self;
    /// `2^(-2k)`
    const RESCALE_INV: Self;
    /// `2^k`
    const RESCALE_SQRT: Self;
    /// `2^(-k)`
    const RESCALE_SQRT_INV: Self;

    /// Returns `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;

    /// Returns a coarse approximation of `1 / self`.
    ///
    /// Uses the target's reciprocal estimate instruction if it has one. The result is only
    /// meaningful for normal, finite inputs whose reciprocal is also normal.
    fn recip_estimate(self) -> Self;

    /// Returns a coarse approximation of `1 / sqrt(self)`.
    ///
    /// Uses the target's reciprocal square root estimate instruction if it has one. The result is
    /// only meaningful for positive, normal, finite inputs.
    fn rsqrt_estimate(self) -> Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: i8, i16, i32, i64, i128);
zero_one!(0.0, 1.0: f32, f64);

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Real for f32 {
    const INFINITY: Self = f32::INFINITY;
    const MAX: Self = f32::MAX;
    const HALF: Self = 0.5;
    const THREE_HALVES: Self = 1.5;
    const TWO: Self = 2.0;
    const RESCALE: Self = Self::RESCALE_SQRT * Self::RESCALE_SQRT;
    const RESCALE_INV: Self = 1.0 / Self::RESCALE;
    const RESCALE_SQRT: Self = 4294967296.0;
    const RESCALE_SQRT_INV: Self = 1.0 / Self::RESCALE_SQRT;

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        self.copysign(sign)
    }

    #[inline]
    fn recip_estimate(self) -> Self {
        estimate::recip_f32(self)
    }

    #[inline]
    fn rsqrt_estimate(self) -> Self {
        estimate::rsqrt_f32(self)
    }
}

impl Real for f64 {
    const INFINITY: Self = f64::INFINITY;
    const MAX: Self = f64::MAX;
    const HALF: Self = 0.5;
    const THREE_HALVES: Self = 1.5;
    const TWO: Self = 2.0;
    const RESCALE: Self = Self::RESCALE_SQRT * Self::RESCALE_SQRT;
    const RESCALE_INV: Self = 1.0 / Self::RESCALE;
    const RESCALE_SQRT: Self = 18446744073709551616.0;
    const RESCALE_SQRT_INV: Self = 1.0 / Self::RESCALE_SQRT;

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        self.copysign(sign)
    }

    #[inline]
    fn recip_estimate(self) -> Self {
        estimate::recip_f64(self)
    }

    #[inline]
    fn rsqrt_estimate(self) -> Self {
        estimate::rsqrt_f64(self)
    }
}
