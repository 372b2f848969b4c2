//! Reciprocal, square root and division primitives.
//!
//! Everything in this crate that would divide or take a square root goes through a
//! [`NumericBackend`] instead. There are two implementations:
//!
//! - [`Native`] uses the hardware's (or the soft-float library's) division and square root.
//! - [`NewtonRaphson`] seeds from a coarse estimate instruction and refines it with three
//!   Newton-Raphson steps, for targets where division and square root are slow or missing.
//!
//! The backend used by the free functions in this module and by the kernels that don't take an
//! explicit backend parameter is [`DefaultBackend`], which is chosen at build time via the
//! `newton-raphson` cargo feature.
//!
//! # Edge Cases
//!
//! Both backends follow the same conventions for inputs outside the domain of the operation:
//!
//! | Operation          | Input           | Result        |
//! |--------------------|-----------------|---------------|
//! | [`sqrt`]           | `a <= 0`        | `0`           |
//! | [`sqrt`]           | `a > T::MAX`    | `T::MAX`      |
//! | [`inverse_sqrt`]   | `a < 0`         | `+inf`        |
//! | [`inverse_sqrt`]   | `a == 0`        | `+inf`        |
//! | [`inverse_sqrt`]   | `a == +inf`     | `0`           |
//! | [`reciprocal`]     | `b == ±0`       | `±inf`        |
//! | [`reciprocal`]     | `b == ±inf`     | `±0`          |
//!
//! In particular, none of these produce a NaN, and [`divide`] by `±0` or `±inf` behaves like the
//! [`reciprocal`] multiplied by `a`. Additionally, [`NewtonRaphson`]'s `divide` returns 0
//! whenever `a == 0`, without looking at `b`.

pub(crate) mod estimate;
mod native;
mod newton;

pub use native::Native;
pub use newton::NewtonRaphson;

use crate::Real;

/// A strategy for computing reciprocals, square roots and quotients.
///
/// Implementors are uninhabited marker types; the operations are associated functions, so the
/// backend is fixed at compile time and selecting one costs nothing at runtime.
pub trait NumericBackend {
    /// Computes `1 / b`.
    fn reciprocal<T: Real>(b: T) -> T;

    /// Computes `1 / sqrt(a)`.
    ///
    /// Returns positive infinity for `a <= 0`.
    fn inverse_sqrt<T: Real>(a: T) -> T;

    /// Computes `sqrt(a)`.
    ///
    /// Returns 0 for `a <= 0`, and [`Real::MAX`] for inputs larger than that (ie. infinity).
    fn sqrt<T: Real>(a: T) -> T;

    /// Computes `a / b`.
    fn divide<T: Real>(a: T, b: T) -> T;
}

/// The [`NumericBackend`] selected for this build.
///
/// This is [`NewtonRaphson`] if the `newton-raphson` feature is enabled, and [`Native`] otherwise.
#[cfg(feature = "newton-raphson")]
pub type DefaultBackend = NewtonRaphson;

/// The [`NumericBackend`] selected for this build.
///
/// This is [`NewtonRaphson`] if the `newton-raphson` feature is enabled, and [`Native`] otherwise.
#[cfg(not(feature = "newton-raphson"))]
pub type DefaultBackend = Native;

/// Computes `1 / b` using the [`DefaultBackend`].
#[inline]
pub fn reciprocal<T: Real>(b: T) -> T {
    DefaultBackend::reciprocal(b)
}

/// Computes `1 / sqrt(a)` using the [`DefaultBackend`].
///
/// Returns positive infinity for `a <= 0`.
#[inline]
pub fn inverse_sqrt<T: Real>(a: T) -> T {
    DefaultBackend::inverse_sqrt(a)
}

/// Computes `sqrt(a)` using the [`DefaultBackend`].
///
/// # Examples
///
/// ```
/// # use rcp_linalg::*;
/// assert_eq!(sqrt(-1.0f32), 0.0);
/// assert_eq!(sqrt(f32::INFINITY), f32::MAX);
/// ```
#[inline]
pub fn sqrt<T: Real>(a: T) -> T {
    DefaultBackend::sqrt(a)
}

/// Computes `a / b` using the [`DefaultBackend`].
#[inline]
pub fn divide<T: Real>(a: T, b: T) -> T {
    DefaultBackend::divide(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_cases<B: NumericBackend>() {
        assert_eq!(B::sqrt(-1.0f32), 0.0);
        assert_eq!(B::sqrt(0.0f32), 0.0);
        assert_eq!(B::sqrt(-0.0f32), 0.0);
        assert_eq!(B::sqrt(f32::NEG_INFINITY), 0.0);
        assert_eq!(B::sqrt(f32::INFINITY), f32::MAX);
        assert_eq!(B::sqrt(-1.0f64), 0.0);
        assert_eq!(B::sqrt(f64::INFINITY), f64::MAX);

        assert_eq!(B::inverse_sqrt(-1.0f32), f32::INFINITY);
        assert_eq!(B::inverse_sqrt(0.0f32), f32::INFINITY);
        assert_eq!(B::inverse_sqrt(-1.0f64), f64::INFINITY);

        assert_eq!(B::inverse_sqrt(f32::INFINITY), 0.0);
        assert_eq!(B::inverse_sqrt(f64::INFINITY), 0.0);

        assert_eq!(B::reciprocal(0.0f32), f32::INFINITY);
        assert_eq!(B::reciprocal(-0.0f32), f32::NEG_INFINITY);
        assert_eq!(B::reciprocal(f64::INFINITY), 0.0);
        assert!(B::reciprocal(f64::NEG_INFINITY).is_sign_negative());
        assert_eq!(B::divide(1.0f32, 0.0), f32::INFINITY);
        assert_eq!(B::divide(-1.0f64, 0.0), f64::NEG_INFINITY);

        assert_eq!(B::divide(0.0f32, 3.0), 0.0);
        assert_eq!(B::divide(0.0f64, 1e-300), 0.0);
    }

    #[test]
    fn native_edge_cases() {
        edge_cases::<Native>();
    }

    #[test]
    fn newton_raphson_edge_cases() {
        edge_cases::<NewtonRaphson>();
    }

    #[test]
    fn default_backend() {
        assert_eq!(sqrt(4.0f64), DefaultBackend::sqrt(4.0f64));
        assert_eq!(reciprocal(4.0f64), DefaultBackend::reciprocal(4.0f64));
        assert_eq!(inverse_sqrt(-4.0f32), f32::INFINITY);
        assert_eq!(divide(0.0f32, 2.0), 0.0);
    }
}
