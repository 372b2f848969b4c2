use crate::{NumericBackend, Real};

/// Number of Newton-Raphson steps applied to each estimate.
///
/// Every step roughly doubles the number of correct bits, so this takes a 12-bit `rcpss` estimate
/// past the 53 bits of an `f64`, and even the ~6-bit software estimate past the 24 bits of an `f32`.
const STEPS: usize = 3;

/// [`NumericBackend`] that refines coarse estimates with Newton-Raphson iterations.
///
/// The reciprocal `x ≈ 1/b` is refined with `x' = x * (2 - b*x)`, the reciprocal square root
/// `x ≈ 1/sqrt(a)` with `x' = x * (1.5 - 0.5*a*x*x)`. Square roots are computed as `a * (1/sqrt(a))`,
/// with the multiplication by `a` folded into the last refinement step.
///
/// The estimates come from [`Real::recip_estimate`] and [`Real::rsqrt_estimate`], which use the
/// target's estimate instructions where available. Estimate instructions flush subnormal inputs to
/// zero and can't produce subnormal results, so inputs near either end of the exponent range are
/// first multiplied by an even power of two ([`Real::RESCALE`] or [`Real::RESCALE_INV`]), and the
/// refined result is scaled back exactly. This covers the whole range of positive values, subnormals
/// included.
///
/// Zero and infinite divisors are resolved without an estimate, with the same results as IEEE
/// division.
#[derive(Debug)]
pub enum NewtonRaphson {}

#[inline]
fn recip_step<T: Real>(b: T, x: T) -> T {
    x * (T::TWO - b * x)
}

#[inline]
fn rsqrt_step<T: Real>(a: T, x: T) -> T {
    // `a*x*x` is evaluated left to right, keeping the intermediate near `sqrt(a)` instead of
    // `1/a`, which would leave the normal range for large `a`.
    x * (T::THREE_HALVES - T::HALF * (a * x * x))
}

/// Moves `a` away from the ends of the exponent range.
///
/// Returns `(m, s, s_inv)` with `a == m * s * s` and `s * s_inv == 1`, where `s` is a power of two.
#[inline]
fn rescale<T: Real>(a: T) -> (T, T, T) {
    let mag = if a < T::ZERO { -a } else { a };
    if mag < T::RESCALE_INV {
        (a * T::RESCALE, T::RESCALE_SQRT_INV, T::RESCALE_SQRT)
    } else if mag > T::RESCALE {
        (a * T::RESCALE_INV, T::RESCALE_SQRT, T::RESCALE_SQRT_INV)
    } else {
        (a, T::ONE, T::ONE)
    }
}

/// Returns the reciprocal of `b` if it is `±0` or `±inf`, which the iteration can't refine.
#[inline]
fn exact_recip<T: Real>(b: T) -> Option<T> {
    if b == T::ZERO {
        Some(T::INFINITY.copysign(b))
    } else if b == T::INFINITY || b == -T::INFINITY {
        Some(T::ZERO.copysign(b))
    } else {
        None
    }
}

/// Refines the reciprocal of the rescaled `b`.
///
/// Returns `(x, s)` with `1/b == x * s * s`.
#[inline]
fn reduced_recip<T: Real>(b: T) -> (T, T) {
    let (m, _, s_inv) = rescale(b);
    let mut x = m.recip_estimate();
    for _ in 0..STEPS {
        x = recip_step(m, x);
    }
    (x, s_inv)
}

impl NumericBackend for NewtonRaphson {
    #[inline]
    fn reciprocal<T: Real>(b: T) -> T {
        if let Some(r) = exact_recip(b) {
            return r;
        }

        let (x, s) = reduced_recip(b);
        x * s * s
    }

    #[inline]
    fn inverse_sqrt<T: Real>(a: T) -> T {
        if a <= T::ZERO {
            return T::INFINITY;
        }
        if a == T::INFINITY {
            return T::ZERO;
        }

        let (m, _, s_inv) = rescale(a);
        let mut x = m.rsqrt_estimate();
        for _ in 0..STEPS {
            x = rsqrt_step(m, x);
        }
        x * s_inv
    }

    #[inline]
    fn sqrt<T: Real>(a: T) -> T {
        if a <= T::ZERO {
            return T::ZERO;
        }
        if a > T::MAX {
            return T::MAX;
        }

        let (m, s, _) = rescale(a);
        let mut x = m.rsqrt_estimate();
        for _ in 1..STEPS {
            x = rsqrt_step(m, x);
        }
        m * x * (T::THREE_HALVES - T::HALF * (m * x * x)) * s
    }

    #[inline]
    fn divide<T: Real>(a: T, b: T) -> T {
        if a == T::ZERO {
            return T::ZERO;
        }
        if let Some(r) = exact_recip(b) {
            return r * a;
        }

        // Scaling back last keeps `x * a` from overflowing early when `b` is tiny.
        let (x, s) = reduced_recip(b);
        x * a * s * s
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::Native;

    use super::*;

    const MAGNITUDES_F32: [f32; 11] = [
        1e-37, 3e-30, 1e-20, 1e-5, 0.1, 1.0, 3.0, 1e5, 7e20, 2e30, 1e37,
    ];
    const MAGNITUDES_F64: [f64; 11] = [
        1e-300, 3e-200, 1e-40, 1e-5, 0.1, 1.0, 3.0, 1e5, 7e40, 2e200, 1e300,
    ];

    /// Subnormals (the smallest one, and one with a finite reciprocal) and near-maximum values.
    const EDGES_F32: [f32; 6] = [
        1e-45,
        1e-40,
        3e-39,
        f32::MIN_POSITIVE,
        f32::MAX / 2.0,
        f32::MAX,
    ];
    const EDGES_F64: [f64; 6] = [
        5e-324,
        1e-310,
        6e-309,
        f64::MIN_POSITIVE,
        f64::MAX / 2.0,
        f64::MAX,
    ];

    #[test]
    fn reciprocal_matches_native() {
        for m in MAGNITUDES_F32.into_iter().chain(EDGES_F32) {
            for b in [m, -m] {
                assert_relative_eq!(
                    NewtonRaphson::reciprocal(b),
                    Native::reciprocal(b),
                    max_relative = 1e-6
                );
            }
        }
        for m in MAGNITUDES_F64.into_iter().chain(EDGES_F64) {
            for b in [m, -m] {
                assert_relative_eq!(
                    NewtonRaphson::reciprocal(b),
                    Native::reciprocal(b),
                    max_relative = 1e-12
                );
            }
        }

        // Subnormal results.
        assert!(NewtonRaphson::reciprocal(f32::MAX) > 0.0);
        assert!(NewtonRaphson::reciprocal(f64::MAX) > 0.0);
    }

    #[test]
    fn inverse_sqrt_matches_native() {
        for a in MAGNITUDES_F32.into_iter().chain(EDGES_F32) {
            assert_relative_eq!(
                NewtonRaphson::inverse_sqrt(a),
                Native::inverse_sqrt(a),
                max_relative = 1e-6
            );
        }
        for a in MAGNITUDES_F64.into_iter().chain(EDGES_F64) {
            assert_relative_eq!(
                NewtonRaphson::inverse_sqrt(a),
                Native::inverse_sqrt(a),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn sqrt_matches_native() {
        for a in MAGNITUDES_F32.into_iter().chain(EDGES_F32) {
            assert_relative_eq!(NewtonRaphson::sqrt(a), Native::sqrt(a), max_relative = 1e-6);
        }
        for a in MAGNITUDES_F64.into_iter().chain(EDGES_F64) {
            assert_relative_eq!(NewtonRaphson::sqrt(a), Native::sqrt(a), max_relative = 1e-12);
        }
    }

    #[test]
    fn divide_matches_native() {
        for a in [1.0f32, -2.5, 1e10, 3e-10] {
            for b in [7.0f32, -0.125, 1e20, 4e-20, 3e-39, f32::MAX] {
                assert_relative_eq!(
                    NewtonRaphson::divide(a, b),
                    Native::divide(a, b),
                    max_relative = 1e-6
                );
            }
        }
        for a in [1.0f64, -2.5, 1e100, 3e-100] {
            for b in [7.0f64, -0.125, 1e200, 4e-200, 6e-309, f64::MAX] {
                assert_relative_eq!(
                    NewtonRaphson::divide(a, b),
                    Native::divide(a, b),
                    max_relative = 1e-12
                );
            }
        }
        assert_eq!(NewtonRaphson::divide(0.0f32, 0.0), 0.0);
        assert_eq!(NewtonRaphson::divide(0.0f64, f64::NAN), 0.0);
    }

    #[test]
    fn zero_and_infinite_divisors() {
        for b in [0.0f32, -0.0, f32::INFINITY, f32::NEG_INFINITY] {
            let (nr, native) = (NewtonRaphson::reciprocal(b), Native::reciprocal(b));
            assert_eq!(nr, native);
            assert_eq!(nr.is_sign_negative(), native.is_sign_negative());
            for a in [3.0f32, -3.0] {
                assert_eq!(NewtonRaphson::divide(a, b), Native::divide(a, b));
            }
        }
        for b in [0.0f64, -0.0, f64::INFINITY, f64::NEG_INFINITY] {
            let (nr, native) = (NewtonRaphson::reciprocal(b), Native::reciprocal(b));
            assert_eq!(nr, native);
            assert_eq!(nr.is_sign_negative(), native.is_sign_negative());
            for a in [3.0f64, -3.0] {
                assert_eq!(NewtonRaphson::divide(a, b), Native::divide(a, b));
            }
        }

        assert_eq!(NewtonRaphson::inverse_sqrt(f32::INFINITY), 0.0);
        assert!(NewtonRaphson::reciprocal(f32::NAN).is_nan());
    }

    #[test]
    fn perfect_squares() {
        for i in 1..=64 {
            let i = i as f32;
            assert_relative_eq!(NewtonRaphson::sqrt(i * i), i, max_relative = 1e-6);
        }
    }
}
