use crate::{NumericBackend, Real};

/// [`NumericBackend`] using native division and square root.
///
/// This is the right choice for any target with a hardware FPU that implements them, and the
/// default unless the `newton-raphson` feature is enabled.
#[derive(Debug)]
pub enum Native {}

impl NumericBackend for Native {
    #[inline]
    fn reciprocal<T: Real>(b: T) -> T {
        T::ONE / b
    }

    #[inline]
    fn inverse_sqrt<T: Real>(a: T) -> T {
        if a <= T::ZERO {
            return T::INFINITY;
        }
        T::ONE / a.sqrt()
    }

    #[inline]
    fn sqrt<T: Real>(a: T) -> T {
        if a <= T::ZERO {
            T::ZERO
        } else if a > T::MAX {
            T::MAX
        } else {
            a.sqrt()
        }
    }

    #[inline]
    fn divide<T: Real>(a: T, b: T) -> T {
        a / b
    }
}
