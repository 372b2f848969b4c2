//! Buffer preconditions shared by all kernels.
//!
//! Every kernel expects its buffers to start at an address that is a multiple of
//! [`BUFFER_ALIGNMENT`], so that the loops can be vectorized (or, on DSPs, software-pipelined)
//! without a scalar prologue. The value is configured at build time:
//!
//! | Feature    | [`BUFFER_ALIGNMENT`] |
//! |------------|----------------------|
//! | (none)     | 4                    |
//! | `align-8`  | 8                    |
//! | `align-16` | 16                   |
//! | `align-32` | 32                   |
//!
//! Violating the alignment precondition only costs performance on most targets. It is checked
//! with a debug assertion when the `newton-raphson` feature is enabled, since that configuration
//! targets hardware where it matters. Release builds never check it.

/// Alignment (in bytes) the kernels expect of their buffers.
pub const BUFFER_ALIGNMENT: usize = if cfg!(feature = "align-32") {
    32
} else if cfg!(feature = "align-16") {
    16
} else if cfg!(feature = "align-8") {
    8
} else {
    4
};

/// Whether the kernels assert [`BUFFER_ALIGNMENT`] in debug builds.
pub(crate) const CHECK_ALIGNMENT: bool = cfg!(feature = "newton-raphson");

/// Returns whether `buf` starts at a multiple of [`BUFFER_ALIGNMENT`].
///
/// # Examples
///
/// ```
/// # use rcp_linalg::*;
/// #[repr(align(64))]
/// struct Aligned([f32; 16]);
///
/// let buf = Aligned([0.0; 16]);
/// assert!(is_aligned(&buf.0));
/// ```
#[inline]
pub fn is_aligned<T>(buf: &[T]) -> bool {
    buf.as_ptr() as usize % BUFFER_ALIGNMENT == 0
}

/// Debug-asserts the preconditions every kernel places on its buffers: the dimension is non-zero,
/// each buffer holds at least that many elements, and (if [`CHECK_ALIGNMENT`]) each buffer is
/// aligned.
macro_rules! debug_check_buffers {
    ($len:expr; $($buf:ident),+ $(,)?) => {
        debug_assert!($len != 0, "kernel called with a zero dimension");
        $(
            debug_assert!(
                $buf.len() >= $len,
                "`{}` holds {} elements, but {} are required",
                stringify!($buf),
                $buf.len(),
                $len,
            );
            debug_assert!(
                !$crate::align::CHECK_ALIGNMENT || $crate::align::is_aligned(&$buf[..]),
                "`{}` is not aligned to {} bytes",
                stringify!($buf),
                $crate::align::BUFFER_ALIGNMENT,
            );
        )+
    };
}
pub(crate) use debug_check_buffers;
