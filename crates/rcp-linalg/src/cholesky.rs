//! Scaled Cholesky decomposition.
//!
//! Factors a symmetric positive-definite matrix `A` (scaled by `mul`) into a lower-triangular `L`
//! with `L·Lᵗ = A * mul`, using the Cholesky–Banachiewicz recursion:
//!
//! ```text
//! L[i][i] = sqrt(A[i][i]*mul - Σ_{k<i} L[i][k]²)
//! L[i][j] = (A[i][j]*mul - Σ_{k<j} L[i][k]*L[j][k]) * reciprocal(L[j][j])    for j < i
//! ```
//!
//! The square root and reciprocal come from a [`NumericBackend`], so the decomposition performs no
//! division or native square root when [`NewtonRaphson`][crate::NewtonRaphson] is used. The
//! matrix is processed in index order without pivoting, and its definiteness is not checked: a
//! non-positive pivot is clamped to 0 by the backend's `sqrt`, and the entries below a zero pivot
//! are written as 0. The result is a degenerate factor, never one containing NaNs or infinities.
//!
//! Matrices are `dim × dim` and row-major. Only the lower triangle (including the diagonal) of `A`
//! is read. Every element of `L` is written, with zeroes above the diagonal.

use crate::{align::debug_check_buffers, DefaultBackend, NumericBackend, Real};

/// Computes the Cholesky factor `L` of `A * mul` using the [`DefaultBackend`].
///
/// # Panics
///
/// In debug builds, this panics if `dim` is 0, if `l` or `a` holds fewer than `dim * dim` elements,
/// or (with the `newton-raphson` feature) if either is not aligned to
/// [`BUFFER_ALIGNMENT`][crate::BUFFER_ALIGNMENT].
///
/// # Examples
///
/// ```
/// # use rcp_linalg::*;
/// let a = [
///     4.0, 2.0,
///     2.0, 3.0,
/// ];
/// let mut l = [0.0; 4];
/// matrix_cholesky_decompose_scale(2, &mut l, &a, 1.0);
/// let expected = [
///     2.0, 0.0,
///     1.0, 2.0f64.sqrt(),
/// ];
/// for (l, e) in l.iter().zip(expected) {
///     assert!((l - e).abs() < 1e-12);
/// }
/// ```
#[inline]
pub fn matrix_cholesky_decompose_scale<T: Real>(dim: usize, l: &mut [T], a: &[T], mul: T) {
    matrix_cholesky_decompose_scale_with::<DefaultBackend, T>(dim, l, a, mul);
}

/// Computes the Cholesky factor `L` of `A * mul` using the [`NumericBackend`] `B`.
///
/// See [`matrix_cholesky_decompose_scale`] for details.
pub fn matrix_cholesky_decompose_scale_with<B: NumericBackend, T: Real>(
    dim: usize,
    l: &mut [T],
    a: &[T],
    mul: T,
) {
    debug_check_buffers!(dim * dim; l, a);

    factor::<B, T, _>(dim, l, mul, |_, index| a[index]);
}

/// Replaces `a` with the Cholesky factor of `A * mul`, using the [`DefaultBackend`].
///
/// The result is identical to that of [`matrix_cholesky_decompose_scale`].
///
/// # Panics
///
/// In debug builds, this panics if `dim` is 0, if `a` holds fewer than `dim * dim` elements, or
/// (with the `newton-raphson` feature) if it is not aligned to
/// [`BUFFER_ALIGNMENT`][crate::BUFFER_ALIGNMENT].
#[inline]
pub fn matrix_cholesky_decompose_scale_inplace<T: Real>(dim: usize, a: &mut [T], mul: T) {
    matrix_cholesky_decompose_scale_inplace_with::<DefaultBackend, T>(dim, a, mul);
}

/// Replaces `a` with the Cholesky factor of `A * mul`, using the [`NumericBackend`] `B`.
pub fn matrix_cholesky_decompose_scale_inplace_with<B: NumericBackend, T: Real>(
    dim: usize,
    a: &mut [T],
    mul: T,
) {
    debug_check_buffers!(dim * dim; a);

    // Element (i, j) of `A` is read right before (i, j) of `L` is written, and the recursion only
    // reads `L` elements that precede it in row-major order, so the input is never clobbered early.
    factor::<B, T, _>(dim, a, mul, |l, index| l[index]);
}

/// Writes the factor to `l`, reading element `index` of `A` via `input(l, index)`.
#[inline]
fn factor<B, T, F>(dim: usize, l: &mut [T], mul: T, input: F)
where
    B: NumericBackend,
    T: Real,
    F: Fn(&[T], usize) -> T,
{
    let l = &mut l[..dim * dim];
    for i in 0..dim {
        let row_i = i * dim;
        for j in 0..=i {
            let row_j = j * dim;

            let mut s = T::ZERO;
            for k in 0..j {
                s += l[row_i + k] * l[row_j + k];
            }

            let bracket = input(&*l, row_i + j) * mul - s;
            l[row_i + j] = if i == j {
                if cfg!(debug_assertions) && bracket <= T::ZERO {
                    log::debug!("non-positive pivot in row {i}, factor will be degenerate");
                }
                B::sqrt(bracket)
            } else {
                // A clamped pivot zeroes the rest of its column.
                let pivot = l[row_j + j];
                if pivot == T::ZERO {
                    T::ZERO
                } else {
                    B::reciprocal(pivot) * bracket
                }
            };
        }

        for elem in &mut l[row_i + i + 1..row_i + dim] {
            *elem = T::ZERO;
        }
    }
}
