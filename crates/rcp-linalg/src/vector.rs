//! Elementwise vector kernels.
//!
//! All kernels take the dimension `dim` explicitly and operate on the first `dim` elements of
//! each buffer. Output buffers are `&mut` and inputs `&`, so an output can never alias an input.
//!
//! # Panics
//!
//! In debug builds, every kernel panics if `dim` is 0, if any buffer holds fewer than `dim`
//! elements, or (with the `newton-raphson` feature) if any buffer is not aligned to
//! [`BUFFER_ALIGNMENT`][crate::BUFFER_ALIGNMENT]. Release builds only check that the buffers are
//! long enough, once per call.

use crate::{align::debug_check_buffers, Number, X, Y, Z};

/// Computes `result = v1 + v2`.
///
/// # Examples
///
/// ```
/// # use rcp_linalg::*;
/// let mut result = [0.0; 3];
/// vector_add(3, &mut result, &[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]);
/// assert_eq!(result, [11.0, 22.0, 33.0]);
/// ```
#[inline]
pub fn vector_add<T: Number>(dim: usize, result: &mut [T], v1: &[T], v2: &[T]) {
    debug_check_buffers!(dim; result, v1, v2);

    for ((r, &a), &b) in result[..dim].iter_mut().zip(&v1[..dim]).zip(&v2[..dim]) {
        *r = a + b;
    }
}

/// Computes `result += v1`.
#[inline]
pub fn vector_add_inplace<T: Number>(dim: usize, result: &mut [T], v1: &[T]) {
    debug_check_buffers!(dim; result, v1);

    for (r, &a) in result[..dim].iter_mut().zip(&v1[..dim]) {
        *r += a;
    }
}

/// Computes `result = v1 - v2`.
///
/// # Examples
///
/// ```
/// # use rcp_linalg::*;
/// let mut result = [0; 2];
/// vector_subtract(2, &mut result, &[5, 5], &[2, 7]);
/// assert_eq!(result, [3, -2]);
/// ```
#[inline]
pub fn vector_subtract<T: Number>(dim: usize, result: &mut [T], v1: &[T], v2: &[T]) {
    debug_check_buffers!(dim; result, v1, v2);

    for ((r, &a), &b) in result[..dim].iter_mut().zip(&v1[..dim]).zip(&v2[..dim]) {
        *r = a - b;
    }
}

/// Computes `result -= v1`.
#[inline]
pub fn vector_subtract_inplace<T: Number>(dim: usize, result: &mut [T], v1: &[T]) {
    debug_check_buffers!(dim; result, v1);

    for (r, &a) in result[..dim].iter_mut().zip(&v1[..dim]) {
        *r -= a;
    }
}

/// Computes `result = v1 * scale`.
#[inline]
pub fn vector_scale<T: Number>(dim: usize, result: &mut [T], v1: &[T], scale: T) {
    debug_check_buffers!(dim; result, v1);

    for (r, &a) in result[..dim].iter_mut().zip(&v1[..dim]) {
        *r = a * scale;
    }
}

/// Computes `result *= scale`.
///
/// # Examples
///
/// ```
/// # use rcp_linalg::*;
/// let mut v = [1.0, -2.0, 0.5, 8.0];
/// vector_scale_inplace(4, &mut v, 0.5);
/// assert_eq!(v, [0.5, -1.0, 0.25, 4.0]);
/// ```
#[inline]
pub fn vector_scale_inplace<T: Number>(dim: usize, result: &mut [T], scale: T) {
    debug_check_buffers!(dim; result);

    for r in &mut result[..dim] {
        *r *= scale;
    }
}

/// Computes the cross product `result = v1 × v2` of two 3-dimensional vectors.
///
/// All six partial products are computed before `result` is written.
///
/// # Examples
///
/// ```
/// # use rcp_linalg::*;
/// let mut z = [0.0; 3];
/// vector3_cross(&mut z, &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
/// assert_eq!(z, [0.0, 0.0, 1.0]);
/// ```
#[inline]
pub fn vector3_cross<T: Number>(result: &mut [T], v1: &[T], v2: &[T]) {
    debug_check_buffers!(3; result, v1, v2);

    let r0 = v1[Y] * v2[Z];
    let r1 = v1[Z] * v2[Y];
    let r2 = v1[Z] * v2[X];
    let r3 = v1[X] * v2[Z];
    let r4 = v1[X] * v2[Y];
    let r5 = v1[Y] * v2[X];

    result[X] = r0 - r1;
    result[Y] = r2 - r3;
    result[Z] = r4 - r5;
}
