use crate::{align::debug_check_buffers, Number};

/// Computes the scaled matrix product `C = (A·B) * mul`.
///
/// All matrices are row-major. The dimension parameters follow a transposed naming convention:
///
/// - `a` holds `ac` rows of `ar` elements each, so `A[i][k]` is `a[i * ar + k]`.
/// - `b` holds `ar` rows of `br` elements each, so `B[k][j]` is `b[k * br + j]`.
/// - `bc` must equal `ar`; it exists only so that callers state the inner dimension twice.
/// - `c` receives `ac` rows of `br` elements each.
///
/// Every element of `C` is accumulated in a single linear sum over `k` before being multiplied by
/// `mul` once, so the rounding behavior is reproducible.
///
/// # Panics
///
/// In debug builds, this panics if `ar != bc`, if any dimension is 0, if a buffer is too short for
/// the dimensions, or (with the `newton-raphson` feature) if a buffer is not aligned to
/// [`BUFFER_ALIGNMENT`][crate::BUFFER_ALIGNMENT].
///
/// # Examples
///
/// Outer product of two vectors:
///
/// ```
/// # use rcp_linalg::*;
/// let a = [1.0, 2.0];
/// let b = [3.0, 4.0, 5.0];
/// let mut c = [0.0; 6];
/// matrix_multiply(&mut c, &b, &a, 1, 2, 3, 1, 2.0);
/// assert_eq!(c, [
///     6.0,  8.0, 10.0,
///    12.0, 16.0, 20.0,
/// ]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn matrix_multiply<T: Number>(
    c: &mut [T],
    b: &[T],
    a: &[T],
    ar: usize,
    ac: usize,
    br: usize,
    bc: usize,
    mul: T,
) {
    debug_assert_eq!(ar, bc, "inner dimensions of the matrix product don't match");
    debug_check_buffers!(ac * ar; a);
    debug_check_buffers!(ar * br; b);
    debug_check_buffers!(ac * br; c);

    let a = &a[..ac * ar];
    let b = &b[..ar * br];
    for (a_row, c_row) in a.chunks_exact(ar).zip(c[..ac * br].chunks_exact_mut(br)) {
        for (j, c_elem) in c_row.iter_mut().enumerate() {
            let mut t = T::ZERO;
            for (k, &a_elem) in a_row.iter().enumerate() {
                t += a_elem * b[k * br + j];
            }
            *c_elem = t * mul;
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[rustfmt::skip]
    const VANDERMONDE: [f32; 16] = [
        1.0,  1.0,  1.0,   1.0,
        2.0,  4.0,  8.0,  16.0,
        3.0,  9.0, 27.0,  81.0,
        4.0, 16.0, 64.0, 256.0,
    ];

    #[rustfmt::skip]
    const VANDERMONDE_INV: [f32; 16] = [
        4.0,         -3.0,        4.0 / 3.0,  -1.0 / 4.0,
        -13.0 / 3.0, 19.0 / 4.0,  -7.0 / 3.0, 11.0 / 24.0,
        3.0 / 2.0,   -2.0,        7.0 / 6.0,  -1.0 / 4.0,
        -1.0 / 6.0,  1.0 / 4.0,   -1.0 / 6.0, 1.0 / 24.0,
    ];

    fn assert_slice_eq(actual: &[f32], expected: &[f32], epsilon: f32) {
        assert_eq!(actual.len(), expected.len());
        for (&a, &e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(a, e, epsilon = epsilon);
        }
    }

    #[test]
    fn inverse_product_is_identity() {
        let mut c = [0.0; 16];
        matrix_multiply(&mut c, &VANDERMONDE, &VANDERMONDE_INV, 4, 4, 4, 4, 1.0);

        #[rustfmt::skip]
        let identity = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        assert_slice_eq(&c, &identity, 1e-5);
    }

    #[test]
    fn outer_product() {
        let d = [1.0, 2.0, 3.0, 4.0];
        let e = [5.0, 6.0, 7.0, 8.0];
        let mut c = [0.0; 16];
        matrix_multiply(&mut c, &d, &e, 1, 4, 4, 1, 1.0);

        #[rustfmt::skip]
        let expected = [
            5.0, 10.0, 15.0, 20.0,
            6.0, 12.0, 18.0, 24.0,
            7.0, 14.0, 21.0, 28.0,
            8.0, 16.0, 24.0, 32.0,
        ];
        assert_slice_eq(&c, &expected, 1e-5);
    }

    #[test]
    fn rectangular() {
        // A is 2x3, B is 3x2.
        let a = [1, 2, 3, 4, 5, 6];
        let b = [7, 8, 9, 10, 11, 12];
        let mut c = [0; 4];
        matrix_multiply(&mut c, &b, &a, 3, 2, 2, 3, 1);
        assert_eq!(c, [58, 64, 139, 154]);

        // B is 3x1, result is a 2-element column.
        let mut c = [0; 2];
        matrix_multiply(&mut c, &[1, 0, -1], &a, 3, 2, 1, 3, 10);
        assert_eq!(c, [-20, -20]);
    }

    #[test]
    fn scale_applied_once() {
        let a = [0.1f32, 0.2, 0.3];
        let b = [3.0f32, 2.0, 1.0];
        let mut c = [0.0f32; 1];
        matrix_multiply(&mut c, &b, &a, 3, 1, 1, 3, 3.0);

        let mut t = 0.0f32;
        for (x, y) in a.iter().zip(&b) {
            t += x * y;
        }
        assert_eq!(c[0], t * 3.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "inner dimensions")]
    fn mismatched_inner_dimension() {
        let mut c = [0.0f32; 4];
        matrix_multiply(&mut c, &[0.0; 4], &[0.0; 4], 2, 2, 2, 1, 1.0);
    }
}
