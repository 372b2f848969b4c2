//! Linear algebra kernels for targets without fast division or square root.
//!
//! # Motivation
//!
//! State estimators and sensor fusion filters running on DSPs and small microcontrollers spend
//! most of their time in a handful of dense kernels: vector arithmetic, matrix products, and a
//! Cholesky decomposition of a covariance matrix. On many of those targets, floating-point division
//! and square root are either missing from the hardware or take tens of cycles, while a coarse
//! reciprocal (square root) estimate instruction is available and fast.
//!
//! This library provides those kernels with every division and square root routed through a
//! [`NumericBackend`]. The [`NewtonRaphson`] backend refines hardware estimates to full precision
//! in three iterations; the [`Native`] backend uses ordinary division and square root. The backend
//! is picked at build time (see [`DefaultBackend`]).
//!
//! # Goals & Non-Goals
//!
//! - Operate on flat, caller-owned buffers. Nothing allocates, nothing retains a reference past
//!   the call, nothing holds global state. Vectors and matrices are plain slices, and dimensions
//!   are passed explicitly at every call instead of being stored or inferred from slice lengths.
//! - Keep the hot paths free of runtime checks. Preconditions (non-zero dimensions, buffer sizes,
//!   alignment) are debug assertions. Aliasing between outputs and inputs is ruled out by the
//!   borrow checker instead.
//! - Define the result of every numeric edge case instead of producing NaNs: see the
//!   [`backend`] module for the conventions.
//! - Don't attempt to be a general linear algebra library. There is no sparse storage, no pivoting
//!   and no error reporting: ill-conditioned input produces a degenerate result, not an error.
//!
//! # Buffer Layout
//!
//! Matrices are stored row-major. Every kernel expects its buffers to be aligned to
//! [`BUFFER_ALIGNMENT`], which can be raised with the `align-*` cargo features.
//!
//! # Cargo Features
//!
//! - `newton-raphson`: makes [`NewtonRaphson`] the [`DefaultBackend`], and enables the
//!   alignment assertions in debug builds.
//! - `align-8`, `align-16`, `align-32`: set [`BUFFER_ALIGNMENT`].

mod align;
pub mod backend;
mod cholesky;
mod matrix;
mod traits;
mod vector;

pub use align::*;
pub use backend::{
    divide, inverse_sqrt, reciprocal, sqrt, DefaultBackend, Native, NewtonRaphson, NumericBackend,
};
pub use cholesky::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;

/// Index of the X component of a vector.
pub const X: usize = 0;
/// Index of the Y component of a vector.
pub const Y: usize = 1;
/// Index of the Z component of a vector.
pub const Z: usize = 2;
/// Index of the W component of a vector.
pub const W: usize = 3;
