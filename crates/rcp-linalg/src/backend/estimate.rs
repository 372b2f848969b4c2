//! Coarse reciprocal and reciprocal square root estimates.
//!
//! These are the seeds [`NewtonRaphson`][crate::NewtonRaphson] refines. Where the target has
//! estimate instructions they are used directly:
//!
//! | Architecture   | `f32`               | `f64`               | Precision |
//! |----------------|---------------------|---------------------|-----------|
//! | x86/x86-64 SSE | `rcpss` / `rsqrtss` | software            | ~12 bits  |
//! | AArch64 NEON   | `frecpe` / `frsqrte`| `frecpe` / `frsqrte`| ~8 bits   |
//! | Other          | software            | software            | ~6 bits   |
//!
//! The software estimate reinterprets the float's bits to negate (or halve and negate) the
//! exponent, then applies one Newton-Raphson step to the result.

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
))]
mod imp {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::{_mm_cvtss_f32, _mm_rcp_ss, _mm_rsqrt_ss, _mm_set_ss};
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::{_mm_cvtss_f32, _mm_rcp_ss, _mm_rsqrt_ss, _mm_set_ss};

    pub use super::soft::{recip_f64, rsqrt_f64};

    #[inline]
    #[allow(unused_unsafe)]
    pub fn recip_f32(x: f32) -> f32 {
        // Safety: `sse` is statically enabled for this target.
        unsafe { _mm_cvtss_f32(_mm_rcp_ss(_mm_set_ss(x))) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    pub fn rsqrt_f32(x: f32) -> f32 {
        // Safety: `sse` is statically enabled for this target.
        unsafe { _mm_cvtss_f32(_mm_rsqrt_ss(_mm_set_ss(x))) }
    }
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod imp {
    use std::arch::aarch64::{vrecped_f64, vrecpes_f32, vrsqrted_f64, vrsqrtes_f32};

    #[inline]
    #[allow(unused_unsafe)]
    pub fn recip_f32(x: f32) -> f32 {
        // Safety: `neon` is statically enabled for this target.
        unsafe { vrecpes_f32(x) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    pub fn rsqrt_f32(x: f32) -> f32 {
        // Safety: `neon` is statically enabled for this target.
        unsafe { vrsqrtes_f32(x) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    pub fn recip_f64(x: f64) -> f64 {
        // Safety: `neon` is statically enabled for this target.
        unsafe { vrecped_f64(x) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    pub fn rsqrt_f64(x: f64) -> f64 {
        // Safety: `neon` is statically enabled for this target.
        unsafe { vrsqrted_f64(x) }
    }
}

#[cfg(not(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse"
    ),
    all(target_arch = "aarch64", target_feature = "neon"),
)))]
mod imp {
    pub use super::soft::{recip_f32, recip_f64, rsqrt_f32, rsqrt_f64};
}

pub(crate) use imp::{recip_f32, recip_f64, rsqrt_f32, rsqrt_f64};

/// Estimates computed from the bit representation, for targets without estimate instructions.
#[cfg_attr(
    any(
        all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "sse"
        ),
        all(target_arch = "aarch64", target_feature = "neon"),
    ),
    allow(dead_code)
)]
mod soft {
    const RECIP_MAGIC_F32: u32 = 0x7EF3_11C3;
    const RSQRT_MAGIC_F32: u32 = 0x5F37_59DF;
    const RECIP_MAGIC_F64: u64 = 0x7FDE_6238_22FC_16E6;
    const RSQRT_MAGIC_F64: u64 = 0x5FE6_EB50_C7B5_37A9;

    #[inline]
    pub fn recip_f32(x: f32) -> f32 {
        let a = x.abs();
        let y = f32::from_bits(RECIP_MAGIC_F32.wrapping_sub(a.to_bits()));
        (y * (2.0 - a * y)).copysign(x)
    }

    #[inline]
    pub fn rsqrt_f32(x: f32) -> f32 {
        let y = f32::from_bits(RSQRT_MAGIC_F32.wrapping_sub(x.to_bits() >> 1));
        y * (1.5 - 0.5 * (x * y * y))
    }

    #[inline]
    pub fn recip_f64(x: f64) -> f64 {
        let a = x.abs();
        let y = f64::from_bits(RECIP_MAGIC_F64.wrapping_sub(a.to_bits()));
        (y * (2.0 - a * y)).copysign(x)
    }

    #[inline]
    pub fn rsqrt_f64(x: f64) -> f64 {
        let y = f64::from_bits(RSQRT_MAGIC_F64.wrapping_sub(x.to_bits() >> 1));
        y * (1.5 - 0.5 * (x * y * y))
    }
}
