// BLAS functions match CBLAS signatures — many parameters are inherent to the API.
#![allow(clippy::too_many_arguments)]

//! # zblas
//!
//! Pure Rust complex vector interchange — the BLAS Level 1 `cswap`/`zswap`
//! routines over interleaved real/imaginary buffers.
//!
//! No FFI, no C dependencies. Vectors are slices of `Complex32`/`Complex64`;
//! the kernels walk the flat interleaved scalar view with explicit 2x
//! indexing, so there is no per-element boxing in the hot loop.
//!
//! ## Routines
//!
//! - [`level1::cswap`], [`level1::zswap`] — BLAS calling convention: a
//!   negative stride starts from the physically last addressed element.
//! - [`level1::cswap_offset`], [`level1::zswap_offset`] — explicit starting
//!   offsets per vector, strides applied as-is.
//! - `*_offset_unchecked` — `unsafe` siblings without bounds checks for
//!   performance-critical call sites.
//!
//! ## Example
//!
//! ```
//! use zblas::{level1, Complex64};
//!
//! let mut x: Vec<Complex64> = vec![
//!     Complex64::new(1.0, 2.0),
//!     Complex64::new(3.0, 4.0),
//!     Complex64::new(5.0, 6.0),
//! ];
//! let mut y = vec![Complex64::new(0.0, 0.0); 3];
//!
//! level1::zswap(3, &mut x, 1, &mut y, 1);
//! assert_eq!(y[0], Complex64::new(1.0, 2.0));
//! assert_eq!(x[0], Complex64::new(0.0, 0.0));
//! ```

pub mod level1;

// Re-export storage primitives for convenience
pub use zblas_core::complex::{
    as_interleaved, as_interleaved_mut, from_interleaved, from_interleaved_mut, Complex32,
    Complex64,
};
pub use zblas_core::index::{required_len, stride_start};
