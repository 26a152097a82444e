//! # zblas-core
//!
//! Shared primitives for the zblas crates.
//!
//! This crate provides:
//! - **Interleaved views**: zero-copy reinterpretation between typed complex
//!   slices and the flat interleaved scalar buffers the kernels walk.
//! - **Stride index math**: start-index and capacity arithmetic for
//!   CBLAS-style strided vector access.

pub mod complex;
pub mod index;

pub use complex::{as_interleaved, as_interleaved_mut, from_interleaved, from_interleaved_mut};
pub use complex::{Complex32, Complex64};
pub use index::{required_len, stride_start};
