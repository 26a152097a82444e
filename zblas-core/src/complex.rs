//! Complex scalar types and interleaved-view reinterpretation.
//!
//! A slice of `N` complex values is physically `2N` scalars in alternating
//! real/imaginary order. `num_complex::Complex<T>` is `#[repr(C)]` with
//! fields `re, im`, so both views describe the same memory and the
//! conversions here are zero-copy.

use std::slice;

pub use num_complex::Complex;

/// Single-precision complex scalar (interleaved `f32` pair).
pub type Complex32 = Complex<f32>;
/// Double-precision complex scalar (interleaved `f64` pair).
pub type Complex64 = Complex<f64>;

/// View a complex slice as its flat interleaved scalar buffer.
///
/// The result has twice the length: element `i` of the input occupies
/// scalars `2*i` (real) and `2*i + 1` (imaginary).
#[inline]
pub fn as_interleaved<T>(v: &[Complex<T>]) -> &[T] {
    // Complex<T> is repr(C) { re: T, im: T } — size 2*T, align of T.
    unsafe { slice::from_raw_parts(v.as_ptr() as *const T, v.len() * 2) }
}

/// Mutable variant of [`as_interleaved`].
#[inline]
pub fn as_interleaved_mut<T>(v: &mut [Complex<T>]) -> &mut [T] {
    unsafe { slice::from_raw_parts_mut(v.as_mut_ptr() as *mut T, v.len() * 2) }
}

/// View a flat interleaved scalar buffer as a complex slice.
///
/// # Panics
///
/// Panics if the scalar length is odd — half a complex number is never
/// meaningful.
#[inline]
pub fn from_interleaved<T>(v: &[T]) -> &[Complex<T>] {
    assert!(v.len() % 2 == 0, "interleaved buffer has odd length {}", v.len());
    unsafe { slice::from_raw_parts(v.as_ptr() as *const Complex<T>, v.len() / 2) }
}

/// Mutable variant of [`from_interleaved`].
///
/// # Panics
///
/// Panics if the scalar length is odd.
#[inline]
pub fn from_interleaved_mut<T>(v: &mut [T]) -> &mut [Complex<T>] {
    assert!(v.len() % 2 == 0, "interleaved buffer has odd length {}", v.len());
    unsafe { slice::from_raw_parts_mut(v.as_mut_ptr() as *mut Complex<T>, v.len() / 2) }
}
