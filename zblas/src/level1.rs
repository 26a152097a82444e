//! BLAS Level 1: complex vector interchange.
//!
//! Two calling conventions are provided for each precision:
//!
//! - `cswap`/`zswap`: classic BLAS signature. Strides may be negative, in
//!   which case traversal starts from the physically last addressed element
//!   (`(1 - n) * stride`), matching the reference Fortran/C convention.
//! - `cswap_offset`/`zswap_offset`: ndarray-style signature with an explicit
//!   starting offset per vector. Strides are applied as-is from the offset,
//!   with no direction-dependent start adjustment.
//!
//! The safe routines rely on slice bounds checks and panic on out-of-range
//! access; debug builds additionally assert the full access pattern fits
//! up front. The `*_offset_unchecked` variants skip all checks.
//!
//! Contiguous access (stride 1 on both vectors) takes a `swap_with_slice`
//! fast path on the typed complex slices.

use num_traits::Float;
use zblas_core::complex::{as_interleaved_mut, Complex32, Complex64};
use zblas_core::index;

// ============================================================================
// Strided kernels over the interleaved scalar view
// ============================================================================

/// Sequential whole-complex exchange: for each logical element, both scalar
/// halves are held in temporaries, so X receives Y's prior value and vice
/// versa even when the access patterns touch repeated indices (stride 0).
fn swap_kernel<T: Float>(
    n: usize,
    x: &mut [T],
    stride_x: isize,
    offset_x: usize,
    y: &mut [T],
    stride_y: isize,
    offset_y: usize,
) {
    let sx = stride_x * 2;
    let sy = stride_y * 2;
    let mut ix = (offset_x * 2) as isize;
    let mut iy = (offset_y * 2) as isize;
    for _ in 0..n {
        let jx = ix as usize;
        let jy = iy as usize;

        let tmp = x[jx];
        x[jx] = y[jy];
        y[jy] = tmp;

        let tmp = x[jx + 1];
        x[jx + 1] = y[jy + 1];
        y[jy + 1] = tmp;

        ix += sx;
        iy += sy;
    }
}

/// Unchecked sibling of [`swap_kernel`].
///
/// # Safety
///
/// Every computed scalar index must be in range for its slice, i.e.
/// `2*(offset + i*stride) + 1 < len` for all `i` in `[0, n)` on both
/// vectors, and no index may be negative.
unsafe fn swap_kernel_unchecked<T: Float>(
    n: usize,
    x: &mut [T],
    stride_x: isize,
    offset_x: usize,
    y: &mut [T],
    stride_y: isize,
    offset_y: usize,
) {
    let sx = stride_x * 2;
    let sy = stride_y * 2;
    let mut ix = (offset_x * 2) as isize;
    let mut iy = (offset_y * 2) as isize;
    for _ in 0..n {
        let jx = ix as usize;
        let jy = iy as usize;

        let tmp = *x.get_unchecked(jx);
        *x.get_unchecked_mut(jx) = *y.get_unchecked(jy);
        *y.get_unchecked_mut(jy) = tmp;

        let tmp = *x.get_unchecked(jx + 1);
        *x.get_unchecked_mut(jx + 1) = *y.get_unchecked(jy + 1);
        *y.get_unchecked_mut(jy + 1) = tmp;

        ix += sx;
        iy += sy;
    }
}

#[inline]
fn fits<T>(n: usize, stride: isize, offset: usize, v: &[T]) -> bool {
    index::required_len(n, stride, offset).is_some_and(|m| m <= v.len())
}

// ============================================================================
// SWAP: x <-> y, BLAS calling convention
// ============================================================================

/// Single-precision complex swap: x <-> y
///
/// Negative strides traverse backwards starting from the last addressed
/// element. `n == 0` is a no-op.
#[inline]
pub fn cswap(n: usize, x: &mut [Complex32], incx: isize, y: &mut [Complex32], incy: isize) {
    if n == 0 {
        return;
    }
    if incx == 1 && incy == 1 {
        x[..n].swap_with_slice(&mut y[..n]);
        return;
    }
    let ox = index::stride_start(n, incx);
    let oy = index::stride_start(n, incy);
    debug_assert!(
        fits(n, incx, ox, x),
        "x overrun: n={n}, incx={incx}, len={}",
        x.len()
    );
    debug_assert!(
        fits(n, incy, oy, y),
        "y overrun: n={n}, incy={incy}, len={}",
        y.len()
    );
    swap_kernel(n, as_interleaved_mut(x), incx, ox, as_interleaved_mut(y), incy, oy);
}

/// Double-precision complex swap: x <-> y
///
/// Negative strides traverse backwards starting from the last addressed
/// element. `n == 0` is a no-op.
#[inline]
pub fn zswap(n: usize, x: &mut [Complex64], incx: isize, y: &mut [Complex64], incy: isize) {
    if n == 0 {
        return;
    }
    if incx == 1 && incy == 1 {
        x[..n].swap_with_slice(&mut y[..n]);
        return;
    }
    let ox = index::stride_start(n, incx);
    let oy = index::stride_start(n, incy);
    debug_assert!(
        fits(n, incx, ox, x),
        "x overrun: n={n}, incx={incx}, len={}",
        x.len()
    );
    debug_assert!(
        fits(n, incy, oy, y),
        "y overrun: n={n}, incy={incy}, len={}",
        y.len()
    );
    swap_kernel(n, as_interleaved_mut(x), incx, ox, as_interleaved_mut(y), incy, oy);
}

// ============================================================================
// SWAP: x <-> y, explicit starting offsets
// ============================================================================

/// Single-precision complex swap with explicit starting offsets.
///
/// Element `i` of x is at index `offset_x + i*stride_x` (complex-element
/// units), and likewise for y. Strides are applied as-is; the caller
/// guarantees every computed index is in range. `n == 0` is a no-op.
#[inline]
pub fn cswap_offset(
    n: usize,
    x: &mut [Complex32],
    stride_x: isize,
    offset_x: usize,
    y: &mut [Complex32],
    stride_y: isize,
    offset_y: usize,
) {
    if n == 0 {
        return;
    }
    if stride_x == 1 && stride_y == 1 {
        x[offset_x..offset_x + n].swap_with_slice(&mut y[offset_y..offset_y + n]);
        return;
    }
    debug_assert!(
        fits(n, stride_x, offset_x, x),
        "x overrun: n={n}, stride={stride_x}, offset={offset_x}, len={}",
        x.len()
    );
    debug_assert!(
        fits(n, stride_y, offset_y, y),
        "y overrun: n={n}, stride={stride_y}, offset={offset_y}, len={}",
        y.len()
    );
    swap_kernel(
        n,
        as_interleaved_mut(x),
        stride_x,
        offset_x,
        as_interleaved_mut(y),
        stride_y,
        offset_y,
    );
}

/// Double-precision complex swap with explicit starting offsets.
///
/// Element `i` of x is at index `offset_x + i*stride_x` (complex-element
/// units), and likewise for y. Strides are applied as-is; the caller
/// guarantees every computed index is in range. `n == 0` is a no-op.
#[inline]
pub fn zswap_offset(
    n: usize,
    x: &mut [Complex64],
    stride_x: isize,
    offset_x: usize,
    y: &mut [Complex64],
    stride_y: isize,
    offset_y: usize,
) {
    if n == 0 {
        return;
    }
    if stride_x == 1 && stride_y == 1 {
        x[offset_x..offset_x + n].swap_with_slice(&mut y[offset_y..offset_y + n]);
        return;
    }
    debug_assert!(
        fits(n, stride_x, offset_x, x),
        "x overrun: n={n}, stride={stride_x}, offset={offset_x}, len={}",
        x.len()
    );
    debug_assert!(
        fits(n, stride_y, offset_y, y),
        "y overrun: n={n}, stride={stride_y}, offset={offset_y}, len={}",
        y.len()
    );
    swap_kernel(
        n,
        as_interleaved_mut(x),
        stride_x,
        offset_x,
        as_interleaved_mut(y),
        stride_y,
        offset_y,
    );
}

// ============================================================================
// SWAP: unchecked variants
// ============================================================================

/// Single-precision complex swap with explicit offsets, no bounds checks.
///
/// # Safety
///
/// `offset + i*stride` must be a valid, non-negative index into the
/// respective vector for every `i` in `[0, n)`, and the two slices must
/// not overlap on any addressed index.
#[inline]
pub unsafe fn cswap_offset_unchecked(
    n: usize,
    x: &mut [Complex32],
    stride_x: isize,
    offset_x: usize,
    y: &mut [Complex32],
    stride_y: isize,
    offset_y: usize,
) {
    swap_kernel_unchecked(
        n,
        as_interleaved_mut(x),
        stride_x,
        offset_x,
        as_interleaved_mut(y),
        stride_y,
        offset_y,
    );
}

/// Double-precision complex swap with explicit offsets, no bounds checks.
///
/// # Safety
///
/// `offset + i*stride` must be a valid, non-negative index into the
/// respective vector for every `i` in `[0, n)`, and the two slices must
/// not overlap on any addressed index.
#[inline]
pub unsafe fn zswap_offset_unchecked(
    n: usize,
    x: &mut [Complex64],
    stride_x: isize,
    offset_x: usize,
    y: &mut [Complex64],
    stride_y: isize,
    offset_y: usize,
) {
    swap_kernel_unchecked(
        n,
        as_interleaved_mut(x),
        stride_x,
        offset_x,
        as_interleaved_mut(y),
        stride_y,
        offset_y,
    );
}
