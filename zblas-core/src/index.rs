//! Stride/offset index arithmetic for CBLAS-style vector access.
//!
//! All quantities are in complex-element units. Kernels that walk the
//! interleaved scalar buffer double these values themselves.

/// Start index for the no-offset BLAS calling convention.
///
/// A negative stride traverses the vector backwards, so the first access
/// lands on the physically last addressed element: `(1 - n) * stride`.
/// Non-negative strides start at 0.
#[inline]
pub fn stride_start(n: usize, stride: isize) -> usize {
    if stride < 0 && n > 0 {
        ((1 - n as isize) * stride) as usize
    } else {
        0
    }
}

/// Minimum element capacity so that `offset + i*stride` is a valid index
/// for every `i` in `[0, n)`.
///
/// Returns `None` if some computed index would be negative (a misuse no
/// capacity can fix), and `Some(0)` for `n == 0`.
#[inline]
pub fn required_len(n: usize, stride: isize, offset: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    let last = offset as isize + (n as isize - 1) * stride;
    let (lo, hi) = if stride >= 0 {
        (offset as isize, last)
    } else {
        (last, offset as isize)
    };
    if lo < 0 {
        None
    } else {
        Some(hi as usize + 1)
    }
}
