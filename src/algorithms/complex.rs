//! Split-radix complex FFT
//!
//! A size-`N` block is split into its first half and its two last quarters. The forward
//! transform runs one pass over the whole block and then recurses into the two quarters (size
//! `N/4`, the odd frequencies) and the first half (size `N/2`, the even frequencies). The
//! inverse runs the same steps backwards. Sizes 2, 4 and 8 are fully unrolled.
//!
//! Output is left in natural order, and neither direction normalizes.
use num_complex::Complex;

use crate::kernels::butterflies::{
    fft_chunk_2, fft_chunk_4, fft_chunk_8, ifft_chunk_4, ifft_chunk_8,
};
use crate::kernels::pass::{forward_pass, inverse_pass};
use crate::options::PassLayout;
use crate::planner::Planner;
use crate::Scalar;

/// Split a size-`N` block into `(first half, third quarter, fourth quarter)`
#[allow(clippy::type_complexity)]
fn split_block<T>(
    buf: &mut [Complex<T>],
) -> (&mut [Complex<T>], &mut [Complex<T>], &mut [Complex<T>]) {
    let n = buf.len();
    let (half, rest) = buf.split_at_mut(n / 2);
    let (q2, q3) = rest.split_at_mut(n / 4);
    (half, q2, q3)
}

/// Forward transform of `buf` in place.
///
/// `buf.len()` must be a supported size the planner has built.
pub(crate) fn forward<T: Scalar>(
    buf: &mut [Complex<T>],
    planner: &Planner<T>,
    layout: PassLayout,
) {
    let n = buf.len();
    match n {
        2 => fft_chunk_2(buf),
        4 => fft_chunk_4(buf),
        8 => fft_chunk_8(buf),
        _ => {
            forward_pass(buf, planner.twiddles_unchecked(n), layout.mirrors(n));
            let (half, q2, q3) = split_block(buf);
            forward(q2, planner, layout);
            forward(q3, planner, layout);
            forward(half, planner, layout);
        }
    }
}

/// Inverse of [`forward`], without the `1/N` scaling.
pub(crate) fn inverse<T: Scalar>(
    buf: &mut [Complex<T>],
    planner: &Planner<T>,
    layout: PassLayout,
) {
    let n = buf.len();
    match n {
        2 => fft_chunk_2(buf),
        4 => ifft_chunk_4(buf),
        8 => ifft_chunk_8(buf),
        _ => {
            {
                let (half, q2, q3) = split_block(buf);
                inverse(half, planner, layout);
                inverse(q2, planner, layout);
                inverse(q3, planner, layout);
            }
            inverse_pass(buf, planner.twiddles_unchecked(n), layout.mirrors(n));
        }
    }
}
