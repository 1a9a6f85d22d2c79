//! In-place split-radix FFT for power-of-two sizes from [`MIN_SIZE`] to [`MAX_SIZE`].
//!
//! All tables a transform reads (twiddle factors, output permutations, reordering cycles) live
//! in a [`Planner`], built once and then shared read-only. Transforms run on caller buffers in
//! place and leave their output in the network's natural order; use
//! [`Planner::permutation`] to read bins, or [`Planner::reorder`] to move them into frequency
//! order. Neither direction normalizes: scale complex input by `1/N` and real input by `0.5/N`
//! to get `X/N` out of the forward transform and the original signal back out of the inverse.
//!
//! ```
//! use num_complex::Complex64;
//! use splitfft::{fft, Direction, Planner};
//!
//! let planner = Planner::<f64>::new(8).unwrap();
//! let mut buf = vec![Complex64::new(1.0 / 8.0, 0.0); 8];
//! fft(&mut buf, Direction::Forward, &planner).unwrap();
//!
//! let dc = planner.permute_index(8, 0).unwrap();
//! assert!((buf[dc].re - 1.0).abs() < 1e-12);
//! ```
use std::fmt::Debug;

use num_complex::Complex;
use num_traits::{Float, FloatConst};

mod algorithms;
mod error;
mod kernels;
pub mod options;
pub mod permutation;
pub mod planner;
mod reorder;
pub mod spectrum;
mod twiddles;

pub use crate::error::FftError;
pub use crate::options::{Options, PassLayout};
pub use crate::planner::{Direction, Planner};
pub use crate::reorder::CycleTable;
pub use crate::twiddles::Twiddles;

/// Smallest supported transform size
pub const MIN_SIZE: usize = 2;

/// Largest supported transform size
pub const MAX_SIZE: usize = 32768;

/// Sample precision the transforms are generic over, i.e. `f32` and `f64`
pub trait Scalar: Float + FloatConst + bytemuck::Pod + Debug + Send + Sync + 'static {}

impl<T> Scalar for T where T: Float + FloatConst + bytemuck::Pod + Debug + Send + Sync + 'static {}

/// FFT of a complex buffer in place, with default [`Options`].
///
/// The transform size is `buf.len()`. Forward uses the `exp(+2πi nk/N)` kernel internally, so
/// bin `k` of the usual `exp(-2πi nk/N)` DFT ends up at `buf[planner.permutation(N)[k]]`.
///
/// # Errors
///
/// Returns [`FftError::UnsupportedSize`] if `buf.len()` is not a power of two between
/// [`MIN_SIZE`] and [`MAX_SIZE`], and [`FftError::TablesNotBuilt`] if `planner` does not cover
/// it. `buf` is left untouched in both cases.
pub fn fft<T: Scalar>(
    buf: &mut [Complex<T>],
    direction: Direction,
    planner: &Planner<T>,
) -> Result<(), FftError> {
    let opts = Options::guess_options(buf.len());
    fft_with_opts_and_plan(buf, direction, &opts, planner)
}

/// FFT of a complex buffer in place, with explicit [`Options`].
///
/// # Errors
///
/// See [`fft`].
pub fn fft_with_opts_and_plan<T: Scalar>(
    buf: &mut [Complex<T>],
    direction: Direction,
    opts: &Options,
    planner: &Planner<T>,
) -> Result<(), FftError> {
    planner.check_built(buf.len())?;

    match direction {
        Direction::Forward => algorithms::complex::forward(buf, planner, opts.pass_layout),
        Direction::Reverse => algorithms::complex::inverse(buf, planner, opts.pass_layout),
    }
    Ok(())
}

/// FFT of a real buffer in place, with default [`Options`].
///
/// The forward transform packs the half spectrum into `buf`: `buf[0]` holds the DC bin and
/// `buf[1]` the Nyquist bin (both real), and for `1 <= k < N/2` bin `k` is the complex pair at
/// `buf[2 * p]`, `buf[2 * p + 1]` with `p = planner.permutation(N / 2)[k]`.
/// [`Planner::reorder_real`] puts the pairs in frequency order. The inverse takes that packed
/// (natural order) layout back to samples.
///
/// # Errors
///
/// See [`fft`].
pub fn fft_real<T: Scalar>(
    buf: &mut [T],
    direction: Direction,
    planner: &Planner<T>,
) -> Result<(), FftError> {
    let opts = Options::guess_options(buf.len());
    fft_real_with_opts_and_plan(buf, direction, &opts, planner)
}

/// FFT of a real buffer in place, with explicit [`Options`].
///
/// # Errors
///
/// See [`fft`].
pub fn fft_real_with_opts_and_plan<T: Scalar>(
    buf: &mut [T],
    direction: Direction,
    opts: &Options,
    planner: &Planner<T>,
) -> Result<(), FftError> {
    planner.check_built(buf.len())?;

    match direction {
        Direction::Forward => algorithms::real::forward(buf, planner, opts.pass_layout),
        Direction::Reverse => algorithms::real::inverse(buf, planner, opts.pass_layout),
    }
    Ok(())
}
