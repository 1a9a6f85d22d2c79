//! Real-input FFT
//!
//! `N` real samples are viewed as `N/2` complex samples (even samples in the real parts, odd
//! samples in the imaginary parts) and transformed with the complex FFT of half the size. A
//! correction step then untangles the two interleaved half-size spectra into the first half of
//! the size-`N` real spectrum. Conjugate symmetry covers the other half.
//!
//! The packed result keeps `X[0]` in the real part and `X[N/2]` in the imaginary part of complex
//! element 0. For `1 <= k < N/2`, bin `k` is in complex element `perm[k]`, where `perm` is the
//! permutation of size `N/2`. With the input pre-scaled by `0.5/N` the forward transform yields
//! `X/N`, and a forward transform followed by an inverse one gives back the input.
use std::cmp::Ordering;

use num_complex::Complex;

use crate::algorithms::complex;
use crate::options::PassLayout;
use crate::planner::{Direction, Planner};
use crate::twiddles::{half_rotation, MIN_TWIDDLE_SIZE};
use crate::Scalar;

/// Untangle the two half-size spectra in `buf` (a size-`size` real buffer in complex view).
fn fold<T: Scalar>(buf: &mut [Complex<T>], planner: &Planner<T>, direction: Direction) {
    let size = buf.len() << 1;
    let half = buf.len();
    let quarter = half >> 1;
    let eighth = quarter >> 1;

    // Sizes below 16 only ever need the half-point rotation
    let factors: &[Complex<T>] = if size >= MIN_TWIDDLE_SIZE {
        planner.twiddles_unchecked(size).as_slice()
    } else {
        &[]
    };
    let perm = planner.permutation_unchecked(half);

    for i in 1..quarter {
        let mut tw = match i.cmp(&eighth) {
            Ordering::Less => factors[i - 1],
            Ordering::Equal => half_rotation(),
            Ordering::Greater => {
                let w = factors[quarter - i - 1];
                Complex::new(w.im, w.re)
            }
        };
        if direction == Direction::Forward {
            tw.re = -tw.re;
        }

        let (pi, qi) = (perm[i], perm[half - i]);
        let (p, q) = (buf[pi], buf[qi]);
        let sum = p + q;
        let diff = p - q;

        let tw1 = tw.re * sum.im + tw.im * diff.re;
        let tw2 = tw.im * sum.im - tw.re * diff.re;

        buf[pi] = Complex::new(sum.re - tw1, diff.im - tw2);
        buf[qi] = Complex::new(sum.re + tw1, -(diff.im + tw2));
    }

    let two = T::one() + T::one();
    let mid = &mut buf[perm[quarter]];
    mid.re = mid.re * two;
    mid.im = -(mid.im * two);
}

/// Forward real transform of `buf` in place.
///
/// `buf.len()` must be a supported size the planner has built.
pub(crate) fn forward<T: Scalar>(buf: &mut [T], planner: &Planner<T>, layout: PassLayout) {
    let two = T::one() + T::one();
    if buf.len() == 2 {
        let (a, b) = (buf[0], buf[1]);
        buf[0] = two * (a + b);
        buf[1] = two * (a - b);
        return;
    }

    let view: &mut [Complex<T>] = bytemuck::cast_slice_mut(buf);
    complex::forward(view, planner, layout);

    let dc = view[0];
    view[0] = Complex::new(two * (dc.re + dc.im), two * (dc.re - dc.im));

    fold(view, planner, Direction::Forward);
}

/// Inverse of [`forward`].
pub(crate) fn inverse<T: Scalar>(buf: &mut [T], planner: &Planner<T>, layout: PassLayout) {
    if buf.len() == 2 {
        let (a, b) = (buf[0], buf[1]);
        buf[0] = a + b;
        buf[1] = a - b;
        return;
    }

    let view: &mut [Complex<T>] = bytemuck::cast_slice_mut(buf);

    let dc = view[0];
    view[0] = Complex::new(dc.re + dc.im, dc.re - dc.im);

    fold(view, planner, Direction::Reverse);
    complex::inverse(view, planner, layout);
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use utilities::assert_float_closeness;

    use super::*;

    /// Standard `exp(-2πi nk/N)` DFT of a real signal, bins `0..=N/2`
    fn naive_real_dft(input: &[f64]) -> Vec<Complex<f64>> {
        let n = input.len();
        (0..=n / 2)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(j, &x)| {
                        Complex::from_polar(x, -2.0 * PI * ((j * k) % n) as f64 / n as f64)
                    })
                    .sum()
            })
            .collect()
    }

    #[test]
    fn packed_spectrum_matches_dft() {
        let planner = Planner::<f64>::new(1024).unwrap();
        for log_n in 1..=10 {
            let n: usize = 1 << log_n;
            let input: Vec<f64> = (0..n).map(|i| ((i * i) as f64 * 0.01).sin() + 0.25).collect();
            let expected = naive_real_dft(&input);
            let scale = 0.5 / n as f64;

            let mut buf: Vec<f64> = input.iter().map(|x| x * scale).collect();
            forward(&mut buf, &planner, PassLayout::Auto);
            let norm = 1.0 / n as f64;

            assert_float_closeness(buf[0], expected[0].re * norm, 1e-9);
            assert_float_closeness(buf[1], expected[n / 2].re * norm, 1e-9);

            if n > 2 {
                let perm = planner.permutation(n / 2).unwrap();
                for k in 1..n / 2 {
                    let at = perm[k];
                    assert_float_closeness(buf[2 * at], expected[k].re * norm, 1e-9);
                    assert_float_closeness(buf[2 * at + 1], expected[k].im * norm, 1e-9);
                }
            }
        }
    }

    #[test]
    fn size_4_constant() {
        let planner = Planner::<f64>::new(4).unwrap();
        let mut buf = [0.125; 4];
        forward(&mut buf, &planner, PassLayout::Auto);
        assert_eq!(buf, [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn round_trip_all_sizes() {
        let planner = Planner::<f64>::new_full();
        for log_n in 1..=15 {
            let n: usize = 1 << log_n;
            let input: Vec<f64> = (0..n).map(|i| (i as f64 * 0.731).cos() - 0.1).collect();
            let scale = 0.5 / n as f64;

            let mut buf: Vec<f64> = input.iter().map(|x| x * scale).collect();
            forward(&mut buf, &planner, PassLayout::Auto);
            inverse(&mut buf, &planner, PassLayout::Auto);
            for (out, x) in buf.iter().zip(input.iter()) {
                assert_float_closeness(*out, *x, 1e-9);
            }
        }
    }
}
