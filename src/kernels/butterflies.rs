//! Split-radix butterflies
//!
//! Each butterfly takes the four samples `a0..a3` at offsets `k`, `k + N/4`, `k + N/2` and
//! `k + 3N/4` of a size-`N` block. With `d02 = a0 - a2` and `d13 = a1 - a3`, the forward
//! butterfly computes
//!
//! ```text
//! a0' = a0 + a2
//! a1' = a1 + a3
//! a2' = (d02 + i·d13) · w
//! a3' = (d02 - i·d13) · conj(w)
//! ```
//!
//! where `w = exp(+2πi k/N)`. The inverse butterfly is its conjugate transpose, so it only undoes
//! the forward one once the sub-transforms in between have run. The
//! `zero` variants are the `w = 1` case and need no multiply, the `half` variants are the
//! `w = exp(iπ/4)` case and only scale by `√½`.
use num_complex::Complex;

use crate::Scalar;

/// `z · i`
#[inline(always)]
fn mul_i<T: Scalar>(z: Complex<T>) -> Complex<T> {
    Complex::new(-z.im, z.re)
}

/// `z · exp(iπ/4)`
#[inline(always)]
fn mul_half<T: Scalar>(z: Complex<T>, sqrt_half: T) -> Complex<T> {
    Complex::new((z.re - z.im) * sqrt_half, (z.re + z.im) * sqrt_half)
}

/// `z · exp(-iπ/4)`
#[inline(always)]
fn mul_half_conj<T: Scalar>(z: Complex<T>, sqrt_half: T) -> Complex<T> {
    Complex::new((z.re + z.im) * sqrt_half, (z.im - z.re) * sqrt_half)
}

/// The four-sample butterflies of one transform direction
pub(crate) trait Butterflies<T: Scalar> {
    /// Butterfly at `k == 0`
    fn zero(a: [Complex<T>; 4]) -> [Complex<T>; 4];

    /// Butterfly at `k == N/8`
    fn half(a: [Complex<T>; 4]) -> [Complex<T>; 4];

    /// Butterfly at any other `k`, `w` being `exp(+2πi k/N)`
    fn general(a: [Complex<T>; 4], w: Complex<T>) -> [Complex<T>; 4];
}

/// Forward (decimation-in-frequency) butterflies
pub(crate) struct Forward;

/// Inverse (decimation-in-time) butterflies
pub(crate) struct Inverse;

impl<T: Scalar> Butterflies<T> for Forward {
    #[inline(always)]
    fn zero([a0, a1, a2, a3]: [Complex<T>; 4]) -> [Complex<T>; 4] {
        let d02 = a0 - a2;
        let d13 = mul_i(a1 - a3);
        [a0 + a2, a1 + a3, d02 + d13, d02 - d13]
    }

    #[inline(always)]
    fn half([a0, a1, a2, a3]: [Complex<T>; 4]) -> [Complex<T>; 4] {
        let sqrt_half = T::FRAC_1_SQRT_2();
        let d02 = a0 - a2;
        let d13 = mul_i(a1 - a3);
        [
            a0 + a2,
            a1 + a3,
            mul_half(d02 + d13, sqrt_half),
            mul_half_conj(d02 - d13, sqrt_half),
        ]
    }

    #[inline(always)]
    fn general([a0, a1, a2, a3]: [Complex<T>; 4], w: Complex<T>) -> [Complex<T>; 4] {
        let d02 = a0 - a2;
        let d13 = mul_i(a1 - a3);
        [a0 + a2, a1 + a3, (d02 + d13) * w, (d02 - d13) * w.conj()]
    }
}

impl<T: Scalar> Butterflies<T> for Inverse {
    #[inline(always)]
    fn zero([a0, a1, a2, a3]: [Complex<T>; 4]) -> [Complex<T>; 4] {
        let sum = a2 + a3;
        let diff = mul_i(a3 - a2);
        [a0 + sum, a1 + diff, a0 - sum, a1 - diff]
    }

    #[inline(always)]
    fn half([a0, a1, a2, a3]: [Complex<T>; 4]) -> [Complex<T>; 4] {
        let sqrt_half = T::FRAC_1_SQRT_2();
        let b2 = mul_half_conj(a2, sqrt_half);
        let b3 = mul_half(a3, sqrt_half);
        let sum = b2 + b3;
        let diff = mul_i(b3 - b2);
        [a0 + sum, a1 + diff, a0 - sum, a1 - diff]
    }

    #[inline(always)]
    fn general([a0, a1, a2, a3]: [Complex<T>; 4], w: Complex<T>) -> [Complex<T>; 4] {
        let b2 = a2 * w.conj();
        let b3 = a3 * w;
        let sum = b2 + b3;
        let diff = mul_i(b3 - b2);
        [a0 + sum, a1 + diff, a0 - sum, a1 - diff]
    }
}

/// Apply a butterfly to the four samples `stride` apart starting at `buf[0]`
#[inline(always)]
fn strided<T: Scalar>(
    buf: &mut [Complex<T>],
    stride: usize,
    butterfly: impl FnOnce([Complex<T>; 4]) -> [Complex<T>; 4],
) {
    let out = butterfly([buf[0], buf[stride], buf[2 * stride], buf[3 * stride]]);
    buf[0] = out[0];
    buf[stride] = out[1];
    buf[2 * stride] = out[2];
    buf[3 * stride] = out[3];
}

/// `chunk_size == 2`, so skip phase. Same in both directions.
#[inline]
pub(crate) fn fft_chunk_2<T: Scalar>(buf: &mut [Complex<T>]) {
    let z0 = buf[0];
    let z1 = buf[1];
    buf[0] = z0 + z1;
    buf[1] = z0 - z1;
}

/// `chunk_size == 4`, one zero-rotation butterfly and a radix-2 step on the even half
#[inline]
pub(crate) fn fft_chunk_4<T: Scalar>(buf: &mut [Complex<T>]) {
    strided(buf, 1, Forward::zero);
    fft_chunk_2(&mut buf[..2]);
}

/// `chunk_size == 8`, hard coded twiddles `1` and `exp(iπ/4)`
#[inline]
pub(crate) fn fft_chunk_8<T: Scalar>(buf: &mut [Complex<T>]) {
    strided(buf, 2, Forward::zero);
    strided(&mut buf[1..], 2, Forward::half);
    fft_chunk_2(&mut buf[4..6]);
    fft_chunk_2(&mut buf[6..8]);
    fft_chunk_4(&mut buf[..4]);
}

/// Inverse of [`fft_chunk_4`] (unnormalized)
#[inline]
pub(crate) fn ifft_chunk_4<T: Scalar>(buf: &mut [Complex<T>]) {
    fft_chunk_2(&mut buf[..2]);
    strided(buf, 1, Inverse::zero);
}

/// Inverse of [`fft_chunk_8`] (unnormalized)
#[inline]
pub(crate) fn ifft_chunk_8<T: Scalar>(buf: &mut [Complex<T>]) {
    ifft_chunk_4(&mut buf[..4]);
    fft_chunk_2(&mut buf[4..6]);
    fft_chunk_2(&mut buf[6..8]);
    strided(buf, 2, Inverse::zero);
    strided(&mut buf[1..], 2, Inverse::half);
}
