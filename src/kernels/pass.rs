//! One split-radix pass over a whole block.
//!
//! A pass over a size-`N` block applies one butterfly to every quadruple
//! `(k, k + N/4, k + N/2, k + 3N/4)` for `k` in `0..N/4`. The first quadruple needs no rotation,
//! so it always takes the `zero` butterfly. The two layouts only differ in how they walk the
//! twiddle table:
//!
//! - linear reads `exp(+2πi k/N)` for every `k`, through [`Twiddles::factor`]
//! - mirrored walks the first eighth forwards, takes the `half` butterfly at `k == N/8`, then
//!   walks the same entries backwards with real and imaginary parts swapped
use num_complex::Complex;

use crate::kernels::butterflies::{Butterflies, Forward, Inverse};
use crate::twiddles::Twiddles;
use crate::Scalar;

type Quarters<'a, T> = [&'a mut [Complex<T>]; 4];

fn split_quarters<T>(buf: &mut [Complex<T>]) -> Quarters<'_, T> {
    let quarter = buf.len() / 4;
    let (first_half, second_half) = buf.split_at_mut(2 * quarter);
    let (q0, q1) = first_half.split_at_mut(quarter);
    let (q2, q3) = second_half.split_at_mut(quarter);
    [q0, q1, q2, q3]
}

#[inline(always)]
fn apply_at<T: Scalar>(
    q: &mut Quarters<'_, T>,
    k: usize,
    butterfly: impl FnOnce([Complex<T>; 4]) -> [Complex<T>; 4],
) {
    let out = butterfly([q[0][k], q[1][k], q[2][k], q[3][k]]);
    q[0][k] = out[0];
    q[1][k] = out[1];
    q[2][k] = out[2];
    q[3][k] = out[3];
}

#[inline(always)]
fn linear<T: Scalar, B: Butterflies<T>>(buf: &mut [Complex<T>], twiddles: &Twiddles<T>) {
    let mut q = split_quarters(buf);
    let quarter = q[0].len();

    apply_at(&mut q, 0, B::zero);
    for k in 1..quarter {
        let w = twiddles.factor(k);
        apply_at(&mut q, k, |a| B::general(a, w));
    }
}

#[inline(always)]
fn mirrored<T: Scalar, B: Butterflies<T>>(buf: &mut [Complex<T>], twiddles: &Twiddles<T>) {
    let mut q = split_quarters(buf);
    let eighth = q[0].len() / 2;
    // Full-quarter tables are longer than needed here
    let factors = &twiddles.as_slice()[..eighth - 1];

    apply_at(&mut q, 0, B::zero);
    for (k, &w) in (1..eighth).zip(factors) {
        apply_at(&mut q, k, |a| B::general(a, w));
    }

    apply_at(&mut q, eighth, B::half);
    for (k, &w) in (eighth + 1..2 * eighth).zip(factors.iter().rev()) {
        let w = Complex::new(w.im, w.re);
        apply_at(&mut q, k, |a| B::general(a, w));
    }
}

/// Forward pass over `buf`, whose length must match `twiddles.size()`
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub(crate) fn forward_pass<T: Scalar>(
    buf: &mut [Complex<T>],
    twiddles: &Twiddles<T>,
    mirror: bool,
) {
    debug_assert_eq!(buf.len(), twiddles.size());
    if mirror {
        mirrored::<T, Forward>(buf, twiddles);
    } else {
        linear::<T, Forward>(buf, twiddles);
    }
}

/// Inverse pass over `buf`, whose length must match `twiddles.size()`
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub(crate) fn inverse_pass<T: Scalar>(
    buf: &mut [Complex<T>],
    twiddles: &Twiddles<T>,
    mirror: bool,
) {
    debug_assert_eq!(buf.len(), twiddles.size());
    if mirror {
        mirrored::<T, Inverse>(buf, twiddles);
    } else {
        linear::<T, Inverse>(buf, twiddles);
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use utilities::assert_float_closeness;

    use super::*;

    fn signal(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|i| Complex64::new((i as f64 * 0.37).sin(), (i as f64 * 1.3).cos()))
            .collect()
    }

    fn ladder(max: usize) -> Vec<Twiddles<f64>> {
        let mut tables: Vec<Twiddles<f64>> = Vec::new();
        let mut size = 16;
        while size <= max {
            let table = Twiddles::generate(size, tables.last());
            tables.push(table);
            size <<= 1;
        }
        tables
    }

    #[test]
    fn layouts_agree() {
        for table in ladder(4096) {
            let n = table.size();
            let input = signal(n);

            let mut lin = input.clone();
            let mut mir = input.clone();
            forward_pass(&mut lin, &table, false);
            forward_pass(&mut mir, &table, true);
            for (a, b) in lin.iter().zip(mir.iter()) {
                assert_float_closeness(a.re, b.re, 1e-12);
                assert_float_closeness(a.im, b.im, 1e-12);
            }

            inverse_pass(&mut lin, &table, false);
            inverse_pass(&mut mir, &table, true);
            for (a, b) in lin.iter().zip(mir.iter()) {
                assert_float_closeness(a.re, b.re, 1e-12);
                assert_float_closeness(a.im, b.im, 1e-12);
            }
        }
    }

    #[test]
    fn inverse_pass_is_adjoint_of_forward_pass() {
        for table in ladder(1024) {
            let n = table.size();
            let x = signal(n);
            let y: Vec<Complex64> = (0..n)
                .map(|i| Complex64::new((i as f64 * 0.11).cos(), -(i as f64 * 0.7).sin()))
                .collect();
            for mirror in [false, true] {
                let mut fx = x.clone();
                forward_pass(&mut fx, &table, mirror);
                let mut iy = y.clone();
                inverse_pass(&mut iy, &table, mirror);

                let lhs: Complex64 = fx.iter().zip(y.iter()).map(|(a, b)| a.conj() * b).sum();
                let rhs: Complex64 = x.iter().zip(iy.iter()).map(|(a, b)| a.conj() * b).sum();
                assert_float_closeness(lhs.re, rhs.re, 1e-9);
                assert_float_closeness(lhs.im, rhs.im, 1e-9);
            }
        }
    }
}
