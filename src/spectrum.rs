//! Element-wise products of two spectra, as used for fast convolution.
//!
//! All helpers work on pairs of bins, so the length must be even and at least 2, and every
//! operand must have the same length. Nothing is written when either check fails.
use num_complex::Complex;

use crate::error::FftError;
use crate::Scalar;

fn check_lengths(expected: usize, others: &[usize]) -> Result<(), FftError> {
    if let Some(&actual) = others.iter().find(|&&len| len != expected) {
        return Err(FftError::LengthMismatch { expected, actual });
    }
    if expected < 2 || expected % 2 != 0 {
        return Err(FftError::OddLength(expected));
    }
    Ok(())
}

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
fn mul_pairs<T: Scalar>(a: &mut [Complex<T>], b: &[Complex<T>]) {
    a.chunks_exact_mut(2)
        .zip(b.chunks_exact(2))
        .for_each(|(a, b)| {
            a[0] = a[0] * b[0];
            a[1] = a[1] * b[1];
        });
}

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
fn mul_pairs_into<T: Scalar>(
    out: &mut [Complex<T>],
    a: &[Complex<T>],
    b: &[Complex<T>],
    accumulate: bool,
) {
    out.chunks_exact_mut(2)
        .zip(a.chunks_exact(2))
        .zip(b.chunks_exact(2))
        .for_each(|((out, a), b)| {
            let p0 = a[0] * b[0];
            let p1 = a[1] * b[1];
            if accumulate {
                out[0] = out[0] + p0;
                out[1] = out[1] + p1;
            } else {
                out[0] = p0;
                out[1] = p1;
            }
        });
}

/// `a[i] *= b[i]`
///
/// # Errors
///
/// [`FftError::LengthMismatch`] if `b.len() != a.len()`, [`FftError::OddLength`] if the
/// length is odd or below 2.
pub fn complex_mul<T: Scalar>(a: &mut [Complex<T>], b: &[Complex<T>]) -> Result<(), FftError> {
    check_lengths(a.len(), &[b.len()])?;
    mul_pairs(a, b);
    Ok(())
}

/// `out[i] = a[i] * b[i]`
///
/// # Errors
///
/// Same conditions as [`complex_mul`], checked against `out.len()`.
pub fn complex_mul_into<T: Scalar>(
    out: &mut [Complex<T>],
    a: &[Complex<T>],
    b: &[Complex<T>],
) -> Result<(), FftError> {
    check_lengths(out.len(), &[a.len(), b.len()])?;
    mul_pairs_into(out, a, b, false);
    Ok(())
}

/// `out[i] += a[i] * b[i]`
///
/// # Errors
///
/// Same conditions as [`complex_mul`], checked against `out.len()`.
pub fn complex_mul_add<T: Scalar>(
    out: &mut [Complex<T>],
    a: &[Complex<T>],
    b: &[Complex<T>],
) -> Result<(), FftError> {
    check_lengths(out.len(), &[a.len(), b.len()])?;
    mul_pairs_into(out, a, b, true);
    Ok(())
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use utilities::assert_float_closeness;

    use super::*;

    fn operands(n: usize) -> (Vec<Complex64>, Vec<Complex64>) {
        let a = (0..n)
            .map(|i| Complex64::new(i as f64 - 2.0, 0.5 * i as f64))
            .collect();
        let b = (0..n)
            .map(|i| Complex64::new(1.0 / (i + 1) as f64, -(i as f64)))
            .collect();
        (a, b)
    }

    #[test]
    fn products_match_per_element() {
        let (a, b) = operands(8);

        let mut in_place = a.clone();
        complex_mul(&mut in_place, &b).unwrap();

        let mut into = vec![Complex64::new(9.0, 9.0); 8];
        complex_mul_into(&mut into, &a, &b).unwrap();

        let mut acc = vec![Complex64::new(1.0, -1.0); 8];
        complex_mul_add(&mut acc, &a, &b).unwrap();

        for i in 0..8 {
            let expected = a[i] * b[i];
            assert_float_closeness(in_place[i].re, expected.re, 1e-12);
            assert_float_closeness(in_place[i].im, expected.im, 1e-12);
            assert_eq!(into[i], in_place[i]);
            assert_float_closeness(acc[i].re, expected.re + 1.0, 1e-12);
            assert_float_closeness(acc[i].im, expected.im - 1.0, 1e-12);
        }
    }

    #[test]
    fn rejects_odd_and_short_lengths() {
        for n in [0, 1, 3, 7] {
            let (a, b) = operands(n);
            let mut buf = a.clone();
            assert_eq!(complex_mul(&mut buf, &b), Err(FftError::OddLength(n)));
            assert_eq!(buf, a);
        }
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let (a, b) = operands(8);
        let mut out = vec![Complex64::default(); 6];
        assert_eq!(
            complex_mul_into(&mut out, &a, &b),
            Err(FftError::LengthMismatch {
                expected: 6,
                actual: 8
            })
        );
        assert!(out.iter().all(|z| *z == Complex64::default()));

        let mut a = a;
        assert_eq!(
            complex_mul(&mut a, &b[..4]),
            Err(FftError::LengthMismatch {
                expected: 8,
                actual: 4
            })
        );
    }
}
