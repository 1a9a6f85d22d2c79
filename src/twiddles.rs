//! Rotation factors ("twiddles") for the split-radix passes.
//!
//! A size-`N` table holds `w[j] = exp(+2πi (j + 1) / N)`. Sizes up to [`FULL_QUARTER_MAX`] store
//! the whole first quarter of the unit circle (`N/4 - 1` entries). Larger sizes only store the
//! first eighth (`N/8 - 1` entries); the rest of the quarter is the same set of values with the
//! real and imaginary parts swapped, so the passes read those entries backwards.
//!
//! Tables are generated smallest first. A table re-uses every entry of the table for half its
//! size (those are exactly its odd-indexed angles), so across the whole size ladder only half of
//! the factors ever need a `sin`/`cos` evaluation.
use num_complex::Complex;

use crate::Scalar;

/// Smallest size that needs a table, sizes 2, 4 and 8 have their factors hard coded
pub(crate) const MIN_TWIDDLE_SIZE: usize = 16;

/// Largest size whose table stores the full quarter
pub(crate) const FULL_QUARTER_MAX: usize = 512;

/// The twiddle factors of one transform size
#[derive(Debug, Clone)]
pub struct Twiddles<T> {
    size: usize,
    factors: Vec<Complex<T>>,
}

impl<T: Scalar> Twiddles<T> {
    /// Build the table for `size`, copying the shared angles out of `parent`, which must be the
    /// table for `size / 2` when present.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not a power of two of at least 16, or if `parent` has the wrong size.
    pub(crate) fn generate(size: usize, parent: Option<&Twiddles<T>>) -> Self {
        assert!(size.is_power_of_two() && size >= MIN_TWIDDLE_SIZE);
        if let Some(parent) = parent {
            assert_eq!(parent.size << 1, size);
        }

        let full_quarter = size <= FULL_QUARTER_MAX;
        let len = if full_quarter { size / 4 - 1 } else { size / 8 - 1 };

        // (π/4) / (len + 1) is a 1/N step of a half circle on the short tables; the full-quarter
        // tables are twice as long relative to N, so they need twice the step.
        let mut step = T::FRAC_PI_4() / T::from(len + 1).unwrap();
        if full_quarter {
            step = step + step;
        }

        let factors = (0..len)
            .map(|x| match parent {
                Some(parent) if x & 1 == 1 => parent.factors[x >> 1],
                _ => {
                    let (sin, cos) = (T::from(x + 1).unwrap() * step).sin_cos();
                    Complex::new(cos, sin)
                }
            })
            .collect();

        Self { size, factors }
    }

    /// The transform size this table belongs to
    pub fn size(&self) -> usize {
        self.size
    }

    /// The stored factors, `w[j] = exp(+2πi (j + 1) / size)`
    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.factors
    }

    /// `exp(+2πi k / size)` for `1 <= k < size / 4`, whether or not it is stored directly.
    ///
    /// # Panics
    ///
    /// Panics if `k` is `0` or at least `size / 4`.
    #[inline]
    pub fn factor(&self, k: usize) -> Complex<T> {
        assert!(
            k >= 1 && k < self.size / 4,
            "twiddle index {k} out of range 1..{}",
            self.size / 4
        );

        if k <= self.factors.len() {
            self.factors[k - 1]
        } else if k == self.size / 8 {
            half_rotation()
        } else {
            let w = self.factors[self.size / 4 - k - 1];
            Complex::new(w.im, w.re)
        }
    }
}

/// `exp(iπ/4)`, the only rotation the half-point butterflies need
#[inline]
pub(crate) fn half_rotation<T: Scalar>() -> Complex<T> {
    Complex::new(T::FRAC_1_SQRT_2(), T::FRAC_1_SQRT_2())
}
