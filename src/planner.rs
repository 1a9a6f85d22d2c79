//! The planner module owns every pre-computed table the transforms read: the twiddle factors of
//! each size, the permutation from natural to frequency order, and that permutation compiled
//! into cycles for in-place reordering.
//!
//! Tables are built for every supported size up to a maximum, smallest first, because each
//! twiddle table is derived from the one for half its size. Building needs `&mut Planner`, and
//! every transform only needs `&Planner`, so once a planner is built it can be shared freely
//! between threads.
use num_complex::Complex;
use tracing::{debug, trace};

use crate::error::{check_size, FftError};
use crate::permutation;
use crate::reorder::CycleTable;
use crate::twiddles::{Twiddles, MIN_TWIDDLE_SIZE};
use crate::{Scalar, MAX_SIZE, MIN_SIZE};

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Natural-order time domain to natural-order spectrum, or natural to frequency order
    Forward = 1,
    /// The unnormalized inverse of `Forward`
    Reverse = -1,
}

/// Pre-computed tables for all sizes from [`MIN_SIZE`] up to [`Planner::max_size`].
#[derive(Debug, Clone)]
pub struct Planner<T> {
    max_size: usize,
    /// Indexed by `log2(size) - 4`
    twiddles: Vec<Twiddles<T>>,
    /// Indexed by `log2(size) - 1`
    permutations: Vec<Vec<usize>>,
    /// Indexed by `log2(size) - 1`
    cycles: Vec<CycleTable>,
}

impl<T: Scalar> Planner<T> {
    /// Create a `Planner` covering every size up to the smallest power of two `>= size_hint`.
    ///
    /// A `size_hint` below [`MIN_SIZE`] builds the tables for [`MIN_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`FftError::UnsupportedSize`] if `size_hint` is larger than [`MAX_SIZE`].
    pub fn new(size_hint: usize) -> Result<Self, FftError> {
        let mut planner = Self::empty();
        planner.build(size_hint)?;
        Ok(planner)
    }

    /// Create a `Planner` for every supported size.
    pub fn new_full() -> Self {
        let mut planner = Self::empty();
        planner.extend_to(MAX_SIZE);
        planner
    }

    fn empty() -> Self {
        Self {
            max_size: 0,
            twiddles: Vec::new(),
            permutations: Vec::new(),
            cycles: Vec::new(),
        }
    }

    /// Make sure the tables cover every size up to the smallest power of two `>= size_hint`.
    ///
    /// Sizes that are already covered are left alone, so calling this repeatedly is cheap.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::UnsupportedSize`] if `size_hint` is larger than [`MAX_SIZE`].
    pub fn build(&mut self, size_hint: usize) -> Result<(), FftError> {
        if size_hint > MAX_SIZE {
            return Err(FftError::UnsupportedSize(size_hint));
        }
        let target = size_hint.max(MIN_SIZE).next_power_of_two();

        if target <= self.max_size {
            trace!(
                requested = target,
                max_size = self.max_size,
                "FFT tables already built"
            );
            return Ok(());
        }

        self.extend_to(target);
        Ok(())
    }

    fn extend_to(&mut self, target: usize) {
        let first = (self.max_size << 1).max(MIN_SIZE);

        let mut size = first;
        while size <= target {
            let perm = permutation::generate(size);
            self.cycles.push(CycleTable::generate(&perm));
            self.permutations.push(perm);

            if size >= MIN_TWIDDLE_SIZE {
                let table = Twiddles::generate(size, self.twiddles.last());
                self.twiddles.push(table);
            }

            size <<= 1;
        }
        self.max_size = target;

        debug!(
            from = first,
            to = target,
            twiddle_tables = self.twiddles.len(),
            "built FFT tables"
        );
    }

    /// Largest size the tables cover
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Check `size` is supported and built, returning `log2(size)`
    pub(crate) fn check_built(&self, size: usize) -> Result<usize, FftError> {
        let log_n = check_size(size)?;
        if size > self.max_size {
            return Err(FftError::TablesNotBuilt {
                size,
                built: self.max_size,
            });
        }
        Ok(log_n)
    }

    /// Twiddle table of `size`, which must be built and at least 16
    #[inline]
    pub(crate) fn twiddles_unchecked(&self, size: usize) -> &Twiddles<T> {
        &self.twiddles[size.ilog2() as usize - 4]
    }

    /// Permutation of `size`, which must be built
    #[inline]
    pub(crate) fn permutation_unchecked(&self, size: usize) -> &[usize] {
        &self.permutations[size.ilog2() as usize - 1]
    }

    /// The twiddle factors used by the size-`size` pass.
    ///
    /// # Errors
    ///
    /// Fails if `size` is unsupported, not built, or below 16 (those sizes have no table).
    pub fn twiddles(&self, size: usize) -> Result<&Twiddles<T>, FftError> {
        self.check_built(size)?;
        if size < MIN_TWIDDLE_SIZE {
            return Err(FftError::UnsupportedSize(size));
        }
        Ok(self.twiddles_unchecked(size))
    }

    /// Lookup table from frequency bin to natural-order position for a size-`size` transform:
    /// bin `k` of the output of [`crate::fft`] is `buf[table[k]]`.
    ///
    /// # Errors
    ///
    /// Fails if `size` is unsupported or not built.
    pub fn permutation(&self, size: usize) -> Result<&[usize], FftError> {
        let log_n = self.check_built(size)?;
        Ok(&self.permutations[log_n - 1])
    }

    /// Natural-order position of frequency bin `index` for a size-`size` transform.
    ///
    /// # Errors
    ///
    /// Fails if `size` is unsupported or not built, or if `index >= size`.
    pub fn permute_index(&self, size: usize, index: usize) -> Result<usize, FftError> {
        let table = self.permutation(size)?;
        table
            .get(index)
            .copied()
            .ok_or(FftError::IndexOutOfRange { index, size })
    }

    /// The permutation of `size`, compiled into cycles.
    ///
    /// # Errors
    ///
    /// Fails if `size` is unsupported or not built.
    pub fn cycles(&self, size: usize) -> Result<&CycleTable, FftError> {
        let log_n = self.check_built(size)?;
        Ok(&self.cycles[log_n - 1])
    }

    /// Reorder a complex transform output in place, from natural to frequency order
    /// ([`Direction::Forward`]) or back ([`Direction::Reverse`]).
    ///
    /// Any element type can be reordered, the size is `buf.len()`.
    ///
    /// # Errors
    ///
    /// Fails if `buf.len()` is unsupported or not built. The buffer is untouched in that case.
    pub fn reorder<E: Copy>(&self, buf: &mut [E], direction: Direction) -> Result<(), FftError> {
        let table = self.cycles(buf.len())?;
        table.apply(buf, direction);
        Ok(())
    }

    /// Reorder a packed real spectrum (the output of [`crate::fft_real`]) in place.
    ///
    /// Element 0 keeps the DC and Nyquist bins; complex element `k` ends up holding bin `k`.
    ///
    /// # Errors
    ///
    /// Fails if `buf.len()` is unsupported or not built. The buffer is untouched in that case.
    pub fn reorder_real(&self, buf: &mut [T], direction: Direction) -> Result<(), FftError> {
        let size = buf.len();
        self.check_built(size)?;
        if size == MIN_SIZE {
            return Ok(());
        }

        let table = self.cycles(size >> 1)?;
        let complex: &mut [Complex<T>] = bytemuck::cast_slice_mut(buf);
        table.apply(complex, direction);
        Ok(())
    }
}
