//! Errors returned by the transform entry points.
//!
//! Every check happens before the first write to a caller buffer, so an `Err` always
//! leaves the buffer exactly as it was passed in.
use thiserror::Error;

use crate::{MAX_SIZE, MIN_SIZE};

/// Precondition failures of the FFT routines
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The length is not a power of two in `MIN_SIZE..=MAX_SIZE`
    #[error("unsupported FFT size {0}, expected a power of two between 2 and 32768")]
    UnsupportedSize(usize),

    /// The length is supported, but the planner was built for smaller sizes only
    #[error("tables for size {size} have not been built, planner covers sizes up to {built}")]
    TablesNotBuilt { size: usize, built: usize },

    /// A natural-order index past the end of the transform
    #[error("index {index} is out of range for a size {size} transform")]
    IndexOutOfRange { index: usize, size: usize },

    /// Spectral helpers work on pairs of bins
    #[error("spectral buffers must have an even length of at least 2, got {0}")]
    OddLength(usize),

    /// Operands of a spectral helper differ in length
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Returns `Ok(log2(size))` if `size` is one of the supported transform sizes.
pub(crate) fn check_size(size: usize) -> Result<usize, FftError> {
    if size.is_power_of_two() && (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size.ilog2() as usize)
    } else {
        Err(FftError::UnsupportedSize(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_sizes() {
        for log_n in 1..=15 {
            assert_eq!(check_size(1 << log_n), Ok(log_n));
        }
    }

    #[test]
    fn unsupported_sizes() {
        for size in [0, 1, 3, 6, 12, 1000, 1 << 16, usize::MAX] {
            assert_eq!(check_size(size), Err(FftError::UnsupportedSize(size)));
        }
    }

    #[test]
    fn messages_name_the_size() {
        let msg = FftError::UnsupportedSize(48).to_string();
        assert!(msg.contains("48") && msg.contains("32768"));

        let msg = FftError::TablesNotBuilt {
            size: 4096,
            built: 1024,
        }
        .to_string();
        assert!(msg.contains("4096") && msg.contains("1024"));
    }
}
