//! FFT Algorithm Implementations
//!
//! ## Available Algorithms
//!
//! - **complex**: recursive split-radix transform of complex samples. Input is in natural order,
//!   and so is the output, which leaves the spectrum in the network's own order (see
//!   [`crate::Planner::permutation`]).
//!
//! - **real**: transform of `N` real samples through the complex transform of size `N/2`,
//!   producing the packed half spectrum.
//!
//! Both expect the caller to have validated the size against the planner.

pub(crate) mod complex;
pub(crate) mod real;
