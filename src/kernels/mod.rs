//! Split-radix kernels
//!
//! ## Organization
//!
//! - `butterflies`: the four-sample butterflies in both directions, and the fully unrolled
//!   transforms of sizes 2, 4 and 8
//! - `pass`: one pass of butterflies over a whole block of size 16 or more, dispatched at runtime
//!   on the available CPU features

pub(crate) mod butterflies;
pub(crate) mod pass;
