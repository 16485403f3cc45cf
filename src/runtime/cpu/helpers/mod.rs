//! Helper functions for CPU tensor operations
//!
//! This module contains the implementations behind the CPU operation traits,
//! organized by functional category.

pub mod batch;
pub mod resample;
pub mod shape;

#[cfg(feature = "rayon")]
pub use batch::par_apply_rows_impl;
pub use batch::apply_rows_impl;
pub use resample::{downsample_impl, upsample_impl};
pub use shape::fixed_length_impl;
