//! Filtering-utility operations
//!
//! This module defines operation traits and implementations for length
//! coercion, resampling and row-wise batch mapping, together with the
//! convolution alignment helpers.
//!
//! # Design
//!
//! Operations are defined as traits that are implemented by a client. The
//! client carries the execution configuration an operation may consult.
//!
//! ```text
//! CpuClient
//!   ├── implements ShapeOps     (fixed_length)
//!   ├── implements ResampleOps  (upsample, downsample)
//!   └── implements BatchOps     (apply_to_2d, par_apply_to_2d)
//! ```
//!
//! Client-independent helpers are free functions:
//! - [`next_power_of_two`] - FFT-friendly length rounding
//! - [`convslice`] / [`ConvAlign`] - which part of a full convolution to keep
//!
//! # Views and copies
//!
//! Operations return zero-copy views where the result is a sub-grid of the
//! input (truncation, downsampling, alignment trimming) and allocate fresh
//! storage where new elements appear (zero padding, upsampling, batch
//! outputs). Use [`Tensor::shares_storage`](crate::tensor::Tensor::shares_storage)
//! to tell them apart.

mod align;
pub mod cpu;
mod row_output;
mod shape;
pub mod traits;

pub use align::{ConvAlign, convslice};
pub use row_output::{OutputKind, RowOutput};
pub use shape::next_power_of_two;
pub use traits::{BatchOps, ResampleOps, ShapeOps};
