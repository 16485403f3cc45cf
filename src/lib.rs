//! # echolect
//!
//! **Array-shape and indexing core for signal filtering.**
//!
//! echolect provides the small set of array utilities a filtering toolkit
//! is built on: FFT-friendly length rounding, length coercion, integer-factor
//! resampling with a phase offset, convolution output alignment, and a
//! row-wise batch mapper that stacks per-row results.
//!
//! ## Features
//!
//! - **Tensors**: N-dimensional, runtime-typed arrays with zero-copy views
//!   (narrow, strided step, select) over shared storage
//! - **Shape**: [`next_power_of_two`](ops::next_power_of_two) and
//!   [`fixed_length`](ops::ShapeOps::fixed_length)
//! - **Resampling**: [`upsample`](ops::ResampleOps::upsample) and
//!   [`downsample`](ops::ResampleOps::downsample) along any axis
//! - **Alignment**: [`convslice`](ops::convslice) and [`ConvAlign`](ops::ConvAlign)
//! - **Batching**: [`apply_to_2d`](ops::BatchOps::apply_to_2d) for single
//!   or grouped row results
//! - **Timing**: [`bench::time_filters`] for quick filter comparisons
//!
//! ## Quick Start
//!
//! ```rust
//! use echolect::prelude::*;
//!
//! let client = CpuClient::new();
//! let x = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
//!
//! let up = client.upsample(&x, 2, -1, 0)?;
//! assert_eq!(up.shape(), &[2, 6]);
//!
//! let back = client.downsample(&up, 2, -1, 0)?;
//! assert_eq!(back.to_vec::<f64>(), x.to_vec::<f64>());
//!
//! let keep = convslice(3, 5, ConvAlign::Same)?;
//! assert_eq!(keep, 1..6);
//! # Ok::<(), echolect::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel row evaluation in
//!   [`par_apply_to_2d`](ops::BatchOps::par_apply_to_2d)
//! - `f16`: Half-precision floats (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod bench;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        BatchOps, ConvAlign, OutputKind, ResampleOps, RowOutput, ShapeOps, convslice,
        next_power_of_two,
    };
    pub use crate::runtime::{ClientConfig, CpuClient};
    pub use crate::tensor::{Layout, Tensor};
}
