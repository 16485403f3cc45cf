//! Shared validation for shape, resampling and batch operations
//!
//! Validation is implemented once here and used by every client
//! implementation, so that all of them reject exactly the same inputs.

use crate::error::{Error, Result};
use crate::tensor::Tensor;

// ============================================================================
// Shared Utilities
// ============================================================================

/// Normalize a dimension index, supporting negative indexing.
///
/// Returns `None` if the dimension is out of bounds.
#[inline]
pub fn normalize_dim(dim: isize, ndim: usize) -> Option<usize> {
    if ndim == 0 {
        return None;
    }
    let idx = if dim < 0 {
        let adjusted = ndim as isize + dim;
        if adjusted < 0 {
            return None;
        }
        adjusted as usize
    } else {
        dim as usize
    };
    if idx < ndim { Some(idx) } else { None }
}

// ============================================================================
// Resample Validation
// ============================================================================

/// Parameters for upsample/downsample after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResampleParams {
    /// Normalized axis index
    pub axis: usize,
    /// Length of the input along the axis
    pub axis_len: usize,
    /// Resampling factor (>= 1)
    pub factor: usize,
    /// Phase offset (< factor)
    pub phase: usize,
}

/// Validate inputs for upsample and downsample.
///
/// The phase is checked against the factor and rejected when out of range;
/// it is never wrapped.
pub fn validate_resample(
    tensor: &Tensor,
    factor: usize,
    axis: isize,
    phase: usize,
) -> Result<ResampleParams> {
    if factor == 0 {
        return Err(Error::invalid_argument(
            "factor",
            "resampling factor must be at least 1",
        ));
    }
    if phase >= factor {
        return Err(Error::invalid_argument(
            "phase",
            format!("phase must be between 0 and {} (got {})", factor - 1, phase),
        ));
    }

    let ndim = tensor.ndim();
    let axis_idx = normalize_dim(axis, ndim).ok_or(Error::InvalidDimension { dim: axis, ndim })?;

    Ok(ResampleParams {
        axis: axis_idx,
        axis_len: tensor.shape()[axis_idx],
        factor,
        phase,
    })
}

// ============================================================================
// Fixed-Length Validation
// ============================================================================

/// Validate that a tensor has a trailing dimension and return its length.
pub fn validate_trailing_dim(tensor: &Tensor) -> Result<usize> {
    tensor
        .shape()
        .last()
        .copied()
        .ok_or(Error::InvalidDimension { dim: -1, ndim: 0 })
}

// ============================================================================
// Batch Validation
// ============================================================================

/// Validate the input of a row-wise batch operation and return its row count.
///
/// The input must be exactly 2-D `(rows, samples)` with at least one row to
/// serve as the probe.
pub fn validate_batch_input(arr: &Tensor) -> Result<usize> {
    if arr.ndim() != 2 {
        return Err(Error::InvalidShape {
            op: "apply_to_2d",
            expected_ndim: 2,
            got: arr.shape().to_vec(),
        });
    }

    let rows = arr.shape()[0];
    if rows == 0 {
        return Err(Error::invalid_argument(
            "arr",
            "batch must contain at least one row",
        ));
    }

    Ok(rows)
}

// ============================================================================
// Tests
// ============================================================================
