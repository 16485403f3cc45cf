//! Resampling helpers for CPU tensors

use tracing::trace;

use crate::error::{Error, Result};
use crate::runtime::shape_ops;
use crate::tensor::Tensor;

/// Zero-insertion upsampling along one axis
pub fn upsample_impl(tensor: &Tensor, factor: usize, axis: isize, phase: usize) -> Result<Tensor> {
    let params = shape_ops::validate_resample(tensor, factor, axis, phase)?;

    let out_len = params.axis_len.checked_mul(params.factor).ok_or_else(|| {
        Error::invalid_argument(
            "factor",
            format!(
                "upsampled length {} * {} overflows",
                params.axis_len, params.factor
            ),
        )
    })?;
    trace!(
        axis = params.axis,
        len = params.axis_len,
        out_len,
        phase = params.phase,
        "upsample"
    );

    let mut out_shape = tensor.shape().to_vec();
    out_shape[params.axis] = out_len;
    let mut out = Tensor::zeros(&out_shape, tensor.dtype());

    // Positions phase, phase + factor, ... form a grid with exactly axis_len entries.
    let region = out
        .layout()
        .step(params.axis, params.phase, params.factor)
        .ok_or_else(|| Error::invalid_argument("factor", "resampling factor must be at least 1"))?;
    out.write_region(&region, tensor)?;
    Ok(out)
}

/// Decimation along one axis (zero-copy)
pub fn downsample_impl(
    tensor: &Tensor,
    factor: usize,
    axis: isize,
    phase: usize,
) -> Result<Tensor> {
    let params = shape_ops::validate_resample(tensor, factor, axis, phase)?;
    trace!(
        axis = params.axis,
        len = params.axis_len,
        phase = params.phase,
        factor = params.factor,
        "downsample"
    );
    tensor.slice_step(params.axis as isize, params.phase, params.factor)
}
