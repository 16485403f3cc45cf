//! CPU implementation of resampling operations.

use crate::error::Result;
use crate::ops::ResampleOps;
use crate::runtime::cpu::{
    CpuClient,
    helpers::{downsample_impl, upsample_impl},
};
use crate::tensor::Tensor;

/// ResampleOps implementation for CPU client.
impl ResampleOps for CpuClient {
    fn upsample(
        &self,
        tensor: &Tensor,
        factor: usize,
        axis: isize,
        phase: usize,
    ) -> Result<Tensor> {
        upsample_impl(tensor, factor, axis, phase)
    }

    fn downsample(
        &self,
        tensor: &Tensor,
        factor: usize,
        axis: isize,
        phase: usize,
    ) -> Result<Tensor> {
        downsample_impl(tensor, factor, axis, phase)
    }
}
