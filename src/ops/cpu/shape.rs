//! CPU implementation of shape operations.

use crate::error::Result;
use crate::ops::ShapeOps;
use crate::runtime::cpu::{CpuClient, helpers::fixed_length_impl};
use crate::tensor::Tensor;

/// ShapeOps implementation for CPU client.
impl ShapeOps for CpuClient {
    fn fixed_length(&self, tensor: &Tensor, n: usize) -> Result<Tensor> {
        fixed_length_impl(tensor, n)
    }
}
