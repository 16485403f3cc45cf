//! CPU implementation of batch operations.

use crate::error::Result;
use crate::ops::{BatchOps, RowOutput};
#[cfg(feature = "rayon")]
use crate::runtime::cpu::helpers::par_apply_rows_impl;
use crate::runtime::cpu::{CpuClient, helpers::apply_rows_impl};
use crate::tensor::Tensor;

/// BatchOps implementation for CPU client.
impl BatchOps for CpuClient {
    fn apply_to_2d<O, F>(&self, f: F, arr: &Tensor) -> Result<O>
    where
        O: RowOutput,
        F: FnMut(&Tensor) -> Result<O>,
    {
        apply_rows_impl(f, arr)
    }

    #[cfg(feature = "rayon")]
    fn par_apply_to_2d<O, F>(&self, f: F, arr: &Tensor) -> Result<O>
    where
        O: RowOutput + Send,
        F: Fn(&Tensor) -> Result<O> + Sync,
    {
        par_apply_rows_impl(self.config(), f, arr)
    }
}
