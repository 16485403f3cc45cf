//! Length coercion helpers for CPU tensors

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{Error, Result};
use crate::runtime::shape_ops;
use crate::tensor::Tensor;

/// Coerce the trailing dimension of `tensor` to `n`
pub fn fixed_length_impl(tensor: &Tensor, n: usize) -> Result<Tensor> {
    let len = shape_ops::validate_trailing_dim(tensor)?;

    match len.cmp(&n) {
        Ordering::Equal => {
            trace!(len, "fixed_length: unchanged");
            Ok(tensor.clone())
        }
        Ordering::Greater => {
            trace!(len, n, "fixed_length: truncating view");
            tensor.narrow(-1, 0, n)
        }
        Ordering::Less => {
            trace!(len, n, "fixed_length: zero-padded copy");
            let last = tensor.ndim() - 1;
            let mut out_shape = tensor.shape().to_vec();
            out_shape[last] = n;

            let mut out = Tensor::zeros(&out_shape, tensor.dtype());
            let region = out
                .layout()
                .narrow(last, 0, len)
                .ok_or_else(|| Error::shape_mismatch(&out_shape, tensor.shape()))?;
            out.write_region(&region, tensor)?;
            Ok(out)
        }
    }
}
