//! Shape manipulation operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Shape manipulation operations
pub trait ShapeOps {
    /// Coerce the trailing dimension to exactly `n` samples
    ///
    /// - equal length: returns `tensor` itself, sharing its storage
    /// - longer: keeps the first `n` samples of every trailing row (zero-copy view)
    /// - shorter: allocates a zero-filled tensor of the target shape and copies
    ///   `tensor` into its leading region
    ///
    /// Every other dimension and the dtype are unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` for a 0-d tensor.
    ///
    /// # Example
    ///
    /// ```
    /// use echolect::prelude::*;
    ///
    /// let client = CpuClient::new();
    /// let x = Tensor::from_slice(&[1.0f32, 2.0, 3.0], &[3]);
    /// let padded = client.fixed_length(&x, 5)?;
    /// assert_eq!(padded.to_vec::<f32>(), vec![1.0, 2.0, 3.0, 0.0, 0.0]);
    /// # Ok::<(), echolect::error::Error>(())
    /// ```
    fn fixed_length(&self, tensor: &Tensor, n: usize) -> Result<Tensor>;
}
