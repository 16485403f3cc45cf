//! Integer-factor resampling operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Zero-insertion upsampling and decimation along one axis
///
/// Both operations take the axis explicitly (negative values count from the
/// end) and a `phase` in `0..factor` selecting where the real samples sit.
/// No filtering is applied in either direction.
pub trait ResampleOps {
    /// Upsample by inserting zeros
    ///
    /// The output has `factor * len` samples along `axis`; input sample `i`
    /// is placed at `factor * i + phase` and every other position is zero.
    /// Always returns freshly allocated storage of the input dtype.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `factor == 0` or `phase >= factor`
    /// - `InvalidDimension` if `axis` is out of range
    ///
    /// # Example
    ///
    /// ```
    /// use echolect::prelude::*;
    ///
    /// let client = CpuClient::new();
    /// let x = Tensor::from_slice(&[1i32, 2, 3], &[3]);
    /// let up = client.upsample(&x, 2, 0, 1)?;
    /// assert_eq!(up.to_vec::<i32>(), vec![0, 1, 0, 2, 0, 3]);
    /// # Ok::<(), echolect::error::Error>(())
    /// ```
    fn upsample(&self, tensor: &Tensor, factor: usize, axis: isize, phase: usize)
    -> Result<Tensor>;

    /// Downsample by keeping every `factor`-th sample starting at `phase`
    ///
    /// Returns a strided view sharing storage with the input. When
    /// `phase >= len` the result is empty along `axis`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `factor == 0` or `phase >= factor`
    /// - `InvalidDimension` if `axis` is out of range
    fn downsample(
        &self,
        tensor: &Tensor,
        factor: usize,
        axis: isize,
        phase: usize,
    ) -> Result<Tensor>;
}
