//! Row-wise batch mapping trait.

use crate::error::Result;
use crate::ops::RowOutput;
use crate::tensor::Tensor;

/// Map a function over the rows of a 2-D batch and stack the results
///
/// The first row is evaluated as a probe. Its result fixes the number of
/// output fields and, per field, the shape and dtype every later row must
/// produce. Each field is stacked along a new leading dimension of size
/// `rows`, and the stacked fields are returned as the same [`RowOutput`]
/// type the function returns.
///
/// The function is called exactly once per row. Rows are zero-copy views
/// into the input.
///
/// # Errors
///
/// - `InvalidShape` if the input is not 2-D
/// - `InvalidArgument` if the input has no rows
/// - `ShapeMismatch`, `DTypeMismatch` or `FieldCountMismatch` from the first
///   row whose result disagrees with the probe
/// - any error returned by the function, unchanged
pub trait BatchOps {
    /// Map `f` over the rows of `arr` on the calling thread
    ///
    /// # Example
    ///
    /// ```
    /// use echolect::prelude::*;
    ///
    /// let client = CpuClient::new();
    /// let x = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    ///
    /// // One field per row: stacked to shape [2, 2]
    /// let firsts = client.apply_to_2d(|row: &Tensor| row.narrow(0, 0, 2), &x)?;
    /// assert_eq!(firsts.shape(), &[2, 2]);
    /// assert_eq!(firsts.to_vec::<f64>(), vec![1.0, 2.0, 4.0, 5.0]);
    /// # Ok::<(), echolect::error::Error>(())
    /// ```
    fn apply_to_2d<O, F>(&self, f: F, arr: &Tensor) -> Result<O>
    where
        O: RowOutput,
        F: FnMut(&Tensor) -> Result<O>;

    /// Map `f` over the rows of `arr`, evaluating rows on the rayon pool
    ///
    /// Same contract as [`apply_to_2d`](Self::apply_to_2d). Rows after the
    /// probe are evaluated in parallel chunks and written in row order, so
    /// the reported error is the one from the lowest failing row.
    #[cfg(feature = "rayon")]
    fn par_apply_to_2d<O, F>(&self, f: F, arr: &Tensor) -> Result<O>
    where
        O: RowOutput + Send,
        F: Fn(&Tensor) -> Result<O> + Sync;
}
