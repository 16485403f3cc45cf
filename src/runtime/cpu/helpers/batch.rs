//! Row-wise batch mapping helpers for CPU tensors

use tracing::debug;

use crate::error::{Error, Result};
use crate::ops::RowOutput;
#[cfg(feature = "rayon")]
use crate::runtime::ClientConfig;
use crate::runtime::shape_ops;
use crate::tensor::{Shape, Tensor};

/// Per-field stacked outputs of a batch mapping
///
/// Allocated from the probe row; every later row is written into the
/// outputs through [`Tensor::assign`], which rejects any shape or dtype that
/// differs from the probe.
struct BatchOutputs {
    fields: Vec<Tensor>,
}

impl BatchOutputs {
    /// Allocate one `[rows, field...]` output per probe field and store the probe at row 0
    fn from_probe<O: RowOutput>(rows: usize, probe: Vec<Tensor>, parallel: bool) -> Result<Self> {
        let fields = probe
            .iter()
            .map(|field| Tensor::zeros(&Shape::batched(rows, field.shape()), field.dtype()))
            .collect();

        debug!(
            rows,
            fields = probe.len(),
            kind = ?O::KIND,
            names = ?O::field_names(),
            shapes = ?probe.iter().map(|f| f.shape().to_vec()).collect::<Vec<_>>(),
            dtypes = ?probe.iter().map(Tensor::dtype).collect::<Vec<_>>(),
            parallel,
            "allocated batch outputs"
        );

        let mut outputs = Self { fields };
        outputs.write_row(0, probe)?;
        Ok(outputs)
    }

    fn write_row(&mut self, index: usize, row: Vec<Tensor>) -> Result<()> {
        if row.len() != self.fields.len() {
            return Err(Error::FieldCountMismatch {
                expected: self.fields.len(),
                got: row.len(),
            });
        }
        for (out, field) in self.fields.iter_mut().zip(&row) {
            out.assign(index, field)?;
        }
        Ok(())
    }

    fn finish<O: RowOutput>(self) -> Result<O> {
        O::from_fields(self.fields)
    }
}

/// Evaluate the probe row and allocate the outputs
fn probe<O, F>(f: &mut F, arr: &Tensor, parallel: bool) -> Result<(usize, BatchOutputs)>
where
    O: RowOutput,
    F: FnMut(&Tensor) -> Result<O>,
{
    let rows = shape_ops::validate_batch_input(arr)?;
    let first = f(&arr.select(0, 0)?)?.into_fields();
    let outputs = BatchOutputs::from_probe::<O>(rows, first, parallel)?;
    Ok((rows, outputs))
}

/// Map `f` over the rows of `arr` sequentially
pub fn apply_rows_impl<O, F>(mut f: F, arr: &Tensor) -> Result<O>
where
    O: RowOutput,
    F: FnMut(&Tensor) -> Result<O>,
{
    let (rows, mut outputs) = probe(&mut f, arr, false)?;
    for index in 1..rows {
        let row = f(&arr.select(0, index)?)?.into_fields();
        outputs.write_row(index, row)?;
    }
    outputs.finish()
}

/// Map `f` over the rows of `arr`, evaluating rows after the probe in parallel chunks
#[cfg(feature = "rayon")]
pub fn par_apply_rows_impl<O, F>(config: &ClientConfig, f: F, arr: &Tensor) -> Result<O>
where
    O: RowOutput + Send,
    F: Fn(&Tensor) -> Result<O> + Sync,
{
    use rayon::prelude::*;

    let rows = shape_ops::validate_batch_input(arr)?;
    if rows < config.min_parallel_rows {
        return apply_rows_impl(f, arr);
    }

    let (rows, mut outputs) = probe(&mut &f, arr, true)?;
    let chunk_rows = config.chunk_rows.max(1);

    let mut start = 1;
    while start < rows {
        let end = (start + chunk_rows).min(rows);
        let results: Vec<Result<Vec<Tensor>>> = (start..end)
            .into_par_iter()
            .map(|index| Ok(f(&arr.select(0, index)?)?.into_fields()))
            .collect();

        for (index, row) in (start..end).zip(results) {
            outputs.write_row(index, row?)?;
        }
        start = end;
    }

    outputs.finish()
}
