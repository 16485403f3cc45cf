//! Core Tensor type

use super::{Layout, Storage};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array of samples
///
/// `Tensor` is the sequence type every operation in echolect consumes and
/// produces. It consists of:
/// - **Storage**: Reference-counted host memory
/// - **Layout**: Shape, strides, and offset defining the view into storage
/// - **DType**: Element type (determined at runtime)
///
/// # Zero-Copy Views
///
/// `narrow`, `slice_step` and `select` create tensors that share the same
/// underlying storage through a modified layout. Truncation and decimation
/// are built on them and therefore never copy sample data.
///
/// # Example
///
/// ```
/// use echolect::tensor::Tensor;
///
/// let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
/// let row = a.select(0, 1).unwrap(); // Zero-copy, shares storage with a
/// assert_eq!(row.to_vec::<f32>(), [3.0, 4.0]);
/// ```
#[derive(Clone)]
pub struct Tensor {
    /// Host memory
    storage: Storage,
    /// Shape, strides, offset
    layout: Layout,
}

impl Tensor {
    /// Create a tensor from storage and layout
    pub fn from_parts(storage: Storage, layout: Layout) -> Self {
        Self { storage, layout }
    }

    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape).expect("Tensor::from_slice failed")
    }

    /// Create a tensor from a slice of data (fallible version)
    pub fn try_from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Self {
            storage: Storage::from_slice(data),
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a tensor from raw element bytes with an explicit dtype
    ///
    /// This is the way to build tensors of dtypes without an [`Element`]
    /// mapping, such as `DType::Bool`.
    pub fn from_bytes(data: &[u8], shape: &[usize], dtype: DType) -> Result<Self> {
        let storage = Storage::from_bytes(data, dtype)?;
        let expected_len: usize = shape.iter().product();
        if storage.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![storage.len()],
            });
        }

        Ok(Self {
            storage,
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a 0-dimensional tensor holding one value
    pub fn scalar<T: Element>(value: T) -> Self {
        Self {
            storage: Storage::from_slice(&[value]),
            layout: Layout::scalar(),
        }
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        let len: usize = shape.iter().product();
        Self {
            storage: Storage::zeroed(len, dtype),
            layout: Layout::contiguous(shape),
        }
    }

    // ===== Accessors =====

    /// Get the storage
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Check if the tensor is contiguous in memory
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Check if this is a scalar (0-dimensional tensor)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.is_scalar()
    }

    /// Get size along a dimension (supports negative indexing)
    pub fn size(&self, dim: isize) -> Option<usize> {
        self.layout.dim(dim)
    }

    /// Whether this tensor is a view into the same buffer as `other`
    #[inline]
    pub fn shares_storage(&self, other: &Tensor) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    fn normalize(&self, dim: isize) -> Result<usize> {
        self.layout
            .normalize_dim(dim)
            .ok_or(Error::InvalidDimension {
                dim,
                ndim: self.ndim(),
            })
    }

    fn with_layout(&self, layout: Layout) -> Self {
        Self {
            storage: self.storage.clone(),
            layout,
        }
    }

    // ===== View Operations (Zero-Copy) =====

    /// Narrow a dimension (zero-copy slice)
    ///
    /// Returns a view of the tensor narrowed to `length` elements starting at
    /// `start` along a single dimension.
    ///
    /// # Example
    ///
    /// ```
    /// # use echolect::tensor::Tensor;
    /// let tensor = Tensor::zeros(&[4, 5, 6], echolect::dtype::DType::F32);
    /// let narrowed = tensor.narrow(1, 1, 3).unwrap();
    /// assert_eq!(narrowed.shape(), &[4, 3, 6]);
    /// ```
    pub fn narrow(&self, dim: isize, start: usize, length: usize) -> Result<Self> {
        let dim_idx = self.normalize(dim)?;
        let layout = self
            .layout
            .narrow(dim_idx, start, length)
            .ok_or_else(|| Error::ShapeMismatch {
                expected: vec![self.shape()[dim_idx]],
                got: vec![start, length],
            })?;
        Ok(self.with_layout(layout))
    }

    /// Keep every `step`-th element along a dimension, starting at `start` (zero-copy)
    ///
    /// Equivalent to the slice `start::step`. A `start` at or past the end of
    /// the dimension yields a view of length 0 along it.
    pub fn slice_step(&self, dim: isize, start: usize, step: usize) -> Result<Self> {
        let dim_idx = self.normalize(dim)?;
        let layout = self
            .layout
            .step(dim_idx, start, step)
            .ok_or_else(|| Error::invalid_argument("step", "step must be at least 1"))?;
        Ok(self.with_layout(layout))
    }

    /// Select one index along a dimension, removing it (zero-copy)
    pub fn select(&self, dim: isize, index: usize) -> Result<Self> {
        let dim_idx = self.normalize(dim)?;
        let size = self.shape()[dim_idx];
        let layout = self
            .layout
            .select(dim_idx, index)
            .ok_or(Error::IndexOutOfBounds { index, size })?;
        Ok(self.with_layout(layout))
    }

    /// Make tensor contiguous (copy if needed)
    ///
    /// If the tensor is already contiguous, returns a view (zero-copy).
    /// Otherwise, allocates new storage and gathers the viewed elements into it.
    pub fn contiguous(&self) -> Self {
        if self.is_contiguous() {
            return self.clone();
        }

        let mut out = Self::zeros(self.shape(), self.dtype());
        let elem_size = self.dtype().size_in_bytes();
        let dst = out.storage.make_mut_bytes();
        copy_elements(
            self.storage.as_bytes(),
            &self.layout,
            dst,
            &Layout::contiguous(self.shape()),
            elem_size,
        );
        out
    }

    // ===== In-place Writes =====

    /// Write `src` into the elements of `self` addressed by `region`
    ///
    /// `region` must be a layout over this tensor's storage (for example a
    /// narrowed or stepped view of `self.layout()`); `src` must match it in
    /// shape and dtype.
    pub(crate) fn write_region(&mut self, region: &Layout, src: &Tensor) -> Result<()> {
        if src.dtype() != self.dtype() {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype(),
                rhs: src.dtype(),
            });
        }
        if src.shape() != region.shape() {
            return Err(Error::shape_mismatch(region.shape(), src.shape()));
        }

        let elem_size = self.dtype().size_in_bytes();
        let dst = self.storage.make_mut_bytes();
        copy_elements(src.storage.as_bytes(), &src.layout, dst, region, elem_size);
        Ok(())
    }

    /// Assign `src` to position `index` of the leading dimension
    ///
    /// This is `self[index] = src`: `src` must have exactly the shape
    /// `self.shape()[1..]` and the same dtype. Nothing is broadcast or cast.
    pub fn assign(&mut self, index: usize, src: &Tensor) -> Result<()> {
        if self.ndim() == 0 {
            return Err(Error::InvalidDimension { dim: 0, ndim: 0 });
        }
        let size = self.shape()[0];
        let region = self
            .layout
            .select(0, index)
            .ok_or(Error::IndexOutOfBounds { index, size })?;
        self.write_region(&region, src)
    }

    // ===== Data Access =====

    /// Copy tensor data to a Vec in logical row-major order
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the tensor's dtype. For a fallible
    /// alternative, use [`Self::try_to_vec`].
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        self.try_to_vec().expect("Tensor::to_vec failed")
    }

    /// Copy tensor data to a Vec in logical row-major order (fallible version)
    pub fn try_to_vec<T: Element>(&self) -> Result<Vec<T>> {
        let data = self.storage.as_slice::<T>()?;
        if self.layout.is_dense() {
            let start = self.layout.offset();
            return Ok(data[start..start + self.numel()].to_vec());
        }
        Ok(self.layout.offsets().map(|i| data[i]).collect())
    }

    /// Extract the value of a single-element tensor
    pub fn item<T: Element>(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(Error::ShapeMismatch {
                expected: vec![1],
                got: self.shape().to_vec(),
            });
        }
        let data = self.storage.as_slice::<T>()?;
        Ok(data[self.layout.offset()])
    }
}

/// Copy every element addressed by `src_layout` to the matching position of
/// `dst_layout`, both walked in row-major logical order.
fn copy_elements(
    src: &[u8],
    src_layout: &Layout,
    dst: &mut [u8],
    dst_layout: &Layout,
    elem_size: usize,
) {
    debug_assert_eq!(src_layout.shape(), dst_layout.shape());

    if src_layout.is_dense() && dst_layout.is_dense() {
        let n = src_layout.elem_count() * elem_size;
        let s = src_layout.offset() * elem_size;
        let d = dst_layout.offset() * elem_size;
        dst[d..d + n].copy_from_slice(&src[s..s + n]);
        return;
    }

    for (s, d) in src_layout.offsets().zip(dst_layout.offsets()) {
        let (s, d) = (s * elem_size, d * elem_size);
        dst[d..d + elem_size].copy_from_slice(&src[s..s + elem_size]);
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("contiguous", &self.is_contiguous())
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({:?}, dtype={})", self.shape(), self.dtype())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::Complex64;

    #[test]
    fn test_from_slice() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let tensor = Tensor::from_slice(&data, &[2, 3]);

        assert_eq!(tensor.shape(), &[2, 3]);
        assert_eq!(tensor.dtype(), DType::F32);
        assert!(tensor.is_contiguous());
        assert_eq!(tensor.numel(), 6);

        let result: Vec<f32> = tensor.to_vec();
        assert_eq!(result, data);
    }

    #[test]
    fn test_try_from_slice_shape_mismatch() {
        let result = Tensor::try_from_slice(&[1.0f64, 2.0, 3.0], &[2, 2]);
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_zeros() {
        let tensor = Tensor::zeros(&[2, 3], DType::Complex64);
        assert_eq!(tensor.dtype(), DType::Complex64);
        assert_eq!(tensor.to_vec::<Complex64>(), vec![Complex64::ZERO; 6]);
    }

    #[test]
    fn test_scalar_item() {
        let tensor = Tensor::scalar(42i16);
        assert!(tensor.is_scalar());
        assert_eq!(tensor.item::<i16>().unwrap(), 42);

        let pair = Tensor::from_slice(&[1.0f32, 2.0], &[2]);
        assert!(pair.item::<f32>().is_err());
    }

    #[test]
    fn test_narrow_shares_storage() {
        let tensor = Tensor::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]);
        let narrowed = tensor.narrow(-1, 0, 2).unwrap();
        assert!(narrowed.shares_storage(&tensor));
        assert_eq!(narrowed.to_vec::<i32>(), [1, 2, 4, 5]);
    }

    #[test]
    fn test_slice_step_and_contiguous() {
        let tensor = Tensor::from_slice(&[0u8, 1, 2, 3, 4, 5, 6, 7], &[2, 4]);
        let stepped = tensor.slice_step(1, 1, 2).unwrap();
        assert_eq!(stepped.shape(), &[2, 2]);
        assert!(!stepped.is_contiguous());

        let packed = stepped.contiguous();
        assert!(packed.is_contiguous());
        assert!(!packed.shares_storage(&tensor));
        assert_eq!(packed.to_vec::<u8>(), [1, 3, 5, 7]);
    }

    #[test]
    fn test_select_out_of_bounds() {
        let tensor = Tensor::zeros(&[2, 3], DType::F64);
        assert!(matches!(
            tensor.select(0, 2),
            Err(Error::IndexOutOfBounds { index: 2, size: 2 })
        ));
        assert!(matches!(
            tensor.select(3, 0),
            Err(Error::InvalidDimension { dim: 3, ndim: 2 })
        ));
    }

    #[test]
    fn test_assign_row() {
        let mut out = Tensor::zeros(&[3, 2], DType::F64);
        out.assign(1, &Tensor::from_slice(&[7.0f64, 8.0], &[2])).unwrap();
        assert_eq!(out.to_vec::<f64>(), [0.0, 0.0, 7.0, 8.0, 0.0, 0.0]);
    }

    #[test]
    fn test_assign_from_strided_view() {
        let src = Tensor::from_slice(&[1i64, 2, 3, 4], &[4]);
        let odd = src.slice_step(0, 1, 2).unwrap();
        let mut out = Tensor::zeros(&[2, 2], DType::I64);
        out.assign(0, &odd).unwrap();
        assert_eq!(out.to_vec::<i64>(), [2, 4, 0, 0]);
    }

    #[test]
    fn test_assign_rejects_mismatch() {
        let mut out = Tensor::zeros(&[2, 3], DType::F32);

        let wrong_shape = Tensor::from_slice(&[1.0f32, 2.0], &[2]);
        assert!(matches!(
            out.assign(0, &wrong_shape),
            Err(Error::ShapeMismatch { .. })
        ));

        let wrong_dtype = Tensor::from_slice(&[1.0f64, 2.0, 3.0], &[3]);
        assert!(matches!(
            out.assign(0, &wrong_dtype),
            Err(Error::DTypeMismatch {
                lhs: DType::F32,
                rhs: DType::F64
            })
        ));

        let row = Tensor::from_slice(&[1.0f32, 2.0, 3.0], &[3]);
        assert!(matches!(
            out.assign(2, &row),
            Err(Error::IndexOutOfBounds { index: 2, size: 2 })
        ));
    }

    #[test]
    fn test_assign_does_not_leak_into_views() {
        let mut out = Tensor::zeros(&[2, 2], DType::U16);
        let view = out.select(0, 0).unwrap();
        out.assign(0, &Tensor::from_slice(&[5u16, 6], &[2])).unwrap();
        assert_eq!(view.to_vec::<u16>(), [0, 0]);
        assert_eq!(out.to_vec::<u16>(), [5, 6, 0, 0]);
    }

    #[test]
    fn test_bool_from_bytes() {
        let mask = Tensor::from_bytes(&[1, 0, 1, 1], &[2, 2], DType::Bool).unwrap();
        assert_eq!(mask.dtype(), DType::Bool);
        assert!(Tensor::from_bytes(&[1, 0, 1], &[2, 2], DType::Bool).is_err());
    }
}
