//! Storage: host memory with Arc-based sharing

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Storage for tensor data
///
/// Storage wraps a flat element buffer with reference counting, enabling
/// zero-copy views (truncation, decimation, row selection) that share it.
///
/// The buffer is backed by `u64` words so that every element type, including
/// `Complex128`, can be reinterpreted in place without alignment faults.
///
/// Writes go through copy-on-write: a buffer that is shared with a live view
/// is duplicated before it is modified, so views never observe later writes.
#[derive(Clone)]
pub struct Storage {
    inner: Arc<StorageInner>,
}

#[derive(Clone)]
struct StorageInner {
    /// Element bytes, padded up to a whole number of words
    words: Vec<u64>,
    /// Number of elements (not bytes)
    len: usize,
    /// Element type
    dtype: DType,
}

impl StorageInner {
    fn zeroed(len: usize, dtype: DType) -> Self {
        let size_bytes = len * dtype.size_in_bytes();
        Self {
            words: vec![0u64; size_bytes.div_ceil(8)],
            len,
            dtype,
        }
    }

    fn size_in_bytes(&self) -> usize {
        self.len * self.dtype.size_in_bytes()
    }

    fn bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.words)[..self.size_in_bytes()]
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        let size = self.size_in_bytes();
        &mut bytemuck::cast_slice_mut::<u64, u8>(&mut self.words)[..size]
    }
}

impl Storage {
    /// Allocate zero-filled storage for `len` elements of `dtype`
    ///
    /// Every supported dtype uses the all-zero bit pattern for its zero value.
    pub fn zeroed(len: usize, dtype: DType) -> Self {
        Self {
            inner: Arc::new(StorageInner::zeroed(len, dtype)),
        }
    }

    /// Create storage from existing data with inferred dtype
    pub fn from_slice<T: Element>(data: &[T]) -> Self {
        let mut inner = StorageInner::zeroed(data.len(), T::DTYPE);
        inner.bytes_mut().copy_from_slice(bytemuck::cast_slice(data));
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Create storage from raw bytes with explicit dtype
    ///
    /// The byte count must be a whole number of elements.
    pub fn from_bytes(data: &[u8], dtype: DType) -> Result<Self> {
        let elem_size = dtype.size_in_bytes();
        if data.len() % elem_size != 0 {
            return Err(Error::invalid_argument(
                "data",
                format!(
                    "{} bytes is not a whole number of {} elements",
                    data.len(),
                    dtype
                ),
            ));
        }

        let mut inner = StorageInner::zeroed(data.len() / elem_size, dtype);
        inner.bytes_mut().copy_from_slice(data);
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len
    }

    /// Whether the storage holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len == 0
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.inner.dtype
    }

    /// Size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.inner.size_in_bytes()
    }

    /// Raw element bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.bytes()
    }

    /// Typed view of all elements
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        if T::DTYPE != self.dtype() {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype(),
                rhs: T::DTYPE,
            });
        }
        Ok(bytemuck::cast_slice(self.as_bytes()))
    }

    /// Mutable element bytes, duplicating the buffer first if it is shared
    pub(crate) fn make_mut_bytes(&mut self) -> &mut [u8] {
        Arc::make_mut(&mut self.inner).bytes_mut()
    }

    /// Whether two storages are the same buffer
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of tensors currently sharing this buffer
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.len())
            .field("dtype", &self.dtype())
            .field("ref_count", &self.ref_count())
            .finish()
    }
}
