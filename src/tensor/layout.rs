//! Layout: shape, strides, and offset for tensor memory layout

use super::shape::{STACK_DIMS, Shape};
use super::strides::Strides;
use smallvec::SmallVec;
use std::fmt;

/// Layout describes the memory layout of a tensor
///
/// A tensor's elements live in a flat buffer, but not necessarily in
/// row-major order or starting at the beginning of it. The layout specifies
/// how to compute the storage index of any element given its indices.
///
/// Storage index of element at indices [i0, i1, ..., in]:
///   offset + i0 * strides[0] + i1 * strides[1] + ... + in * strides[n]
///
/// Narrowing, stepping and selecting only rewrite these three fields, which
/// is what makes truncation and decimation zero-copy.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    /// Shape: size along each dimension
    shape: Shape,
    /// Strides: offset (in elements) between consecutive elements along each dimension
    strides: Strides,
    /// Offset: starting element index in the underlying storage
    offset: usize,
}

impl Layout {
    /// Create a new contiguous (row-major/C-order) layout from a shape
    ///
    /// # Example
    /// ```
    /// use echolect::tensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3, 4]);
    /// assert_eq!(layout.shape(), &[2, 3, 4]);
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        Self {
            shape: Shape::from(shape),
            strides: Strides::contiguous(shape),
            offset: 0,
        }
    }

    /// Create a layout with explicit shape, strides, and offset
    pub fn new(shape: Shape, strides: Strides, offset: usize) -> Self {
        debug_assert_eq!(shape.ndim(), strides.len());
        Self {
            shape,
            strides,
            offset,
        }
    }

    /// Create a scalar (0-dimensional) layout
    pub fn scalar() -> Self {
        Self {
            shape: Shape::new(),
            strides: Strides::new(),
            offset: 0,
        }
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Get the offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.elem_count()
    }

    /// Check if the tensor is a scalar (0 dimensions)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.ndim() == 0
    }

    /// Check if memory is contiguous (row-major order, starting at offset 0)
    pub fn is_contiguous(&self) -> bool {
        self.offset == 0 && self.is_dense()
    }

    /// Check if the viewed elements form one gap-free row-major run,
    /// regardless of where that run starts
    pub fn is_dense(&self) -> bool {
        if self.elem_count() <= 1 {
            return true;
        }
        // Size-1 dimensions never advance, so their stride is irrelevant
        let expected = Strides::contiguous(&self.shape);
        self.shape
            .iter()
            .zip(self.strides.iter().zip(expected.iter()))
            .all(|(&dim, (&got, &want))| dim == 1 || got == want)
    }

    /// Get size along a specific dimension
    ///
    /// Supports negative indexing: -1 is the last dimension
    pub fn dim(&self, d: isize) -> Option<usize> {
        let idx = self.normalize_dim(d)?;
        Some(self.shape[idx])
    }

    /// Normalize a dimension index (handle negative indices)
    pub fn normalize_dim(&self, d: isize) -> Option<usize> {
        let ndim = self.ndim() as isize;
        let idx = if d < 0 { ndim + d } else { d };
        if idx >= 0 && idx < ndim {
            Some(idx as usize)
        } else {
            None
        }
    }

    /// Compute the storage index for given indices
    pub fn index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.ndim() {
            return None;
        }

        for (idx, &dim) in indices.iter().zip(self.shape.iter()) {
            if *idx >= dim {
                return None;
            }
        }

        let mut linear = self.offset as isize;
        for (&idx, &stride) in indices.iter().zip(self.strides.iter()) {
            linear += idx as isize * stride;
        }

        Some(linear as usize)
    }

    /// Narrow one dimension to `length` elements starting at `start`
    ///
    /// Returns None if the dimension is invalid or the range exceeds it.
    pub fn narrow(&self, dim: usize, start: usize, length: usize) -> Option<Self> {
        let size = *self.shape.get(dim)?;
        if start.checked_add(length)? > size {
            return None;
        }

        let mut shape = self.shape.clone();
        shape.set(dim, length);
        let offset = if length == 0 {
            self.offset
        } else {
            self.shifted_offset(dim, start)
        };

        Some(Self::new(shape, self.strides.clone(), offset))
    }

    /// Keep every `step`-th element of one dimension, starting at `start`
    ///
    /// A `start` at or past the end of the dimension yields a length-0 view.
    /// Returns None if the dimension is invalid or `step` is zero.
    pub fn step(&self, dim: usize, start: usize, step: usize) -> Option<Self> {
        let size = *self.shape.get(dim)?;
        if step == 0 {
            return None;
        }

        let length = if start >= size {
            0
        } else {
            (size - start).div_ceil(step)
        };

        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        shape.set(dim, length);
        strides.set(dim, self.strides[dim] * step as isize);
        let offset = if length == 0 {
            self.offset
        } else {
            self.shifted_offset(dim, start)
        };

        Some(Self::new(shape, strides, offset))
    }

    /// Select a single index of one dimension, removing that dimension
    pub fn select(&self, dim: usize, index: usize) -> Option<Self> {
        let size = *self.shape.get(dim)?;
        if index >= size {
            return None;
        }

        let offset = self.shifted_offset(dim, index);
        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        shape.remove(dim);
        strides.remove(dim);

        Some(Self::new(shape, strides, offset))
    }

    fn shifted_offset(&self, dim: usize, index: usize) -> usize {
        (self.offset as isize + index as isize * self.strides[dim]) as usize
    }

    /// Storage indices of every element, in row-major logical order
    pub fn offsets(&self) -> Offsets<'_> {
        Offsets {
            layout: self,
            index: SmallVec::from_elem(0, self.ndim()),
            current: self.offset as isize,
            remaining: self.elem_count(),
        }
    }
}

/// Iterator over the storage indices addressed by a [`Layout`]
pub struct Offsets<'a> {
    layout: &'a Layout,
    index: SmallVec<[usize; STACK_DIMS]>,
    current: isize,
    remaining: usize,
}

impl Iterator for Offsets<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.current;

        // Increment indices (row-major order), carrying into outer dimensions
        let shape = self.layout.shape();
        let strides = self.layout.strides();
        for d in (0..shape.len()).rev() {
            self.index[d] += 1;
            self.current += strides[d];
            if self.index[d] < shape[d] {
                break;
            }
            self.current -= strides[d] * shape[d] as isize;
            self.index[d] = 0;
        }

        Some(current as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Offsets<'_> {}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, strides: {:?}, offset: {} }}",
            self.shape.as_slice(),
            self.strides.as_slice(),
            self.offset
        )
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.shape.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_layout() {
        let layout = Layout::contiguous(&[2, 3, 4]);
        assert_eq!(layout.shape(), &[2, 3, 4]);
        assert_eq!(layout.strides(), &[12, 4, 1]);
        assert_eq!(layout.elem_count(), 24);
        assert!(layout.is_contiguous());
    }

    #[test]
    fn test_scalar_layout() {
        let layout = Layout::scalar();
        assert!(layout.is_scalar());
        assert_eq!(layout.elem_count(), 1);
        assert!(layout.is_contiguous());
        assert_eq!(layout.offsets().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn test_normalize_dim() {
        let layout = Layout::contiguous(&[2, 3]);
        assert_eq!(layout.normalize_dim(-1), Some(1));
        assert_eq!(layout.normalize_dim(-2), Some(0));
        assert_eq!(layout.normalize_dim(2), None);
        assert_eq!(layout.normalize_dim(-3), None);
    }

    #[test]
    fn test_narrow() {
        let layout = Layout::contiguous(&[2, 5]);
        let narrowed = layout.narrow(1, 1, 3).unwrap();
        assert_eq!(narrowed.shape(), &[2, 3]);
        assert_eq!(narrowed.offset(), 1);
        assert!(!narrowed.is_dense());
        assert_eq!(narrowed.offsets().collect::<Vec<_>>(), [1, 2, 3, 6, 7, 8]);

        assert!(layout.narrow(1, 3, 3).is_none());
        assert!(layout.narrow(2, 0, 1).is_none());
    }

    #[test]
    fn test_narrow_leading_dim_is_dense() {
        let layout = Layout::contiguous(&[4, 3]);
        let narrowed = layout.narrow(0, 1, 2).unwrap();
        assert!(narrowed.is_dense());
        assert!(!narrowed.is_contiguous());
        assert_eq!(narrowed.offsets().collect::<Vec<_>>(), [3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_step() {
        let layout = Layout::contiguous(&[7]);
        let stepped = layout.step(0, 1, 3).unwrap();
        assert_eq!(stepped.shape(), &[2]);
        assert_eq!(stepped.strides(), &[3]);
        assert_eq!(stepped.offsets().collect::<Vec<_>>(), [1, 4]);

        let empty = layout.step(0, 9, 10).unwrap();
        assert_eq!(empty.shape(), &[0]);
        assert_eq!(empty.offsets().count(), 0);

        assert!(layout.step(0, 0, 0).is_none());
    }

    #[test]
    fn test_step_inner_dim() {
        let layout = Layout::contiguous(&[2, 4]);
        let stepped = layout.step(1, 1, 2).unwrap();
        assert_eq!(stepped.shape(), &[2, 2]);
        assert_eq!(stepped.offsets().collect::<Vec<_>>(), [1, 3, 5, 7]);
    }

    #[test]
    fn test_select() {
        let layout = Layout::contiguous(&[3, 4]);
        let row = layout.select(0, 2).unwrap();
        assert_eq!(row.shape(), &[4]);
        assert_eq!(row.offset(), 8);
        assert!(row.is_dense());

        let col = layout.select(1, 1).unwrap();
        assert_eq!(col.shape(), &[3]);
        assert_eq!(col.offsets().collect::<Vec<_>>(), [1, 5, 9]);

        assert!(layout.select(0, 3).is_none());
    }

    #[test]
    fn test_index() {
        let layout = Layout::contiguous(&[2, 3]);
        assert_eq!(layout.index(&[0, 0]), Some(0));
        assert_eq!(layout.index(&[0, 2]), Some(2));
        assert_eq!(layout.index(&[1, 0]), Some(3));
        assert_eq!(layout.index(&[1, 2]), Some(5));
        assert_eq!(layout.index(&[2, 0]), None); // Out of bounds
    }
}
