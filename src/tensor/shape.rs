//! Shape type: dimensions of a tensor

use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// Stack allocation threshold for dimensions
/// Sample batches rarely exceed 4 dimensions, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Shape type: dimensions of a tensor
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// Create an empty (scalar) shape.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Build the shape `[rows, inner...]` used for batched outputs.
    pub fn batched(rows: usize, inner: &[usize]) -> Self {
        let mut dims = SmallVec::with_capacity(inner.len() + 1);
        dims.push(rows);
        dims.extend_from_slice(inner);
        Self(dims)
    }

    /// Remove dimension at index.
    pub fn remove(&mut self, index: usize) -> usize {
        self.0.remove(index)
    }

    /// Replace the size of one dimension.
    pub fn set(&mut self, index: usize, dim: usize) {
        self.0[index] = dim;
    }

    /// View shape as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of dimensions in this shape.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements described by this shape.
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.0.iter().product()
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batched() {
        let shape = Shape::batched(4, &[3, 2]);
        assert_eq!(shape.as_slice(), &[4, 3, 2]);
        assert_eq!(shape.elem_count(), 24);

        let scalar_rows = Shape::batched(4, &[]);
        assert_eq!(scalar_rows.as_slice(), &[4]);
    }

    #[test]
    fn test_scalar_shape() {
        let shape = Shape::new();
        assert_eq!(shape.ndim(), 0);
        assert_eq!(shape.elem_count(), 1);
    }
}
