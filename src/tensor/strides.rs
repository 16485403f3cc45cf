//! Strides type: element offsets for tensor memory layout

use super::shape::STACK_DIMS;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// Per-dimension step between consecutive elements, in elements (not bytes)
///
/// Decimation multiplies one stride by the factor, so strides of a view are
/// generally not the row-major strides of its shape.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Strides(SmallVec<[isize; STACK_DIMS]>);

impl Strides {
    /// Strides of a 0-d tensor.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Row-major (C-order) strides for a shape.
    pub fn contiguous(shape: &[usize]) -> Self {
        let mut strides = SmallVec::from_elem(1isize, shape.len());
        for axis in (0..shape.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * shape[axis + 1] as isize;
        }
        Self(strides)
    }

    /// Remove stride at index.
    pub fn remove(&mut self, index: usize) -> isize {
        self.0.remove(index)
    }

    /// Replace one stride.
    pub fn set(&mut self, index: usize, stride: isize) {
        self.0[index] = stride;
    }

    /// View strides as a slice.
    pub fn as_slice(&self) -> &[isize] {
        self.0.as_slice()
    }
}

impl Deref for Strides {
    type Target = [isize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Strides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
