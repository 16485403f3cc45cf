//! Tensor types and operations
//!
//! This module provides the core `Tensor` type, an n-dimensional array of
//! samples held in shared host memory, together with the layout machinery
//! that lets truncation, decimation and row selection be zero-copy views.

mod core;
mod layout;
mod shape;
mod storage;
mod strides;

pub use core::Tensor;
pub use layout::{Layout, Offsets};
pub use shape::Shape;
pub use storage::Storage;
pub use strides::Strides;
