//! CPU implementation of filtering-utility operations.
//!
//! This module contains the operation trait implementations for the CPU client.
//! Each operation type has its own module.

pub mod batch;
pub mod resample;
pub mod shape;
