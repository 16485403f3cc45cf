//! Execution runtime for echolect operations
//!
//! Operations are defined as traits in [`crate::ops`] and implemented by a
//! client. The client carries the execution settings ([`ClientConfig`]) that
//! an operation may consult; inputs and outputs are plain [`Tensor`]s.
//!
//! ```text
//! CpuClient
//! ├── ClientConfig (parallel chunking)
//! └── implements ShapeOps, ResampleOps, BatchOps
//! ```
//!
//! [`Tensor`]: crate::tensor::Tensor

mod config;
pub mod cpu;
pub mod shape_ops;

pub use config::{
    ClientConfig, DEFAULT_CHUNK_ROWS, DEFAULT_MIN_PARALLEL_ROWS, ENV_CHUNK_ROWS,
    ENV_MIN_PARALLEL_ROWS,
};
pub use cpu::CpuClient;
