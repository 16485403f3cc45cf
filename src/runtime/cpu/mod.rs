//! CPU runtime implementation
//!
//! Operations run synchronously on the calling thread. With the `rayon`
//! feature, batch mapping can additionally evaluate rows on the rayon pool.

mod client;
pub(crate) mod helpers;

pub use crate::tensor::Tensor;
pub use client::CpuClient;
