//! Operation traits.
//!
//! Implementations live in the client-specific module ([`super::cpu`]).

mod batch;
mod resample;
mod shape;

pub use batch::BatchOps;
pub use resample::ResampleOps;
pub use shape::ShapeOps;
