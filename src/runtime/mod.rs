//! Runtime backends for tensor computation
//!
//! A runtime client owns the configuration an operation needs at dispatch
//! time and implements the operation traits from [`crate::ops`].
//!
//! # Architecture
//!
//! ```text
//! CpuClient
//! ├── SupportedFeatures (output resize, strided layouts)
//! ├── parallel threshold (element count where Rayon takes over)
//! └── kernels (typed loops over contiguous storage)
//! ```

pub mod cpu;
mod features;

pub use features::SupportedFeatures;
