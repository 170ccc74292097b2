//! CPU runtime implementation
//!
//! The CPU runtime works on host memory and provides the reference
//! implementation of every operation.
//!
//! # Contiguous Tensors
//!
//! Kernels walk storage in row-major order and require both operands to be
//! contiguous from offset 0. Strided tensors are rejected before any data is
//! read.
//!
//! # Parallelism
//!
//! With the `rayon` feature, element loops of at least
//! [`DEFAULT_PARALLEL_THRESHOLD`] elements are split into chunks and run on
//! the Rayon pool. The threshold is configurable per client.

mod client;
pub(crate) mod kernels;
mod ops;

pub use client::{CpuClient, DEFAULT_PARALLEL_THRESHOLD};
