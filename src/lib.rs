//! # tensorcast
//!
//! **Dtype-converting tensor copy for Rust.**
//!
//! tensorcast copies a tensor into a caller-provided output tensor, converting
//! every element to the output's dtype. The output's shape is reconciled with
//! the input's first, according to how the output was allocated.
//!
//! ## Features
//!
//! - **Full cast matrix**: every pair of f64, f32, f16, bf16, i64, i32, i16, i8,
//!   u8 and bool
//! - **Out-variant**: the caller owns the destination, the operation returns it
//! - **Shape dynamism**: static, bounded and unbounded outputs
//! - **Fail before write**: rejected calls leave the destination untouched
//!
//! ## Quick Start
//!
//! ```rust
//! use tensorcast::prelude::*;
//!
//! let client = CpuClient::new();
//! let src = Tensor::from_slice(&[1.7f32, -2.2, 0.0], &[3]);
//! let mut out = Tensor::zeros(&[3], DType::I32);
//!
//! client.to_copy_out(&src, false, None, &mut out)?;
//! assert_eq!(out.to_vec::<i32>(), vec![1, -2, 0]);
//! # Ok::<(), tensorcast::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded CPU kernels for large tensors
//! - `f16`: Half-precision floats (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::DType;
    pub use crate::error::{Error, Result};
    pub use crate::ops::TypeConversionOps;
    pub use crate::runtime::SupportedFeatures;
    pub use crate::runtime::cpu::CpuClient;
    pub use crate::tensor::{Layout, MemoryFormat, ShapeDynamism, Tensor};
}
