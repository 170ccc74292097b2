//! Tensor operations
//!
//! This module defines operation traits and the backend-independent pieces of
//! the copy/cast operation.
//!
//! # Design
//!
//! Operations are defined as traits that are implemented by runtime clients.
//!
//! ```text
//! CpuClient
//!   └── implements TypeConversionOps
//!         ├── to_copy_out   (cast into a caller-owned output)
//!         └── cast          (cast into a fresh output)
//! ```
//!
//! A `to_copy_out` call runs its stages strictly in order:
//!
//! 1. [`validate_to_copy_args`] - memory format, blocking mode, contiguity, dtypes
//! 2. [`resize_output`] - reconcile the output shape with the input shape
//! 3. the backend's cast kernel - convert and write every element
//!
//! Stages 1 and 2 fail before any element is written.

mod dispatch;
mod resize;
pub mod traits;
mod validate;

pub use resize::resize_output;
pub use traits::TypeConversionOps;
pub use validate::{
    check_blocking, check_contiguous, check_dtype_available, check_memory_format,
    validate_to_copy_args,
};
