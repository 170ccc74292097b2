//! CPU kernel implementations
//!
//! Low-level compute kernels over contiguous storage. Kernels are generic over
//! element types and are selected at runtime with `dispatch_dtype!`.

pub mod cast;

pub use cast::cast_kernel;
