//! Tensor types
//!
//! This module provides the `Tensor` type consumed by the cast kernels: a dense
//! host buffer of a single dtype plus its shape, layout, and shape dynamism.

mod core;
mod dynamism;
mod id;
mod layout;
mod memory_format;
mod shape;
mod storage;

pub use self::core::Tensor;
pub use dynamism::ShapeDynamism;
pub use id::TensorId;
pub use layout::{Layout, Strides};
pub use memory_format::MemoryFormat;
pub use shape::Shape;
pub use storage::Storage;
