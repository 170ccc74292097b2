//! Operation traits implemented by runtime clients.

mod type_conversion;

pub use type_conversion::TypeConversionOps;
