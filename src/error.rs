//! Error types for tensorcast

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using tensorcast's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a cast
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Tensor is not contiguous when contiguous memory is required
    #[error("Operation requires contiguous tensor for '{arg}'")]
    NotContiguous {
        /// The argument holding the non-contiguous tensor
        arg: &'static str,
    },

    /// Shape mismatch between the required and the available output shape
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Required shape
        expected: Vec<usize>,
        /// Shape the output actually has (or is bounded by)
        got: Vec<usize>,
    },

    /// The output must be reallocated but the runtime cannot resize outputs
    #[error("Output resize not supported: cannot resize {from:?} to {to:?}")]
    ResizeNotSupported {
        /// Current output shape
        from: Vec<usize>,
        /// Requested output shape
        to: Vec<usize>,
    },

    /// Typed access with an element type that does not match the storage
    #[error("DType mismatch: expected {expected:?}, got {got:?}")]
    DTypeMismatch {
        /// DType of the storage
        expected: DType,
        /// DType that was requested
        got: DType,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// DType needs a cargo feature this build was compiled without
    #[error("DType {dtype:?} requires the '{feature}' feature")]
    FeatureRequired {
        /// The dtype that was requested
        dtype: DType,
        /// The cargo feature that enables it
        feature: &'static str,
    },
}

/// Coarse error category.
///
/// Both `InvalidArgument` and `ShapeMismatch` abort a cast before any element
/// is written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad memory format, non-blocking request, or unsupported layout
    InvalidArgument,
    /// Output shape cannot be reconciled with the input shape
    ShapeMismatch,
    /// Element type problem (unsupported, feature-gated, or mismatched)
    DType,
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } | Self::NotContiguous { .. } => ErrorKind::InvalidArgument,
            Self::ShapeMismatch { .. } | Self::ResizeNotSupported { .. } => ErrorKind::ShapeMismatch,
            Self::DTypeMismatch { .. }
            | Self::UnsupportedDType { .. }
            | Self::FeatureRequired { .. } => ErrorKind::DType,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            Error::invalid_argument("non_blocking", "x").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::NotContiguous { arg: "out" }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::shape_mismatch(&[2, 3], &[3, 2]).kind(),
            ErrorKind::ShapeMismatch
        );
        assert_eq!(
            Error::ResizeNotSupported {
                from: vec![1, 1],
                to: vec![2, 3],
            }
            .kind(),
            ErrorKind::ShapeMismatch
        );
        assert_eq!(
            Error::unsupported_dtype(DType::Bool, "dispatch").kind(),
            ErrorKind::DType
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::shape_mismatch(&[3, 1, 1, 2], &[3, 2, 1, 1]);
        assert_eq!(
            err.to_string(),
            "Shape mismatch: expected [3, 1, 1, 2], got [3, 2, 1, 1]"
        );
        let err = Error::invalid_argument("memory_format", "only contiguous is supported");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'memory_format': only contiguous is supported"
        );
    }
}
