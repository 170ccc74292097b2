//! Shape dynamism policies for output tensors

use std::fmt;

/// How an output tensor's shape may change while an operation writes to it
///
/// The policy is fixed when the tensor is created. It is consulted by
/// [`resize_output`](crate::ops::resize_output) before any element is written.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeDynamism {
    /// Shape is fixed; the required output shape must match exactly
    #[default]
    Static,
    /// The allocated shape is an upper bound; the logical shape may shrink to
    /// any shape that fits inside it without reallocating
    DynamicBound,
    /// Shape and capacity may change freely, if the runtime supports resizing
    DynamicUnbound,
}

impl ShapeDynamism {
    /// Short name for display
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::DynamicBound => "dynamic_bound",
            Self::DynamicUnbound => "dynamic_unbound",
        }
    }
}

impl fmt::Display for ShapeDynamism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
