//! Runtime capability flags

/// Optional capabilities of a runtime build
///
/// Operations consult these flags instead of cargo features when a capability
/// is a property of the deployment rather than of the compiled code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SupportedFeatures {
    /// Outputs with [`ShapeDynamism::DynamicUnbound`](crate::tensor::ShapeDynamism)
    /// may be reallocated to a new shape
    pub output_resize: bool,
    /// Kernels accept strided (non-contiguous) inputs and outputs
    ///
    /// No CPU kernel sets this; tensors must be contiguous.
    pub non_contiguous_layouts: bool,
}

impl SupportedFeatures {
    /// Enable or disable unbound output resizing
    pub fn with_output_resize(mut self, enabled: bool) -> Self {
        self.output_resize = enabled;
        self
    }

    /// Enable or disable strided layouts
    pub fn with_non_contiguous_layouts(mut self, enabled: bool) -> Self {
        self.non_contiguous_layouts = enabled;
        self
    }
}

impl Default for SupportedFeatures {
    fn default() -> Self {
        Self {
            output_resize: true,
            non_contiguous_layouts: false,
        }
    }
}
