//! CPU client

use crate::runtime::SupportedFeatures;

/// Element count at which kernels switch to Rayon (overhead > benefit below)
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// CPU client for operation dispatch
#[derive(Clone, Debug)]
pub struct CpuClient {
    features: SupportedFeatures,
    parallel_threshold: usize,
}

impl CpuClient {
    /// Create a new CPU client with default features
    pub fn new() -> Self {
        Self::with_features(SupportedFeatures::default())
    }

    /// Create a CPU client with explicit runtime features
    pub fn with_features(features: SupportedFeatures) -> Self {
        Self {
            features,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the element count at which kernels run in parallel
    ///
    /// Has no effect without the `rayon` feature.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Runtime features this client was created with
    #[inline]
    pub fn features(&self) -> &SupportedFeatures {
        &self.features
    }

    /// Element count at which kernels run in parallel
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl Default for CpuClient {
    fn default() -> Self {
        Self::new()
    }
}
