//! Capability traits.
//!
//! The generator and validator are exposed behind small async traits so test
//! code can substitute its own implementations (e.g. a canned validator in a
//! suite that should not hit the network).

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GenerationRequest, GenerationResult, ValidationRequest, ValidationVerdict};

/// Text-to-image generation.
#[async_trait]
pub trait GenerationCapability: Send + Sync {
    /// Generate a single image from the request's prompt and parameters.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult>;
}

/// Assertion-based image validation.
#[async_trait]
pub trait ValidationCapability: Send + Sync {
    /// Validate an image against a natural-language assertion and return a
    /// threshold-gated verdict.
    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationVerdict>;
}
