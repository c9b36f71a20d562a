//! Image generation request and result types.

use serde::{Deserialize, Serialize};

/// Quality tier for image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Standard,
    Premium,
}

impl QualityTier {
    /// Wire value expected by the image generation endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }
}

/// A single text-to-image generation request.
///
/// Immutable once constructed; it exists only for the duration of one
/// `generate` call.
///
/// # Example
///
/// ```rust,ignore
/// let request = GenerationRequest::new("an orange cat on a windowsill", "amazon.titan-image-generator-v2:0")
///     .with_size(512, 512)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Text prompt describing the image.
    pub prompt: String,
    /// Model identifier to invoke.
    pub model_id: String,
    /// Region override for this request. When it differs from the client's
    /// configured region, a region-scoped client is used for the single call.
    pub region: Option<String>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Quality tier.
    pub quality: QualityTier,
    /// Guidance scale (1.0 - 10.0).
    pub cfg_scale: f64,
    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl GenerationRequest {
    /// Create a request with the default parameters: 1024x1024, premium
    /// quality, cfg scale 8.0, no seed.
    pub fn new(prompt: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model_id: model_id.into(),
            region: None,
            width: 1024,
            height: 1024,
            quality: QualityTier::Premium,
            cfg_scale: 8.0,
            seed: None,
        }
    }

    /// Target a specific region for this request only.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the output dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the quality tier.
    pub fn with_quality(mut self, quality: QualityTier) -> Self {
        self.quality = quality;
        self
    }

    /// Set the guidance scale.
    pub fn with_cfg_scale(mut self, cfg_scale: f64) -> Self {
        self.cfg_scale = cfg_scale;
        self
    }

    /// Set a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A successfully generated image, available in both raw and base64 form.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Decoded image bytes.
    pub image_bytes: Vec<u8>,
    /// The base64 text form as returned by the model.
    pub image_base64: String,
    /// The model that produced the image.
    pub model_id: String,
}
