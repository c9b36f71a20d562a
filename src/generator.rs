//! Text-to-image generation.

use async_trait::async_trait;
use base64::Engine;

use crate::client::BedrockClient;
use crate::error::{Error, Result};
use crate::traits::GenerationCapability;
use crate::types::{GenerationRequest, GenerationResult};

/// Generates images from text prompts via the `invoke` endpoint.
///
/// Stateless beyond its held client configuration; one request maps to one
/// outbound call with no retries or partial results.
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    client: BedrockClient,
}

impl ImageGenerator {
    pub fn new(client: BedrockClient) -> Self {
        Self { client }
    }

    /// Build the text-to-image payload for the generation model.
    fn build_payload(request: &GenerationRequest) -> serde_json::Value {
        let mut config = serde_json::json!({
            "numberOfImages": 1,
            "width": request.width,
            "height": request.height,
            "quality": request.quality.as_str(),
            "cfgScale": request.cfg_scale,
        });
        if let Some(seed) = request.seed {
            config["seed"] = serde_json::json!(seed);
        }

        serde_json::json!({
            "taskType": "TEXT_IMAGE",
            "textToImageParams": { "text": request.prompt },
            "imageGenerationConfig": config,
        })
    }

    /// Pull the first base64 image out of the invoke response body.
    fn first_image(body: &serde_json::Value) -> Result<&str> {
        let images = body
            .get("images")
            .and_then(|v| v.as_array())
            .ok_or_else(|| Error::Generation("no images returned in response".to_string()))?;

        let first = images
            .first()
            .ok_or_else(|| Error::Generation("no images returned in response".to_string()))?;

        match first.as_str() {
            Some(data) if !data.is_empty() => Ok(data),
            _ => Err(Error::Generation(
                "first image entry is empty".to_string(),
            )),
        }
    }

    async fn generate_inner(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let payload = Self::build_payload(request);

        // Region override applies to this single call only; no persistent
        // multi-region client pool.
        let body = match request.region.as_deref() {
            Some(region) if region != self.client.region() => {
                tracing::debug!(region = %region, "using region-scoped client for generation");
                self.client
                    .scoped_to_region(region)
                    .invoke(&request.model_id, &payload)
                    .await?
            }
            _ => self.client.invoke(&request.model_id, &payload).await?,
        };

        let image_base64 = Self::first_image(&body)?.to_string();
        let image_bytes = base64::engine::general_purpose::STANDARD
            .decode(&image_base64)
            .map_err(|e| Error::Generation(format!("failed to decode image data: {e}")))?;

        tracing::debug!(
            model = %request.model_id,
            bytes = image_bytes.len(),
            "image generated"
        );

        Ok(GenerationResult {
            image_bytes,
            image_base64,
            model_id: request.model_id.clone(),
        })
    }
}

#[async_trait]
impl GenerationCapability for ImageGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        // Callers handle one error kind for generation regardless of the
        // underlying cause (network, auth, malformed response).
        self.generate_inner(request)
            .await
            .map_err(Error::into_generation)
    }
}
