//! Assertion-based image validation.
//!
//! Sends an image plus a structured evaluation prompt to a multimodal model
//! via the `converse` endpoint, parses the free-text reply into a structured
//! verdict, and applies the request's confidence threshold.

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::BedrockClient;
use crate::error::{Error, Result};
use crate::traits::ValidationCapability;
use crate::types::{Tone, ValidationRequest, ValidationVerdict};
use crate::utils::json::extract_json_object;
use crate::utils::media::detect_image_format;

/// Validates images against natural-language assertions.
#[derive(Debug, Clone)]
pub struct ImageValidator {
    client: BedrockClient,
}

/// The verdict fields as the model reports them, before threshold gating.
/// Fields the model omits fall back to their defaults; a missing boolean or
/// score can only make the verdict stricter, never looser.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVerdict {
    #[serde(default)]
    assertions_met: bool,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    tone: String,
    #[serde(default)]
    explanation: String,
}

/// Build the evaluation prompt embedding the caller's assertion verbatim.
///
/// The prompt pins down the reply shape (exactly one JSON object), the
/// scoring bands, and the closed tone vocabulary so the model cannot invent
/// new categories.
fn build_evaluation_prompt(assertion: &str) -> String {
    format!(
        "You are evaluating whether a generated image satisfies an assertion.\n\
         Respond with exactly one JSON object and nothing else, with these fields:\n\
         - \"assertionsMet\" (boolean): true only if ALL key details of the assertion are visually present in the image.\n\
         - \"score\" (number from 0 to 10): how well the image matches the assertion.\n\
         - \"tone\" (string): the stylistic tone of the image.\n\
         - \"explanation\" (string): a short justification of your verdict.\n\
         \n\
         Scoring guidelines:\n\
         - 10: perfect match.\n\
         - 7-9: strong match with minor discrepancies.\n\
         - 4-6: partial match with significant gaps.\n\
         - 0-3: little or no match.\n\
         \n\
         Valid tone values (choose exactly one):\n\
         - \"dreamy\": a soft, ethereal, or fantastical rendering.\n\
         - \"photo-realistic\": looks like an unedited photograph of a real scene.\n\
         - \"black-and-white\": rendered in grayscale or monochrome, without color.\n\
         \n\
         Assertion to evaluate:\n\
         {assertion}"
    )
}

/// Extract the first text content block from a converse reply body.
fn extract_reply_text(body: &serde_json::Value) -> Option<&str> {
    body.get("output")?
        .get("message")?
        .get("content")?
        .as_array()?
        .iter()
        .find_map(|part| part.get("text").and_then(|v| v.as_str()))
}

/// Parse a model reply into a threshold-gated verdict.
///
/// Pure function of its inputs: an identical reply always produces an
/// identical verdict.
fn parse_verdict(reply_text: &str, confidence_threshold: f64) -> Result<ValidationVerdict> {
    let span = extract_json_object(reply_text).ok_or_else(|| {
        Error::Validation("no JSON object found in model reply".to_string())
    })?;

    let raw: RawVerdict = serde_json::from_str(&span)
        .map_err(|e| Error::Validation(format!("malformed JSON verdict: {e}")))?;

    let tone = Tone::from(raw.tone);
    if let Tone::Other(value) = &tone {
        tracing::warn!(tone = %value, "model reported a tone outside the closed set");
    }

    // The model's self-reported boolean alone is never trusted: the score
    // must also clear the confidence threshold.
    Ok(ValidationVerdict {
        assertions_met: raw.assertions_met && raw.score >= confidence_threshold,
        score: raw.score,
        tone,
        explanation: raw.explanation,
    })
}

impl ImageValidator {
    pub fn new(client: BedrockClient) -> Self {
        Self { client }
    }

    async fn validate_inner(&self, request: &ValidationRequest) -> Result<ValidationVerdict> {
        if request.assertion.trim().is_empty() {
            return Err(Error::InvalidInput(
                "assertion text must not be empty".to_string(),
            ));
        }
        let image_bytes = request.image.to_bytes()?;
        let format = detect_image_format(&image_bytes);

        let prompt = build_evaluation_prompt(&request.assertion);
        let message = serde_json::json!({
            "role": "user",
            "content": [
                { "text": prompt },
                {
                    "image": {
                        "format": format,
                        "source": { "bytes": request.image.to_base64() },
                    }
                },
            ],
        });
        let inference_config = serde_json::json!({
            "temperature": request.temperature,
            "topP": request.top_p,
            "maxTokens": request.max_tokens,
        });

        let body = self
            .client
            .converse(&request.model_id, vec![message], inference_config)
            .await?;

        let reply_text = extract_reply_text(&body).ok_or_else(|| {
            Error::Validation("model reply contained no text content".to_string())
        })?;

        let verdict = parse_verdict(reply_text, request.confidence_threshold)?;
        tracing::debug!(
            model = %request.model_id,
            score = verdict.score,
            assertions_met = verdict.assertions_met,
            "image validated"
        );
        Ok(verdict)
    }
}

#[async_trait]
impl ValidationCapability for ImageValidator {
    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationVerdict> {
        self.validate_inner(request).await
    }
}
