//! Image validation request, verdict, and expectation types.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Image data handed to validation - either raw bytes or the base64 text
/// form. Exactly one representation is carried; the "at least one image
/// form" rule of the source API is enforced by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// Base64-encoded image data.
    Base64 { data: String },
    /// Raw image bytes.
    #[serde(skip)]
    Bytes { data: Vec<u8> },
}

impl ImageSource {
    /// Create from a base64 string.
    pub fn base64(data: impl Into<String>) -> Self {
        Self::Base64 { data: data.into() }
    }

    /// Create from raw bytes.
    pub fn bytes(data: Vec<u8>) -> Self {
        Self::Bytes { data }
    }

    /// Resolve to raw bytes, decoding the base64 form when needed.
    ///
    /// An empty source or undecodable base64 text is a caller error and
    /// fails with [`Error::InvalidInput`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Self::Bytes { data } => {
                if data.is_empty() {
                    return Err(Error::InvalidInput("image bytes are empty".to_string()));
                }
                Ok(data.clone())
            }
            Self::Base64 { data } => {
                if data.trim().is_empty() {
                    return Err(Error::InvalidInput("base64 image data is empty".to_string()));
                }
                base64::engine::general_purpose::STANDARD
                    .decode(data.trim())
                    .map_err(|e| Error::InvalidInput(format!("invalid base64 image data: {e}")))
            }
        }
    }

    /// Resolve to the base64 text form, encoding raw bytes when needed.
    /// Surrounding whitespace in the text form is trimmed, matching what
    /// [`ImageSource::to_bytes`] decodes.
    pub fn to_base64(&self) -> String {
        match self {
            Self::Base64 { data } => data.trim().to_string(),
            Self::Bytes { data } => base64::engine::general_purpose::STANDARD.encode(data),
        }
    }
}

/// Stylistic classification of an image.
///
/// The evaluation prompt enumerates the closed set (dreamy, photo-realistic,
/// black-and-white), but a model reply outside that set is carried verbatim
/// in [`Tone::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    Dreamy,
    PhotoRealistic,
    BlackAndWhite,
    /// A tone string reported by the model that is not in the closed set.
    Other(String),
}

impl Tone {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dreamy => "dreamy",
            Self::PhotoRealistic => "photo-realistic",
            Self::BlackAndWhite => "black-and-white",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Tone {
    fn from(s: String) -> Self {
        match s.as_str() {
            "dreamy" => Self::Dreamy,
            "photo-realistic" => Self::PhotoRealistic,
            "black-and-white" => Self::BlackAndWhite,
            _ => Self::Other(s),
        }
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.as_str().to_string()
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single image validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// The image under validation.
    pub image: ImageSource,
    /// Natural-language assertion describing expected content/style.
    pub assertion: String,
    /// Multimodal model identifier to converse with.
    pub model_id: String,
    /// Minimum score (0-10) required, in addition to the model's own
    /// boolean, for the final verdict to count as met.
    pub confidence_threshold: f64,
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus sampling parameter.
    pub top_p: f64,
    /// Maximum tokens the model may produce for the verdict.
    pub max_tokens: u32,
}

impl ValidationRequest {
    /// Create a request with the default inference parameters: threshold 7,
    /// temperature 0.3, top_p 0.7, 500 output tokens.
    pub fn new(
        image: ImageSource,
        assertion: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            image,
            assertion: assertion.into(),
            model_id: model_id.into(),
            confidence_threshold: 7.0,
            temperature: 0.3,
            top_p: 0.7,
            max_tokens: 500,
        }
    }

    /// Set the confidence threshold (0-10).
    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the nucleus sampling parameter.
    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    /// Set the output token limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// The structured outcome of validating an image against an assertion.
///
/// Always derived from a model reply plus threshold logic, never constructed
/// from the model's self-report alone: `assertions_met` is true only if the
/// model said so AND its score cleared the request's confidence threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    /// Whether the assertion is considered met after threshold gating.
    pub assertions_met: bool,
    /// The model's match score, 0-10, passed through unmodified.
    pub score: f64,
    /// The model's tone classification, passed through unmodified.
    pub tone: Tone,
    /// The model's explanation of its verdict.
    pub explanation: String,
}

/// A partial expectation compared against a [`ValidationVerdict`].
///
/// Only present fields are checked: `assertions_met`, `tone`, and
/// `explanation` by exact equality, `score` as an inclusive lower bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictExpectation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertions_met: Option<bool>,
    /// Minimum score the verdict must reach (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl VerdictExpectation {
    /// An empty expectation that matches any verdict.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the gated `assertions_met` flag to equal `met`.
    pub fn assertions_met(mut self, met: bool) -> Self {
        self.assertions_met = Some(met);
        self
    }

    /// Expect the score to be at least `min` (inclusive).
    pub fn min_score(mut self, min: f64) -> Self {
        self.score = Some(min);
        self
    }

    /// Expect this exact tone.
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Expect this exact explanation text.
    pub fn explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}
