//! pictest
//!
//! A thin client for generating images from text prompts and validating them
//! against natural-language assertions via Bedrock-style inference endpoints.
//!
//! Three stateless components composed by sequential data passing:
//!
//! - [`ImageGenerator`]: builds a text-to-image payload, invokes the model,
//!   decodes the returned base64 image into raw bytes.
//! - [`ImageValidator`]: sends the image plus a structured evaluation prompt
//!   to a multimodal model, parses the free-text reply into a
//!   [`ValidationVerdict`], and gates the result on a confidence threshold.
//! - [`matcher`]: compares a verdict against a partial
//!   [`VerdictExpectation`] and produces pass/fail plus test-report messages.
//!
//! # Example
//!
//! ```rust,ignore
//! use pictest::{
//!     BedrockClient, ImageGenerator, ImageValidator, GenerationRequest,
//!     ValidationRequest, ImageSource, GenerationCapability, ValidationCapability,
//! };
//!
//! let client = BedrockClient::new("us-east-1");
//! let generator = ImageGenerator::new(client.clone());
//! let validator = ImageValidator::new(client);
//!
//! let image = generator
//!     .generate(&GenerationRequest::new(
//!         "an orange cat on a windowsill",
//!         "amazon.titan-image-generator-v2:0",
//!     ))
//!     .await?;
//!
//! let verdict = validator
//!     .validate(&ValidationRequest::new(
//!         ImageSource::bytes(image.image_bytes),
//!         "contains an orange cat, photo-realistic",
//!         "us.amazon.nova-pro-v1:0",
//!     ))
//!     .await?;
//!
//! pictest::assert_satisfies_image_assertions!(
//!     verdict,
//!     pictest::VerdictExpectation::new().assertions_met(true).min_score(7.0)
//! );
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod generator;
pub mod matcher;
pub mod traits;
pub mod types;
pub mod utils;
pub mod validator;

pub use client::BedrockClient;
pub use error::{Error, Result};
pub use generator::ImageGenerator;
pub use matcher::{MatchOutcome, match_verdict};
pub use traits::{GenerationCapability, ValidationCapability};
pub use types::{
    GenerationRequest, GenerationResult, ImageSource, QualityTier, Tone, ValidationRequest,
    ValidationVerdict, VerdictExpectation,
};
pub use validator::ImageValidator;
