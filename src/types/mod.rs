//! Request, response, and verdict types.

mod generation;
mod validation;

pub use generation::{GenerationRequest, GenerationResult, QualityTier};
pub use validation::{ImageSource, Tone, ValidationRequest, ValidationVerdict, VerdictExpectation};
