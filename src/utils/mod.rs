//! Internal helpers.

pub mod json;
pub mod media;
