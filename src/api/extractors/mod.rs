//! Custom request extractors.

mod validated_json;

pub use validated_json::{require_text, validation_error, ValidatedJson};
