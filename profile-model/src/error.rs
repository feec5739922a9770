use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error payload returned by the profile API on non-2xx responses.
///
/// Only `message` is read; anything else in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Raised when a field name does not belong to the form it was looked up in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {form} field: {name}")]
pub struct FieldParseError {
    pub form: &'static str,
    pub name: String,
}

impl FieldParseError {
    pub(crate) fn new(form: &'static str, name: &str) -> Self {
        Self {
            form,
            name: name.to_string(),
        }
    }
}
