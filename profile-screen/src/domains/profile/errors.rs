//! User-facing profile screen errors
//!
//! Lower-level failures (`ApiError`, `PhotoError`) are collapsed into these
//! at the command boundary. The `Display` text is exactly what the screen
//! shows.

use std::fmt;

use thiserror::Error;

/// Which write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTarget {
    PersonalInfo,
    ProfileInfo,
}

impl fmt::Display for UpdateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PersonalInfo => f.write_str("personal info"),
            Self::ProfileInfo => f.write_str("profile info"),
        }
    }
}

pub const PASSWORD_UPDATE_FALLBACK: &str = "Failed to update password.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Initial fetch failed, whatever the cause.
    #[error("Failed to load profile.")]
    Load,

    /// A profile or personal info write failed.
    #[error("Failed to update {0}.")]
    Update(UpdateTarget),

    /// Password write failed; carries the server's message when it sent one.
    #[error("{}", .0.as_deref().unwrap_or(PASSWORD_UPDATE_FALLBACK))]
    PasswordRejected(Option<String>),

    /// New password and confirmation differ. No request was sent.
    #[error("New passwords do not match.")]
    PasswordMismatch,

    /// The picked photo could not be previewed.
    #[error("{0}")]
    Photo(String),
}

impl ProfileError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::PasswordMismatch)
    }
}
