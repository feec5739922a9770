//! Password change payload.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::FieldParseError;

/// Body of `PUT /profile/password`.
///
/// Built from the password form once the confirmation matches. The
/// confirmation value is never part of this type. Both secrets are zeroed
/// on drop and redacted from `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    old_password: String,
    new_password: String,
}

impl PasswordChangeRequest {
    pub fn new(
        old_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        Self {
            old_password: old_password.into(),
            new_password: new_password.into(),
        }
    }

    pub fn old_password(&self) -> &str {
        &self.old_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

impl fmt::Debug for PasswordChangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChangeRequest")
            .field("old_password", &"***")
            .field("new_password", &"***")
            .finish()
    }
}

/// Identifies one input of the password form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordField {
    OldPassword,
    NewPassword,
    ConfirmNewPassword,
}

impl PasswordField {
    pub const ALL: [PasswordField; 3] = [
        PasswordField::OldPassword,
        PasswordField::NewPassword,
        PasswordField::ConfirmNewPassword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::OldPassword => "oldPassword",
            Self::NewPassword => "newPassword",
            Self::ConfirmNewPassword => "confirmNewPassword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OldPassword => "Current Password",
            Self::NewPassword => "New Password",
            Self::ConfirmNewPassword => "Confirm New Password",
        }
    }
}

impl fmt::Display for PasswordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PasswordField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldParseError::new("password", s))
    }
}
