//! Profile screen state
//!
//! Three independent form groups plus the feedback shown above them.

use profile_model::{
    PasswordChangeRequest, PasswordField, PersonalInfo, ProfileInfo,
};

use super::errors::ProfileError;
use super::photo::ProfileImagePreview;
use super::secure_credential::SecureCredential;

/// Lifecycle of one screen instance. There is no way back from `LoadError`;
/// only a fresh screen retries the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenPhase {
    #[default]
    Loading,
    Ready,
    LoadError,
}

/// Password form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    old_password: SecureCredential,
    new_password: SecureCredential,
    confirm_new_password: SecureCredential,
}

impl PasswordForm {
    pub fn get(&self, field: PasswordField) -> &str {
        self.slot(field).as_str()
    }

    pub fn set(&mut self, field: PasswordField, value: String) {
        let slot = match field {
            PasswordField::OldPassword => &mut self.old_password,
            PasswordField::NewPassword => &mut self.new_password,
            PasswordField::ConfirmNewPassword => &mut self.confirm_new_password,
        };
        slot.replace(value);
    }

    pub fn clear(&mut self) {
        self.old_password.clear();
        self.new_password.clear();
        self.confirm_new_password.clear();
    }

    pub fn is_empty(&self) -> bool {
        PasswordField::ALL
            .into_iter()
            .all(|field| self.slot(field).is_empty())
    }

    /// Build the wire request, or fail when the confirmation differs.
    pub fn to_request(&self) -> Result<PasswordChangeRequest, ProfileError> {
        if self.new_password != self.confirm_new_password {
            return Err(ProfileError::PasswordMismatch);
        }
        Ok(PasswordChangeRequest::new(
            self.old_password.as_str(),
            self.new_password.as_str(),
        ))
    }

    fn slot(&self, field: PasswordField) -> &SecureCredential {
        match field {
            PasswordField::OldPassword => &self.old_password,
            PasswordField::NewPassword => &self.new_password,
            PasswordField::ConfirmNewPassword => &self.confirm_new_password,
        }
    }
}

/// Transient success notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessToast {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileScreenState {
    pub phase: ScreenPhase,

    // Form groups
    pub personal: PersonalInfo,
    pub profile: ProfileInfo,
    pub password: PasswordForm,
    pub photo: Option<ProfileImagePreview>,

    // In-flight writes
    pub personal_saving: bool,
    pub profile_saving: bool,
    pub password_saving: bool,

    // Feedback; at most one of these is shown
    pub error: Option<ProfileError>,
    pub success: Option<SuccessToast>,
    next_toast_id: u64,
}

impl ProfileScreenState {
    pub fn is_loading(&self) -> bool {
        self.phase == ScreenPhase::Loading
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn show_error(&mut self, error: ProfileError) {
        self.success = None;
        self.error = Some(error);
    }

    /// Show a success toast and return its id for the dismiss timer.
    pub fn show_success(&mut self, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        self.error = None;
        self.success = Some(SuccessToast {
            id: self.next_toast_id,
            message: message.into(),
        });
        self.next_toast_id
    }

    /// Clear the toast if it is still the one with `id`.
    pub fn dismiss_success(&mut self, id: u64) -> bool {
        if self.success.as_ref().is_some_and(|toast| toast.id == id) {
            self.success = None;
            true
        } else {
            false
        }
    }
}
