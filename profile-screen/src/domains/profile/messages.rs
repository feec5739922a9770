//! Profile screen messages
//!
//! User input and async results, all routed through
//! [`update::handle_message`](super::update::handle_message).

use profile_model::{PasswordField, PersonalField, PersonalInfo, ProfileField};

use super::errors::ProfileError;
use super::photo::ProfileImagePreview;

#[derive(Debug, Clone)]
pub enum ProfileMessage {
    // Initial load
    /// Result of `GET /profile`
    ProfileLoaded(Result<PersonalInfo, ProfileError>),

    // Field editing
    UpdatePersonalField(PersonalField, String),
    UpdateProfileField(ProfileField, String),
    UpdatePasswordField(PasswordField, String),

    // Photo
    /// Open the image picker
    PickPhoto,
    PhotoPicked(Result<ProfileImagePreview, ProfileError>),
    PhotoPickCancelled,

    // Actions
    SubmitPersonalInfo,
    PersonalInfoSaved(Result<(), ProfileError>),
    SubmitProfileInfo,
    ProfileInfoSaved(Result<(), ProfileError>),
    SubmitPasswordChange,
    PasswordChangeResult(Result<(), ProfileError>),

    // Feedback
    /// Auto-dismiss timer for the toast with this id fired
    DismissSuccess(u64),
}

impl ProfileMessage {
    /// Returns a display string with password values masked
    pub fn sanitized_display(&self) -> String {
        match self {
            Self::UpdatePasswordField(field, _) => {
                format!("UpdatePasswordField({:?}, ***)", field)
            }
            Self::PhotoPicked(Ok(preview)) => {
                format!("PhotoPicked(Ok({}))", preview.mime_type())
            }
            _ => format!("{:?}", self),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ProfileLoaded(_) => "Profile::ProfileLoaded",
            Self::UpdatePersonalField(..) => "Profile::UpdatePersonalField",
            Self::UpdateProfileField(..) => "Profile::UpdateProfileField",
            Self::UpdatePasswordField(..) => "Profile::UpdatePasswordField",
            Self::PickPhoto => "Profile::PickPhoto",
            Self::PhotoPicked(_) => "Profile::PhotoPicked",
            Self::PhotoPickCancelled => "Profile::PhotoPickCancelled",
            Self::SubmitPersonalInfo => "Profile::SubmitPersonalInfo",
            Self::PersonalInfoSaved(_) => "Profile::PersonalInfoSaved",
            Self::SubmitProfileInfo => "Profile::SubmitProfileInfo",
            Self::ProfileInfoSaved(_) => "Profile::ProfileInfoSaved",
            Self::SubmitPasswordChange => "Profile::SubmitPasswordChange",
            Self::PasswordChangeResult(_) => "Profile::PasswordChangeResult",
            Self::DismissSuccess(_) => "Profile::DismissSuccess",
        }
    }
}
