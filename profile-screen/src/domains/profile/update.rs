//! Profile screen update handlers
//!
//! Pure state transitions. Anything asynchronous is returned as a
//! [`ProfileCommand`] for the caller to run.

use log::{debug, info, warn};
use profile_model::{
    PasswordField, PersonalField, PersonalInfo, ProfileField,
};

use super::commands::ProfileCommand;
use super::errors::ProfileError;
use super::messages::ProfileMessage;
use super::photo::ProfileImagePreview;
use super::state::{ProfileScreenState, ScreenPhase};

pub const PERSONAL_INFO_SAVED: &str = "Personal info updated successfully!";
pub const PROFILE_INFO_SAVED: &str = "Profile info updated successfully!";
pub const PASSWORD_UPDATED: &str = "Password updated successfully!";

/// Commands produced by one update.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdateResult {
    pub commands: Vec<ProfileCommand>,
}

impl ProfileUpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn command(command: ProfileCommand) -> Self {
        Self {
            commands: vec![command],
        }
    }
}

/// Fresh screen plus the one load it issues on mount.
pub fn boot() -> (ProfileScreenState, ProfileUpdateResult) {
    (
        ProfileScreenState::default(),
        ProfileUpdateResult::command(ProfileCommand::LoadProfile),
    )
}

/// Main message handler for the profile screen
pub fn handle_message(
    state: &mut ProfileScreenState,
    message: ProfileMessage,
) -> ProfileUpdateResult {
    debug!("[Profile] {}", message.sanitized_display());

    match message {
        ProfileMessage::ProfileLoaded(result) => {
            handle_profile_loaded(state, result)
        }
        ProfileMessage::UpdatePersonalField(field, value) => {
            handle_update_personal_field(state, field, value)
        }
        ProfileMessage::UpdateProfileField(field, value) => {
            handle_update_profile_field(state, field, value)
        }
        ProfileMessage::UpdatePasswordField(field, value) => {
            handle_update_password_field(state, field, value)
        }
        ProfileMessage::PickPhoto => {
            ProfileUpdateResult::command(ProfileCommand::PickPhoto)
        }
        ProfileMessage::PhotoPicked(result) => {
            handle_photo_picked(state, result)
        }
        ProfileMessage::PhotoPickCancelled => ProfileUpdateResult::none(),
        ProfileMessage::SubmitPersonalInfo => {
            handle_submit_personal_info(state)
        }
        ProfileMessage::PersonalInfoSaved(result) => {
            handle_personal_info_saved(state, result)
        }
        ProfileMessage::SubmitProfileInfo => handle_submit_profile_info(state),
        ProfileMessage::ProfileInfoSaved(result) => {
            handle_profile_info_saved(state, result)
        }
        ProfileMessage::SubmitPasswordChange => {
            handle_submit_password_change(state)
        }
        ProfileMessage::PasswordChangeResult(result) => {
            handle_password_change_result(state, result)
        }
        ProfileMessage::DismissSuccess(id) => {
            state.dismiss_success(id);
            ProfileUpdateResult::none()
        }
    }
}

/// Handle the result of the initial profile fetch
pub fn handle_profile_loaded(
    state: &mut ProfileScreenState,
    result: Result<PersonalInfo, ProfileError>,
) -> ProfileUpdateResult {
    if state.phase != ScreenPhase::Loading {
        warn!("[Profile] Ignoring profile load result outside of Loading");
        return ProfileUpdateResult::none();
    }

    match result {
        Ok(info) => {
            state.personal = info;
            state.phase = ScreenPhase::Ready;
        }
        Err(error) => {
            state.phase = ScreenPhase::LoadError;
            state.show_error(error);
        }
    }
    ProfileUpdateResult::none()
}

pub fn handle_update_personal_field(
    state: &mut ProfileScreenState,
    field: PersonalField,
    value: String,
) -> ProfileUpdateResult {
    state.personal.set(field, value);
    ProfileUpdateResult::none()
}

pub fn handle_update_profile_field(
    state: &mut ProfileScreenState,
    field: ProfileField,
    value: String,
) -> ProfileUpdateResult {
    state.profile.set(field, value);
    ProfileUpdateResult::none()
}

pub fn handle_update_password_field(
    state: &mut ProfileScreenState,
    field: PasswordField,
    value: String,
) -> ProfileUpdateResult {
    state.password.set(field, value);
    ProfileUpdateResult::none()
}

fn handle_photo_picked(
    state: &mut ProfileScreenState,
    result: Result<ProfileImagePreview, ProfileError>,
) -> ProfileUpdateResult {
    match result {
        Ok(preview) => state.photo = Some(preview),
        Err(error) => state.show_error(error),
    }
    ProfileUpdateResult::none()
}

/// Handle submit personal info
pub fn handle_submit_personal_info(
    state: &mut ProfileScreenState,
) -> ProfileUpdateResult {
    if state.is_loading() {
        debug!("[Profile] Personal info submit ignored while loading");
        return ProfileUpdateResult::none();
    }

    state.personal_saving = true;
    ProfileUpdateResult::command(ProfileCommand::SavePersonalInfo(
        state.personal.clone(),
    ))
}

/// Handle personal info save result. The form keeps its values either way.
pub fn handle_personal_info_saved(
    state: &mut ProfileScreenState,
    result: Result<(), ProfileError>,
) -> ProfileUpdateResult {
    state.personal_saving = false;
    finish_write(state, result, PERSONAL_INFO_SAVED)
}

/// Handle submit profile info
pub fn handle_submit_profile_info(
    state: &mut ProfileScreenState,
) -> ProfileUpdateResult {
    if state.is_loading() {
        debug!("[Profile] Profile info submit ignored while loading");
        return ProfileUpdateResult::none();
    }

    state.profile_saving = true;
    ProfileUpdateResult::command(ProfileCommand::SaveProfileInfo(
        state.profile.clone(),
    ))
}

pub fn handle_profile_info_saved(
    state: &mut ProfileScreenState,
    result: Result<(), ProfileError>,
) -> ProfileUpdateResult {
    state.profile_saving = false;
    finish_write(state, result, PROFILE_INFO_SAVED)
}

/// Handle submit password change
///
/// A mismatched confirmation is reported locally and nothing is sent.
pub fn handle_submit_password_change(
    state: &mut ProfileScreenState,
) -> ProfileUpdateResult {
    if state.is_loading() {
        debug!("[Profile] Password submit ignored while loading");
        return ProfileUpdateResult::none();
    }

    match state.password.to_request() {
        Ok(request) => {
            state.password_saving = true;
            ProfileUpdateResult::command(ProfileCommand::ChangePassword(
                request,
            ))
        }
        Err(error) => {
            if error.is_validation() {
                debug!("[Profile] Password change not sent: {}", error);
            }
            state.show_error(error);
            ProfileUpdateResult::none()
        }
    }
}

/// Handle password change result
pub fn handle_password_change_result(
    state: &mut ProfileScreenState,
    result: Result<(), ProfileError>,
) -> ProfileUpdateResult {
    state.password_saving = false;
    if result.is_ok() {
        state.password.clear();
    }
    finish_write(state, result, PASSWORD_UPDATED)
}

fn finish_write(
    state: &mut ProfileScreenState,
    result: Result<(), ProfileError>,
    success_message: &str,
) -> ProfileUpdateResult {
    match result {
        Ok(()) => {
            info!("[Profile] {}", success_message);
            let id = state.show_success(success_message);
            ProfileUpdateResult::command(ProfileCommand::DismissSuccessLater(
                id,
            ))
        }
        Err(error) => {
            state.show_error(error);
            ProfileUpdateResult::none()
        }
    }
}
