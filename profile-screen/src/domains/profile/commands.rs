//! Side effects requested by the update handlers
//!
//! Handlers stay synchronous and only describe what should happen next.
//! [`execute`] performs one command and turns its outcome into the message
//! that feeds back into the screen; this is also the single place where
//! transport failures are collapsed into [`ProfileError`].

use std::sync::Arc;
use std::time::Duration;

use iced::Task;
use log::error;
use profile_model::{PasswordChangeRequest, PersonalInfo, ProfileInfo};

use super::errors::{ProfileError, UpdateTarget};
use super::messages::ProfileMessage;
use super::photo;
use crate::infra::services::ProfileService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileCommand {
    LoadProfile,
    SavePersonalInfo(PersonalInfo),
    SaveProfileInfo(ProfileInfo),
    ChangePassword(PasswordChangeRequest),
    PickPhoto,
    /// Dismiss the toast with this id once the toast duration elapsed.
    DismissSuccessLater(u64),
}

impl ProfileCommand {
    /// Whether running this command issues an HTTP request.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::LoadProfile
                | Self::SavePersonalInfo(_)
                | Self::SaveProfileInfo(_)
                | Self::ChangePassword(_)
        )
    }
}

/// Everything a command needs to run.
#[derive(Clone)]
pub struct CommandContext {
    pub service: Arc<dyn ProfileService>,
    pub toast_duration: Duration,
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("toast_duration", &self.toast_duration)
            .finish_non_exhaustive()
    }
}

impl CommandContext {
    pub fn new(
        service: Arc<dyn ProfileService>,
        toast_duration: Duration,
    ) -> Self {
        Self {
            service,
            toast_duration,
        }
    }
}

/// Run `command` to completion.
pub async fn execute(
    command: ProfileCommand,
    context: CommandContext,
) -> ProfileMessage {
    match command {
        ProfileCommand::LoadProfile => {
            let result = context.service.fetch_profile().await.map_err(|err| {
                error!("[Profile] Error loading profile: {}", err);
                ProfileError::Load
            });
            ProfileMessage::ProfileLoaded(result)
        }
        ProfileCommand::SavePersonalInfo(info) => {
            let result =
                context.service.update_personal_info(info).await.map_err(|err| {
                    error!("[Profile] Personal info update failed: {}", err);
                    ProfileError::Update(UpdateTarget::PersonalInfo)
                });
            ProfileMessage::PersonalInfoSaved(result)
        }
        ProfileCommand::SaveProfileInfo(info) => {
            let result =
                context.service.update_profile_info(info).await.map_err(|err| {
                    error!("[Profile] Profile info update failed: {}", err);
                    ProfileError::Update(UpdateTarget::ProfileInfo)
                });
            ProfileMessage::ProfileInfoSaved(result)
        }
        ProfileCommand::ChangePassword(request) => {
            let result =
                context.service.change_password(request).await.map_err(|err| {
                    error!("[Profile] Password update failed: {}", err);
                    ProfileError::PasswordRejected(
                        err.server_message().map(str::to_owned),
                    )
                });
            ProfileMessage::PasswordChangeResult(result)
        }
        ProfileCommand::PickPhoto => match photo::pick_photo().await {
            None => ProfileMessage::PhotoPickCancelled,
            Some(result) => ProfileMessage::PhotoPicked(result.map_err(|err| {
                error!("[Profile] Photo preview failed: {}", err);
                ProfileError::Photo(err.to_string())
            })),
        },
        ProfileCommand::DismissSuccessLater(id) => {
            tokio::time::sleep(context.toast_duration).await;
            ProfileMessage::DismissSuccess(id)
        }
    }
}

/// Wrap `command` in an iced task.
pub fn into_task(
    command: ProfileCommand,
    context: CommandContext,
) -> Task<ProfileMessage> {
    Task::perform(execute(command, context), std::convert::identity)
}
