//! Shared fixtures for the profile screen integration tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use profile_model::{PasswordChangeRequest, PersonalInfo, ProfileInfo};
use profile_screen::domains::profile::commands::{self, CommandContext};
use profile_screen::domains::profile::update::{self, ProfileUpdateResult};
use profile_screen::domains::profile::{ProfileMessage, ProfileScreenState};
use profile_screen::infra::api_client::{ApiError, ApiResult};
use profile_screen::infra::services::ProfileService;
use reqwest::StatusCode;

/// One recorded call against the fake service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchProfile,
    UpdatePersonalInfo(PersonalInfo),
    UpdateProfileInfo(ProfileInfo),
    ChangePassword(PasswordChangeRequest),
}

/// How the fake answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Ok,
    Fail {
        status: StatusCode,
        message: Option<String>,
    },
}

impl Reply {
    pub fn fail(status: StatusCode) -> Self {
        Self::Fail {
            status,
            message: None,
        }
    }

    pub fn fail_with(status: StatusCode, message: &str) -> Self {
        Self::Fail {
            status,
            message: Some(message.to_string()),
        }
    }

    fn into_result(self) -> ApiResult<()> {
        match self {
            Self::Ok => Ok(()),
            Self::Fail { status, message } => {
                Err(ApiError::Status { status, message })
            }
        }
    }
}

pub struct RecordingProfileService {
    calls: Mutex<Vec<Call>>,
    profile: Option<PersonalInfo>,
    writes: Mutex<Reply>,
}

impl RecordingProfileService {
    /// Loads answer with `profile`; writes succeed.
    pub fn returning(profile: PersonalInfo) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            profile: Some(profile),
            writes: Mutex::new(Reply::Ok),
        })
    }

    /// Loads fail with a 500; writes succeed.
    pub fn failing_load() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            profile: None,
            writes: Mutex::new(Reply::Ok),
        })
    }

    pub fn set_write_reply(&self, reply: Reply) {
        *self.writes.lock().unwrap() = reply;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_reply(&self) -> ApiResult<()> {
        self.writes.lock().unwrap().clone().into_result()
    }
}

#[async_trait]
impl ProfileService for RecordingProfileService {
    async fn fetch_profile(&self) -> ApiResult<PersonalInfo> {
        self.record(Call::FetchProfile);
        self.profile.clone().ok_or(ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        })
    }

    async fn update_personal_info(&self, info: PersonalInfo) -> ApiResult<()> {
        self.record(Call::UpdatePersonalInfo(info));
        self.write_reply()
    }

    async fn update_profile_info(&self, info: ProfileInfo) -> ApiResult<()> {
        self.record(Call::UpdateProfileInfo(info));
        self.write_reply()
    }

    async fn change_password(
        &self,
        request: PasswordChangeRequest,
    ) -> ApiResult<()> {
        self.record(Call::ChangePassword(request));
        self.write_reply()
    }
}

pub fn context(service: &Arc<RecordingProfileService>) -> CommandContext {
    CommandContext::new(service.clone(), Duration::from_millis(1))
}

pub fn ann_lee() -> PersonalInfo {
    PersonalInfo {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        email: "ann@x.com".into(),
        username: "annlee".into(),
    }
}

/// Run every network command in `result` and feed the outcomes back in,
/// until nothing network-bound is left. Timers and dialogs are skipped.
pub async fn settle(
    state: &mut ProfileScreenState,
    result: ProfileUpdateResult,
    context: &CommandContext,
) {
    let mut pending: VecDeque<_> = result.commands.into();
    while let Some(command) = pending.pop_front() {
        if !command.is_network() {
            continue;
        }
        let message = commands::execute(command, context.clone()).await;
        pending.extend(update::handle_message(state, message).commands);
    }
}

/// Boot a screen and let its initial load finish.
pub async fn booted(context: &CommandContext) -> ProfileScreenState {
    let (mut state, result) = update::boot();
    settle(&mut state, result, context).await;
    state
}

/// Send `message` and settle the resulting commands.
pub async fn send(
    state: &mut ProfileScreenState,
    message: ProfileMessage,
    context: &CommandContext,
) {
    let result = update::handle_message(state, message);
    settle(state, result, context).await;
}
