//! Profile domain
//!
//! Handles the signed-in user's profile screen:
//! - Personal info: loaded on mount, editable, saved with `PUT /profile`
//! - Profile info: local secondary fields, saved on request
//! - Password: validated locally, changed with `PUT /profile/password`
//! - Photo: local avatar preview, never uploaded

pub mod commands;
pub mod errors;
pub mod messages;
pub mod photo;
pub mod secure_credential;
pub mod state;
pub mod update;

pub use commands::{CommandContext, ProfileCommand};
pub use errors::{ProfileError, UpdateTarget};
pub use messages::ProfileMessage;
pub use state::{PasswordForm, ProfileScreenState, ScreenPhase};
pub use update::ProfileUpdateResult;
