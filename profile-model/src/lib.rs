//! Wire models shared between the profile screen and the profile API.
//!
//! Every form on the screen has a plain data type (what goes over the wire)
//! and a field enum identifying its members by their wire name. Updating a
//! form goes through `set(field, value)` so only known fields can be touched.

#![allow(missing_docs)]

pub mod error;
pub mod password;
pub mod personal;
pub mod profile;

pub use error::{ErrorBody, FieldParseError};
pub use password::{PasswordChangeRequest, PasswordField};
pub use personal::{PersonalField, PersonalInfo};
pub use profile::{ProfileField, ProfileInfo};
