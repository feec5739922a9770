//! Secondary profile fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldParseError;

/// Locally edited profile details.
///
/// These are never part of the `/profile` read response; they start empty
/// and are only sent by an explicit profile-info save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub phone: String,
    pub occupation: String,
    pub bio: String,
    pub status: String,
    pub secondary_email: String,
}

/// Identifies one member of [`ProfileInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Phone,
    Occupation,
    Bio,
    Status,
    SecondaryEmail,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Phone,
        ProfileField::Occupation,
        ProfileField::Bio,
        ProfileField::Status,
        ProfileField::SecondaryEmail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Occupation => "occupation",
            Self::Bio => "bio",
            Self::Status => "status",
            Self::SecondaryEmail => "secondaryEmail",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Occupation => "Occupation",
            Self::Bio => "Bio",
            Self::Status => "Status",
            Self::SecondaryEmail => "Secondary Email",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldParseError::new("profile", s))
    }
}

impl ProfileInfo {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Phone => &self.phone,
            ProfileField::Occupation => &self.occupation,
            ProfileField::Bio => &self.bio,
            ProfileField::Status => &self.status,
            ProfileField::SecondaryEmail => &self.secondary_email,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Phone => &mut self.phone,
            ProfileField::Occupation => &mut self.occupation,
            ProfileField::Bio => &mut self.bio,
            ProfileField::Status => &mut self.status,
            ProfileField::SecondaryEmail => &mut self.secondary_email,
        };
        *slot = value.into();
    }
}
