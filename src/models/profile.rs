use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_string, UserId};

/// A user's profile row as stored by the backend.
///
/// Profiles are always loaded whole; a newer snapshot replaces an older one
/// outright rather than being merged field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user (the backend keys profiles by the auth user id)
    #[serde(rename = "id")]
    pub user_id: UserId,
    #[serde(
        rename = "firstName",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub first_name: String,
    #[serde(
        rename = "lastName",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub last_name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub username: String,
    /// Public URL of the avatar image (column is named `avatar`)
    #[serde(rename = "avatar", default)]
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Full name for the header, tolerating a missing first or last name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
