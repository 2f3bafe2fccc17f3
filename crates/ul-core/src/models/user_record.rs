//! User record as delivered by the demo user API.

use serde::{Deserialize, Serialize};

/// A single synthetic user.
///
/// The nested layout mirrors the API payload so records deserialize without
/// an intermediate DTO. Records are never mutated after the fetch; the store
/// only ever replaces whole collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub login: Login,
    pub name: Name,
    pub location: Location,
    pub picture: Picture,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Nationality code (e.g. "ES", "FR")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nat: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    /// Stable unique identifier, used as the row key
    pub uuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
}

impl UserRecord {
    /// Create a record with only the fields the table needs
    pub fn new(
        id: impl Into<String>,
        first: impl Into<String>,
        last: impl Into<String>,
        country: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            login: Login { uuid: id.into() },
            name: Name {
                title: None,
                first: first.into(),
                last: last.into(),
            },
            location: Location {
                country: country.into(),
                city: None,
            },
            picture: Picture {
                thumbnail: thumbnail.into(),
                medium: None,
                large: None,
            },
            email: None,
            gender: None,
            nat: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.login.uuid
    }

    pub fn first_name(&self) -> &str {
        &self.name.first
    }

    pub fn last_name(&self) -> &str {
        &self.name.last
    }

    pub fn country(&self) -> &str {
        &self.location.country
    }

    pub fn thumbnail(&self) -> &str {
        &self.picture.thumbnail
    }
}
