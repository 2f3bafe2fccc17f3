use crate::{CoreError, Result as CoreErrorResult, UserRecord};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Field selector for the derived ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Arrival order
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "first")]
    ByFirstName,
    #[serde(rename = "last")]
    ByLastName,
    #[serde(rename = "country")]
    ByCountry,
}

impl SortKey {
    /// All keys that a column header can select
    pub const COLUMNS: [SortKey; 3] = [Self::ByFirstName, Self::ByLastName, Self::ByCountry];

    /// Short string form used by the CLI and config
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ByFirstName => "first",
            Self::ByLastName => "last",
            Self::ByCountry => "country",
        }
    }

    /// Field of `record` this key orders by, or `None` for arrival order
    pub fn field<'a>(&self, record: &'a UserRecord) -> Option<&'a str> {
        match self {
            Self::None => None,
            Self::ByFirstName => Some(record.first_name()),
            Self::ByLastName => Some(record.last_name()),
            Self::ByCountry => Some(record.country()),
        }
    }

    /// The "toggle country sort" control only flips between `None` and `ByCountry`.
    /// Any other key toggles to `None`.
    pub fn toggle_country(self) -> Self {
        match self {
            Self::None => Self::ByCountry,
            _ => Self::None,
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "first" | "name" => Ok(Self::ByFirstName),
            "last" => Ok(Self::ByLastName),
            "country" => Ok(Self::ByCountry),
            _ => Err(CoreError::InvalidSortKey {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
