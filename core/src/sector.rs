//! Scenario sectors and their case-insensitive normalisation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level partition of the sectored scenario catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Intelligence,
    Operations,
    Logistics,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Self::Intelligence, Self::Operations, Self::Logistics];

    /// Sector used when the caller omits one or names one we don't know.
    pub const DEFAULT: Sector = Self::Logistics;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intelligence => "intelligence",
            Self::Operations => "operations",
            Self::Logistics => "logistics",
        }
    }

    /// Exact match against a lowercase sector key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == key)
    }

    /// Lowercase the raw value and fall back to [`Sector::DEFAULT`]
    /// for anything unrecognised. Never fails.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::DEFAULT;
        };
        let lowered = raw.to_lowercase();
        match Self::from_key(&lowered) {
            Some(sector) => sector,
            None => {
                log::debug!("unknown sector {raw:?}, using {}", Self::DEFAULT);
                Self::DEFAULT
            }
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
