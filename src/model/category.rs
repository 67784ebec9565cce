use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Kind of civic issue a complaint is filed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    #[serde(rename = "Public Safety")]
    PublicSafety,
    Infrastructure,
    #[serde(rename = "Public Facilities")]
    PublicFacilities,
    Environment,
    Transportation,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::PublicSafety,
        Self::Infrastructure,
        Self::PublicFacilities,
        Self::Environment,
        Self::Transportation,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PublicSafety => "Public Safety",
            Self::Infrastructure => "Infrastructure",
            Self::PublicFacilities => "Public Facilities",
            Self::Environment => "Environment",
            Self::Transportation => "Transportation",
            Self::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown category {0:?}")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
