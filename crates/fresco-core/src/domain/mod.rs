pub mod errors;

pub use errors::{ExitClass, FrescoError, FrescoErrorCategory, FrescoResult};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    #[default]
    Elastic,
    Inelastic,
    Transfer,
    Capture,
}

impl ReactionType {
    pub const ALL: [ReactionType; 4] = [
        Self::Elastic,
        Self::Inelastic,
        Self::Transfer,
        Self::Capture,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Elastic => "elastic",
            Self::Inelastic => "inelastic",
            Self::Transfer => "transfer",
            Self::Capture => "capture",
        }
    }

    /// Lenient lookup used when a page or config names its reaction loosely.
    pub fn parse_or_default(name: &str) -> Self {
        match name.parse() {
            Ok(reaction) => reaction,
            Err(_) => {
                warn!(reaction = name, "unknown reaction type, using elastic defaults");
                Self::Elastic
            }
        }
    }
}

impl Display for ReactionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for ReactionType {
    type Err = FrescoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|reaction| reaction.as_str() == normalized)
            .ok_or_else(|| {
                FrescoError::input_validation(
                    "INPUT.REACTION_TYPE",
                    format!(
                        "unknown reaction type '{}'; expected one of elastic, inelastic, transfer, capture",
                        value.trim()
                    ),
                )
            })
    }
}

/// Which input-file flavor a session edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputProfile {
    #[default]
    Fresco,
    Cdcc,
}

impl InputProfile {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fresco => "fresco",
            Self::Cdcc => "cdcc",
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Fresco => "NAMELIST",
            Self::Cdcc => "CDCC",
        }
    }
}

impl Display for InputProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for InputProfile {
    type Err = FrescoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fresco" | "namelist" => Ok(Self::Fresco),
            "cdcc" | "breakup" => Ok(Self::Cdcc),
            other => Err(FrescoError::input_validation(
                "INPUT.PROFILE",
                format!("unknown input profile '{other}'; expected fresco or cdcc"),
            )),
        }
    }
}
