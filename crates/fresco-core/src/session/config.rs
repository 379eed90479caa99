use crate::domain::{InputProfile, ReactionType};
use crate::partition::PartitionSpec;
use crate::potential::{PotentialRecord, SlotSyntax};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-described editing session, e.g.
/// `{"reaction":"transfer","arraySyntax":true,"values":{"hcm":0.05}}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    pub reaction: ReactionType,
    pub profile: InputProfile,
    /// Overrides the slot style detected from an input file.
    pub array_syntax: Option<bool>,
    pub header: Option<String>,
    pub values: IndexMap<String, ConfigScalar>,
    /// Explicit records. When absent the reaction defaults are used.
    pub potentials: Option<Vec<PotentialRecord>>,
    pub partitions: Vec<PartitionSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ConfigScalar {
    Logical(bool),
    Number(f64),
    Text(String),
}

impl ConfigScalar {
    /// Form-style text handed to registry coercion.
    pub fn to_raw(&self) -> String {
        match self {
            Self::Logical(true) => "T".to_string(),
            Self::Logical(false) => "F".to_string(),
            Self::Number(value) => crate::namelist::value::format_number(*value),
            Self::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read session config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse session config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_session_config(config_path: impl AsRef<Path>) -> Result<SessionConfig, ConfigError> {
    let config_path = config_path.as_ref();
    let source = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}

/// Capabilities a session runs with, resolved once from config or flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionOptions {
    pub reaction: ReactionType,
    pub profile: InputProfile,
    pub slot_syntax: Option<SlotSyntax>,
    pub header: Option<String>,
}

impl SessionOptions {
    pub fn new(reaction: ReactionType, profile: InputProfile) -> Self {
        Self {
            reaction,
            profile,
            ..Self::default()
        }
    }
}

impl From<&SessionConfig> for SessionOptions {
    fn from(config: &SessionConfig) -> Self {
        Self {
            reaction: config.reaction,
            profile: config.profile,
            slot_syntax: config.array_syntax.map(SlotSyntax::from_array_flag),
            header: config.header.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ConfigScalar, SessionConfig, SessionOptions, load_session_config};
    use crate::domain::{InputProfile, ReactionType};
    use crate::potential::SlotSyntax;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn config_fields_default_when_absent() {
        let config: SessionConfig = serde_json::from_str("{}").expect("empty config should parse");
        assert_eq!(config.reaction, ReactionType::Elastic);
        assert_eq!(config.profile, InputProfile::Fresco);
        assert!(config.potentials.is_none());
        assert_eq!(SessionOptions::from(&config).slot_syntax, None);
    }

    #[test]
    fn camel_case_config_is_resolved_into_options() {
        let config: SessionConfig = serde_json::from_str(
            r#"{"reaction":"capture","arraySyntax":true,"header":"p+208Pb",
                "values":{"hcm":0.05,"chans":true,"elab":"6.9 11.0"}}"#,
        )
        .expect("config should parse");
        let options = SessionOptions::from(&config);
        assert_eq!(options.reaction, ReactionType::Capture);
        assert_eq!(options.slot_syntax, Some(SlotSyntax::Array));
        assert_eq!(config.values["hcm"].to_raw(), "0.05");
        assert_eq!(config.values["chans"], ConfigScalar::Logical(true));
        assert_eq!(config.values["elab"].to_raw(), "6.9 11.0");
    }

    #[test]
    fn loader_reports_path_on_read_and_parse_failures() {
        let temp = TempDir::new().expect("tempdir should be created");
        let missing = temp.path().join("missing.json");
        let error = load_session_config(&missing).expect_err("missing file should fail");
        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().contains("missing.json"));

        let broken = temp.path().join("broken.json");
        fs::write(&broken, "{\"reaction\": \"fusion\"}").expect("config should be written");
        let error = load_session_config(&broken).expect_err("unknown reaction should fail");
        assert!(matches!(error, ConfigError::Parse { .. }));
    }
}
