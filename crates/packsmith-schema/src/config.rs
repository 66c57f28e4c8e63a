use crate::types::PackUuid;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Keys a pack config must carry, in the order they are checked.
/// Nested keys use dotted paths.
pub const REQUIRED_KEYS: &[&str] = &[
    "name",
    "description",
    "uuid",
    "version",
    "min_supported_mc_version",
    "authors",
    "url",
    "custom.label",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("failed to parse config: {0}")]
    ParseJson(#[source] serde_json::Error),
    #[error("config root must be a table")]
    NotATable,
    #[error("missing required config key '{0}'")]
    KeyMissing(String),
    #[error("invalid config field: {0}")]
    InvalidField(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.json` files are read as JSON; everything else as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Pack build configuration. Only the keys the manifest needs are modelled;
/// any other keys in the document are ignored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PackConfig {
    pub name: String,
    pub description: String,
    pub uuid: PackUuid,
    pub version: [u32; 3],
    pub min_supported_mc_version: [u32; 3],
    pub authors: Vec<String>,
    pub url: String,
    pub custom: CustomSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CustomSection {
    pub label: String,
}

impl PackConfig {
    /// Build a config from an untyped document. Every key in [`REQUIRED_KEYS`]
    /// is checked before any field is deserialized, so an absent key is always
    /// reported as [`ConfigError::KeyMissing`] rather than a serde error.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::NotATable);
        }
        if let Some(key) = first_missing_key(&value) {
            return Err(ConfigError::KeyMissing(key.to_owned()));
        }
        serde_json::from_value(value).map_err(ConfigError::InvalidField)
    }
}

fn first_missing_key(root: &Value) -> Option<&'static str> {
    REQUIRED_KEYS
        .iter()
        .copied()
        .find(|key| lookup(root, key).is_none())
}

fn lookup<'a>(root: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted.split('.').try_fold(root, |node, key| node.get(key))
}

pub fn parse_config_str(input: &str, format: ConfigFormat) -> Result<PackConfig, ConfigError> {
    let value: Value = match format {
        ConfigFormat::Toml => toml::from_str(input)?,
        ConfigFormat::Json => serde_json::from_str(input).map_err(ConfigError::ParseJson)?,
    };
    PackConfig::from_value(value)
}

pub fn parse_config_file(path: impl AsRef<Path>) -> Result<PackConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    tracing::debug!("parsing pack config {}", path.display());
    parse_config_str(&content, ConfigFormat::from_path(path))
}
