use crate::config::{ConfigError, PackConfig};
use crate::types::PackUuid;
use serde::{Deserialize, Serialize};

pub const MANIFEST_FORMAT_VERSION: u32 = 2;

/// UUID of the single `resources` module every generated pack declares.
/// Never derived from the config.
pub const RESOURCE_MODULE_UUID: &str = "463b6f36-82e7-4c55-8bcd-435a3cebeb80";

/// Resource pack `manifest.json` document. Field order matches the order
/// the keys are written in.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PackManifest {
    pub format_version: u32,
    pub header: ManifestHeader,
    pub modules: Vec<ManifestModule>,
    pub settings: Vec<ManifestSetting>,
    pub subpacks: Vec<Subpack>,
    pub metadata: ManifestMetadata,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ManifestHeader {
    pub name: String,
    pub description: String,
    pub uuid: PackUuid,
    pub version: [u32; 3],
    pub min_engine_version: [u32; 3],
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ManifestModule {
    #[serde(rename = "type")]
    pub kind: String,
    pub uuid: String,
    pub version: [u32; 3],
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ManifestSetting {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Subpack {
    pub folder_name: String,
    pub name: String,
    pub memory_tier: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ManifestMetadata {
    pub authors: Vec<String>,
    pub url: String,
}

impl PackManifest {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn create_pack_manifest(config: &PackConfig) -> PackManifest {
    tracing::debug!("building manifest for pack '{}' ({})", config.name, config.uuid);
    PackManifest {
        format_version: MANIFEST_FORMAT_VERSION,
        header: ManifestHeader {
            name: config.name.clone(),
            description: config.description.clone(),
            uuid: config.uuid.clone(),
            version: config.version,
            min_engine_version: config.min_supported_mc_version,
        },
        modules: vec![ManifestModule {
            kind: "resources".to_owned(),
            uuid: RESOURCE_MODULE_UUID.to_owned(),
            version: config.version,
        }],
        settings: vec![ManifestSetting {
            kind: "label".to_owned(),
            text: config.custom.label.clone(),
        }],
        subpacks: Vec::new(),
        metadata: ManifestMetadata {
            authors: config.authors.clone(),
            url: config.url.clone(),
        },
    }
}

/// Build a manifest straight from an untyped config document.
pub fn manifest_from_value(config: serde_json::Value) -> Result<PackManifest, ConfigError> {
    let config = PackConfig::from_value(config)?;
    Ok(create_pack_manifest(&config))
}
