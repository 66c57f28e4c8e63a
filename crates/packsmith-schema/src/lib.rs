//! Pack configuration and manifest schema for Packsmith.
//!
//! This crate defines the schema layer: pack config parsing from TOML or JSON
//! (`PackConfig`), with required keys checked at the parse boundary, and the
//! resource pack manifest document (`PackManifest`) built from it by
//! `create_pack_manifest`.

pub mod config;
pub mod manifest;
pub mod types;

pub use config::{
    parse_config_file, parse_config_str, ConfigError, ConfigFormat, CustomSection, PackConfig,
    REQUIRED_KEYS,
};
pub use manifest::{
    create_pack_manifest, manifest_from_value, ManifestHeader, ManifestMetadata, ManifestModule,
    ManifestSetting, PackManifest, Subpack, MANIFEST_FORMAT_VERSION, RESOURCE_MODULE_UUID,
};
pub use types::{MaterialName, PackUuid};
