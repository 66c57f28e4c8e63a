use super::EXIT_SUCCESS;
use packsmith_schema::{create_pack_manifest, parse_config_file};
use std::path::Path;

pub fn run(config: &Path) -> Result<u8, String> {
    let config = parse_config_file(config).map_err(|e| format!("config error: {e}"))?;
    let manifest = create_pack_manifest(&config);
    let json = manifest
        .to_json_pretty()
        .map_err(|e| format!("JSON serialization failed: {e}"))?;
    println!("{json}");
    Ok(EXIT_SUCCESS)
}
