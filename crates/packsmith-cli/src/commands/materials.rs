use super::{json_pretty, EXIT_SUCCESS};
use packsmith_core::{list_materials, resolve_material_paths_in};
use packsmith_schema::MaterialName;
use std::path::Path;

pub fn run(dir: &Path, names: &[String], json: bool) -> Result<u8, String> {
    let requested: Vec<MaterialName> = if names.is_empty() {
        list_materials(dir).map_err(|e| format!("material error: {e}"))?
    } else {
        names.iter().map(|n| MaterialName::from(n.as_str())).collect()
    };

    tracing::debug!("resolving {} materials in {}", requested.len(), dir.display());
    let paths =
        resolve_material_paths_in(dir, &requested).map_err(|e| format!("material error: {e}"))?;

    if json {
        let rendered: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        println!("{}", json_pretty(&rendered)?);
    } else {
        for path in &paths {
            println!("{}", path.display());
        }
    }
    Ok(EXIT_SUCCESS)
}
