use crate::MaterialError;
use packsmith_schema::MaterialName;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Materials root, relative to the working directory of the build.
pub const MATERIALS_DIR: &str = "src/materials";

/// Resolve material names against [`MATERIALS_DIR`].
pub fn resolve_material_paths(names: &[MaterialName]) -> Result<Vec<PathBuf>, MaterialError> {
    resolve_material_paths_in(MATERIALS_DIR, names)
}

/// Resolve each name to `base/<name>`, preserving input order.
///
/// The directory is listed once. The first name without a matching entry
/// fails the whole call with [`MaterialError::NotFound`].
pub fn resolve_material_paths_in(
    base: impl AsRef<Path>,
    names: &[MaterialName],
) -> Result<Vec<PathBuf>, MaterialError> {
    let base = base.as_ref();
    let available = read_entries(base)?;

    let mut paths = Vec::with_capacity(names.len());
    for name in names {
        if !available.contains(name.as_str()) {
            warn!("material '{name}' not present in {}", base.display());
            return Err(MaterialError::NotFound(name.to_string()));
        }
        paths.push(base.join(name.as_str()));
    }
    Ok(paths)
}

/// Every entry name under `base`, sorted.
pub fn list_materials(base: impl AsRef<Path>) -> Result<Vec<MaterialName>, MaterialError> {
    let mut names: Vec<MaterialName> = read_entries(base.as_ref())?
        .into_iter()
        .map(MaterialName::from)
        .collect();
    names.sort();
    Ok(names)
}

fn read_entries(base: &Path) -> Result<HashSet<String>, MaterialError> {
    let io_err = |source: std::io::Error| MaterialError::Io {
        path: base.to_path_buf(),
        source,
    };
    let mut entries = HashSet::new();
    for entry in fs::read_dir(base).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        // Non-UTF-8 names can never match a requested material.
        if let Ok(name) = entry.file_name().into_string() {
            entries.insert(name);
        }
    }
    debug!("listed {} materials in {}", entries.len(), base.display());
    Ok(entries)
}
