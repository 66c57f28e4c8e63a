//! Build support for Packsmith: material lookup and build log styling.
//!
//! `resolve_material_paths` checks requested material names against the
//! materials directory listing and returns their paths; `print_styled_error`
//! replays build-tool output through a `LogSink` with a style per line.

pub mod buildlog;
pub mod materials;

pub use buildlog::{classify_line, print_styled_error, styled_lines, LogSink, LogStyle, StyledLine};
pub use materials::{
    list_materials, resolve_material_paths, resolve_material_paths_in, MATERIALS_DIR,
};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("material not found: {0}")]
    NotFound(String),
    #[error("failed to list materials in {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
