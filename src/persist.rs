use crate::types::Catalog;
use crate::{CatalogError, Result};
use std::fs;
use std::path::Path;

/// Default output document name, written to the working directory.
pub const DEFAULT_CATALOG_FILE: &str = "youtube_data.json";

/// Write the catalog as a pretty-printed JSON document.
///
/// The document has exactly two top-level keys, `tracks` and `artists`, each
/// holding an array in insertion order. Parent directories are created if
/// they do not exist.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(catalog)
        .map_err(|e| CatalogError::Parse(format!("failed to serialize catalog: {e}")))?;
    fs::write(path, json)?;

    log::debug!("catalog saved to: {}", path.display());
    Ok(())
}

/// Load a previously saved catalog document.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| CatalogError::Parse(format!("failed to parse catalog file: {e}")))
}
