//! Source file loading
//!
//! Reads item rows from CSV source files. Multiple sources are concatenated
//! in argument order; rows are never merged by key.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::core::model::Item;

/// Load one source file, keeping rows in file order. A missing file or a
/// row missing the required columns is fatal.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open source file {}", path.display()))?;

    let mut items = Vec::new();
    for record in reader.deserialize() {
        let item: Item =
            record.with_context(|| format!("failed to parse a row in {}", path.display()))?;
        items.push(item);
    }
    debug!("loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Concatenate every source file in argument order.
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for path in paths {
        items.extend(load_items(path)?);
    }
    info!(
        "loaded {} items from {} source file(s)",
        items.len(),
        paths.len()
    );
    Ok(items)
}
