use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Catalog, CatalogError, CatalogItem};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    items: Vec<CatalogItem>,
}

/// Loads a catalog from a JSON file of the form
/// `{"items": [{"id": "O1", "dimension": "O", "reverse": false, "text": "..."}]}`.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&raw)?;
    Catalog::from_items(file.items)
}
