pub mod defs;
pub mod loader;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::dimension::{DIMENSION_COUNT, Dimension};

/// Canonical item count per dimension in the builtin catalog.
pub const ITEMS_PER_DIMENSION: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub dimension: Dimension,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub text: String,
}

/// Per-dimension shape of a loaded catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogAudit {
    pub items_total: usize,
    pub per_dimension: [usize; DIMENSION_COUNT],
    pub reverse_per_dimension: [usize; DIMENSION_COUNT],
    pub canonical: bool,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    audit: CatalogAudit,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate item id in catalog: {0}")]
    DuplicateId(String),
    #[error("catalog has no items for dimension {0}")]
    EmptyDimension(&'static str),
}

impl Catalog {
    /// The canonical 50-item catalog.
    pub fn builtin() -> Self {
        let items = defs::builtin_items()
            .iter()
            .map(|def| CatalogItem {
                id: def.id.to_string(),
                dimension: def.dimension,
                reverse: def.reverse,
                text: def.text.to_string(),
            })
            .collect::<Vec<_>>();
        // Builtin shape is fixed; validation cannot fail.
        Self::from_items(items).expect("builtin catalog is well formed")
    }

    /// Builds a catalog from explicit items, rejecting duplicate ids and
    /// dimensions with no items. Non-canonical shapes are accepted with a
    /// warning; the scoring engine averages whatever each dimension has.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.id.clone()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        let mut per_dimension = [0usize; DIMENSION_COUNT];
        let mut reverse_per_dimension = [0usize; DIMENSION_COUNT];
        for item in &items {
            per_dimension[item.dimension.index()] += 1;
            if item.reverse {
                reverse_per_dimension[item.dimension.index()] += 1;
            }
        }
        for dim in Dimension::ALL {
            if per_dimension[dim.index()] == 0 {
                return Err(CatalogError::EmptyDimension(dim.name()));
            }
        }

        let canonical = items.len() == DIMENSION_COUNT * ITEMS_PER_DIMENSION
            && per_dimension.iter().all(|&n| n == ITEMS_PER_DIMENSION)
            && reverse_per_dimension
                .iter()
                .all(|&n| n == ITEMS_PER_DIMENSION / 2);
        if !canonical {
            tracing::warn!(
                items = items.len(),
                "catalog deviates from the canonical 10-per-dimension layout"
            );
        }

        let audit = CatalogAudit {
            items_total: items.len(),
            per_dimension,
            reverse_per_dimension,
            canonical,
        };
        Ok(Self { items, audit })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn audit(&self) -> &CatalogAudit {
        &self.audit
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}
