//! JSON File Catalog
//!
//! Loads the catalog from a JSON array of tutor records on disk.

use std::path::PathBuf;

use super::{Catalog, CatalogSource};
use crate::error::Result;
use crate::model::TutorRecord;

pub struct JsonFileCatalog {
    path: PathBuf,
    name: String,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Catalog> {
        tracing::debug!(path = %self.path.display(), "loading tutor catalog");
        let raw = std::fs::read_to_string(&self.path)?;
        let tutors: Vec<TutorRecord> = serde_json::from_str(&raw)?;
        Catalog::new(tutors)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
