//! Tutor Catalog
//!
//! The immutable, validated record set plus the sources it can be loaded
//! from at startup.

mod embedded;
mod file;

pub use embedded::EmbeddedCatalog;
pub use file::JsonFileCatalog;

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

use crate::error::{DirectoryError, Result};
use crate::filter::FilterState;
use crate::model::TutorRecord;
use crate::query::compute_view;

/// Catalog source trait (Strategy pattern)
///
/// Implementations load the full record set once; the result is never
/// mutated afterwards.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Catalog>;

    /// Source name for logs and health output
    fn name(&self) -> &str;
}

/// Validated tutor records in catalog order
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    tutors: Vec<TutorRecord>,
}

impl Catalog {
    /// Validate `tutors` and wrap them.
    ///
    /// Rejects duplicate ids, blank names, empty or repeated subjects,
    /// ratings outside 0-5 and non-positive prices.
    pub fn new(tutors: Vec<TutorRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tutors.len());
        for tutor in &tutors {
            if !seen.insert(tutor.id) {
                return Err(DirectoryError::DuplicateId(tutor.id));
            }
            validate(tutor)?;
        }
        tracing::debug!(tutors = tutors.len(), "catalog validated");
        Ok(Self { tutors })
    }

    pub fn tutors(&self) -> &[TutorRecord] {
        &self.tutors
    }

    pub fn get(&self, id: u32) -> Option<&TutorRecord> {
        self.tutors.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tutors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tutors.is_empty()
    }

    /// Derived view over this catalog
    pub fn view(&self, filters: &FilterState) -> Vec<TutorRecord> {
        compute_view(&self.tutors, filters)
    }
}

fn validate(tutor: &TutorRecord) -> Result<()> {
    let id = tutor.id;
    if tutor.name.trim().is_empty() {
        return Err(DirectoryError::invalid_record(id, "name is blank"));
    }
    if tutor.subjects.is_empty() {
        return Err(DirectoryError::invalid_record(id, "no subjects"));
    }
    let mut subjects = HashSet::new();
    if let Some(repeated) = tutor.subjects.iter().find(|s| !subjects.insert(**s)) {
        return Err(DirectoryError::invalid_record(
            id,
            format!("subject {} listed twice", repeated.key()),
        ));
    }
    if !(0.0..=5.0).contains(&tutor.rating) {
        return Err(DirectoryError::invalid_record(
            id,
            format!("rating {} outside 0-5", tutor.rating),
        ));
    }
    if tutor.hourly_price <= Decimal::ZERO {
        return Err(DirectoryError::invalid_record(
            id,
            format!("hourly price {} is not positive", tutor.hourly_price),
        ));
    }
    Ok(())
}
