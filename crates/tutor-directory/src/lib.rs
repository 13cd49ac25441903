//! # tutor-directory
//!
//! Tutor catalog and the directory query engine behind the marketplace's
//! "teachers" section.
//!
//! ## Flow
//!
//! ```text
//! ┌───────────────┐   load once   ┌─────────┐
//! │ CatalogSource │──────────────▶│ Catalog │ (validated, immutable)
//! └───────────────┘               └────┬────┘
//!                                      │
//!   FilterState (replaced on every     ▼
//!   pill/search/sort change) ───▶ compute_view ───▶ Vec<TutorRecord>
//! ```
//!
//! `compute_view` is a pure function: filter by subject, delivery mode,
//! institution type and free text, then stable-sort by rating, price or
//! review count. Booking never touches it; [`BookingLink`] only builds the
//! outbound messaging deep link.

pub mod booking;
pub mod catalog;
pub mod display;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;

pub use booking::BookingLink;
pub use catalog::{Catalog, CatalogSource, EmbeddedCatalog, JsonFileCatalog};
pub use error::{DirectoryError, Result};
pub use filter::{Choice, FilterState, RawFilterState, SortKey, SubjectFilter};
pub use model::{DeliveryMode, InstitutionType, Subject, SubjectTag, TutorRecord, subject_catalog};
pub use query::compute_view;
