//! Error Types for the Tutor Directory

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Error, Debug)]
pub enum DirectoryError {
    /// An enumerated filter field holds a value outside its declared set
    #[error("Invalid filter state: {field} = {value:?}")]
    InvalidFilterState { field: &'static str, value: String },

    #[error("Invalid tutor record {id}: {reason}")]
    InvalidRecord { id: u32, reason: String },

    #[error("Duplicate tutor id: {0}")]
    DuplicateId(u32),

    #[error("Invalid booking link: {0}")]
    InvalidBookingLink(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DirectoryError {
    pub(crate) fn invalid_filter(field: &'static str, value: impl Into<String>) -> Self {
        DirectoryError::InvalidFilterState {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn invalid_record(id: u32, reason: impl Into<String>) -> Self {
        DirectoryError::InvalidRecord {
            id,
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            DirectoryError::InvalidFilterState { .. } => "INVALID_FILTER",
            DirectoryError::InvalidRecord { .. } | DirectoryError::DuplicateId(_) => "INVALID_CATALOG",
            DirectoryError::InvalidBookingLink(_) => "INVALID_BOOKING_LINK",
            DirectoryError::Config(_) => "CONFIG_ERROR",
            DirectoryError::Io(_) | DirectoryError::Serialization(_) => "CATALOG_UNAVAILABLE",
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            DirectoryError::InvalidFilterState { field, value } => {
                format!("'{}' is not a valid value for {}.", value, field)
            }
            DirectoryError::InvalidRecord { .. } | DirectoryError::DuplicateId(_) => {
                "The tutor catalog is malformed.".into()
            }
            DirectoryError::InvalidBookingLink(_) => "The booking link is not configured correctly.".into(),
            DirectoryError::Config(_) => "Service configuration error.".into(),
            _ => "The tutor catalog is currently unavailable.".into(),
        }
    }
}
