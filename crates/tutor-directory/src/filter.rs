//! Filter State
//!
//! The narrowing criteria, search text and sort order selected on the page.
//! A `FilterState` is always complete; callers holding loose strings go
//! through [`RawFilterState`] which rejects out-of-set values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{DirectoryError, Result};
use crate::model::{DeliveryMode, InstitutionType, Subject};

const ALL: &str = "all";

/// Subject narrowing: everything, or tutors teaching one subject
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectFilter {
    #[default]
    All,
    #[serde(untagged)]
    Only(Subject),
}

impl SubjectFilter {
    pub fn matches(&self, subjects: &[Subject]) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Only(subject) => subjects.contains(subject),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectFilter::All => ALL,
            SubjectFilter::Only(subject) => subject.key(),
        }
    }

    /// Heading label: "all" or the subject's display label
    pub fn label(&self) -> &'static str {
        match self {
            SubjectFilter::All => "الكل",
            SubjectFilter::Only(subject) => subject.label(),
        }
    }
}

impl FromStr for SubjectFilter {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(SubjectFilter::All);
        }
        s.parse().map(SubjectFilter::Only)
    }
}

/// Narrowing over a closed enumeration, or no narrowing at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice<T> {
    All,
    #[serde(untagged)]
    Only(T),
}

// Not derived: the derive would demand `T: Default`.
impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T> FromStr for Choice<T>
where
    T: FromStr<Err = DirectoryError>,
{
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Choice::All);
        }
        s.parse().map(Choice::Only)
    }
}

pub type DeliveryModeFilter = Choice<DeliveryMode>;
pub type InstitutionTypeFilter = Choice<InstitutionType>;

/// Order of the derived view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Highest rating first
    #[default]
    Rating,
    /// Cheapest first
    Price,
    /// Most reviewed first
    #[serde(alias = "reviews")]
    ReviewCount,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Rating, SortKey::Price, SortKey::ReviewCount];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Price => "price",
            SortKey::ReviewCount => "review-count",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rating => "الترتيب: التقييم",
            SortKey::Price => "الترتيب: السعر",
            SortKey::ReviewCount => "الترتيب: عدد التقييمات",
        }
    }
}

impl FromStr for SortKey {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rating" => Ok(SortKey::Rating),
            "price" => Ok(SortKey::Price),
            "review-count" | "reviews" => Ok(SortKey::ReviewCount),
            _ => Err(DirectoryError::invalid_filter("sort_key", s)),
        }
    }
}

/// Complete set of view criteria
///
/// Replaced wholesale on every change; the `with_*` constructors return a
/// copy with one field changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub subject: SubjectFilter,
    pub delivery_mode: DeliveryModeFilter,
    pub institution_type: InstitutionTypeFilter,
    pub search_query: String,
    pub sort_key: SortKey,
}

impl FilterState {
    pub fn with_subject(&self, subject: SubjectFilter) -> Self {
        Self {
            subject,
            ..self.clone()
        }
    }

    pub fn with_delivery_mode(&self, delivery_mode: DeliveryModeFilter) -> Self {
        Self {
            delivery_mode,
            ..self.clone()
        }
    }

    pub fn with_institution_type(&self, institution_type: InstitutionTypeFilter) -> Self {
        Self {
            institution_type,
            ..self.clone()
        }
    }

    pub fn with_search_query(&self, search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            ..self.clone()
        }
    }

    pub fn with_sort_key(&self, sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..self.clone()
        }
    }

    /// Search text as matched: trimmed and lowercased
    pub fn normalized_query(&self) -> String {
        self.search_query.trim().to_lowercase()
    }
}

/// Filter criteria as loose strings, e.g. HTTP query parameters
///
/// Missing or blank fields take their default; anything else must parse.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawFilterState {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, alias = "delivery_mode")]
    pub mode: Option<String>,
    #[serde(default, alias = "institution_type")]
    pub school: Option<String>,
    #[serde(default, alias = "search_query")]
    pub q: Option<String>,
    #[serde(default, alias = "sort_key")]
    pub sort: Option<String>,
}

fn parse_field<T>(value: Option<&str>) -> Result<T>
where
    T: FromStr<Err = DirectoryError> + Default,
{
    match value.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(raw) => raw.parse(),
    }
}

impl TryFrom<RawFilterState> for FilterState {
    type Error = DirectoryError;

    fn try_from(raw: RawFilterState) -> Result<Self> {
        Ok(FilterState {
            subject: parse_field(raw.subject.as_deref())?,
            delivery_mode: parse_field(raw.mode.as_deref())?,
            institution_type: parse_field(raw.school.as_deref())?,
            search_query: raw.q.unwrap_or_default(),
            sort_key: parse_field(raw.sort.as_deref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let filters = FilterState::default();
        assert_eq!(filters.subject, SubjectFilter::All);
        assert!(filters.delivery_mode.is_all());
        assert!(filters.institution_type.is_all());
        assert_eq!(filters.search_query, "");
        assert_eq!(filters.sort_key, SortKey::Rating);
    }

    #[test]
    fn test_with_changes_one_field_only() {
        let base = FilterState::default().with_search_query("ielts");
        let next = base.with_sort_key(SortKey::Price);

        assert_eq!(base.sort_key, SortKey::Rating);
        assert_eq!(next.sort_key, SortKey::Price);
        assert_eq!(next.search_query, "ielts");
        assert_eq!(next.subject, base.subject);
    }

    #[test]
    fn test_raw_filter_parses_known_values() {
        let raw = RawFilterState {
            subject: Some("math".into()),
            mode: Some("in-person".into()),
            school: Some("government".into()),
            q: Some("  IGCSE ".into()),
            sort: Some("reviews".into()),
        };
        let filters = FilterState::try_from(raw).unwrap();

        assert_eq!(filters.subject, SubjectFilter::Only(Subject::Math));
        assert_eq!(filters.delivery_mode, Choice::Only(DeliveryMode::InPerson));
        assert_eq!(filters.institution_type, Choice::Only(InstitutionType::Public));
        assert_eq!(filters.normalized_query(), "igcse");
        assert_eq!(filters.sort_key, SortKey::ReviewCount);
    }

    #[test]
    fn test_raw_filter_missing_fields_default() {
        let filters = FilterState::try_from(RawFilterState {
            subject: Some(" ".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_raw_filter_rejects_out_of_set_values() {
        let err = FilterState::try_from(RawFilterState {
            sort: Some("popularity".into()),
            ..Default::default()
        })
        .unwrap_err();

        match err {
            DirectoryError::InvalidFilterState { field, value } => {
                assert_eq!(field, "sort_key");
                assert_eq!(value, "popularity");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = FilterState::try_from(RawFilterState {
            mode: Some("hybrid".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.code(), "INVALID_FILTER");
    }

    #[test]
    fn test_filter_state_serde_uses_all_and_keys() {
        let filters = FilterState::default()
            .with_subject(SubjectFilter::Only(Subject::Art))
            .with_delivery_mode(Choice::Only(DeliveryMode::InPerson));
        let json = serde_json::to_value(&filters).unwrap();

        assert_eq!(json["subject"], "art");
        assert_eq!(json["delivery_mode"], "in-person");
        assert_eq!(json["institution_type"], "all");
        assert_eq!(json["sort_key"], "rating");

        let back: FilterState = serde_json::from_value(json).unwrap();
        assert_eq!(back, filters);
    }
}
