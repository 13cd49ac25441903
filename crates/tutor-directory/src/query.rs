//! Directory Query Engine
//!
//! Turns the static catalog plus the current [`FilterState`] into the
//! ordered list the teachers section renders. Pure and total: an input
//! matching nothing yields an empty list, never an error.

use std::cmp::Ordering;

use crate::filter::{FilterState, SortKey};
use crate::model::TutorRecord;

/// Compute the derived view for `filters` over `catalog`.
///
/// Records are retained only if they satisfy every active predicate
/// (subject, delivery mode, institution type, free-text search), then
/// stably sorted by `filters.sort_key`. Ties keep catalog order.
pub fn compute_view(catalog: &[TutorRecord], filters: &FilterState) -> Vec<TutorRecord> {
    let query = filters.normalized_query();

    let mut view: Vec<TutorRecord> = catalog
        .iter()
        .filter(|tutor| matches(tutor, filters, &query))
        .cloned()
        .collect();

    // `sort_by` is stable
    view.sort_by(|a, b| compare(a, b, filters.sort_key));

    tracing::debug!(
        catalog = catalog.len(),
        matched = view.len(),
        sort = filters.sort_key.as_str(),
        "recomputed tutor view"
    );

    view
}

/// Whether `tutor` passes every predicate. `query` must already be
/// trimmed and lowercased.
fn matches(tutor: &TutorRecord, filters: &FilterState, query: &str) -> bool {
    filters.subject.matches(&tutor.subjects)
        && filters.delivery_mode.matches(&tutor.delivery_mode)
        && filters.institution_type.matches(&tutor.institution_type)
        && (query.is_empty() || tutor.search_haystack().contains(query))
}

fn compare(a: &TutorRecord, b: &TutorRecord, key: SortKey) -> Ordering {
    match key {
        // Catalog validation rules out NaN; -0.0 and 0.0 tie
        SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
        SortKey::Price => a.hourly_price.cmp(&b.hourly_price),
        SortKey::ReviewCount => b.review_count.cmp(&a.review_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Choice, SubjectFilter};
    use crate::model::{DeliveryMode, InstitutionType, Subject};
    use rust_decimal_macros::dec;

    fn ids(view: &[TutorRecord]) -> Vec<u32> {
        view.iter().map(|t| t.id).collect()
    }

    fn two_tutors() -> Vec<TutorRecord> {
        vec![
            TutorRecord::new(1, "Afaf Gilani", vec![Subject::English], 4.9, 132, dec!(18)),
            TutorRecord::new(2, "Dina Salah", vec![Subject::Math], 4.8, 98, dec!(22)),
        ]
    }

    /// One record per predicate, each failing exactly that predicate
    /// against `narrow_filters()`, plus one passing all of them.
    fn predicate_matrix() -> Vec<TutorRecord> {
        let passing = |id, name: &str| {
            TutorRecord::new(id, name, vec![Subject::Physics, Subject::Math], 4.5, 10, dec!(15))
                .with_description("olympiad coaching")
                .with_tags(["IGCSE"])
                .with_delivery_mode(DeliveryMode::Online)
                .with_institution_type(InstitutionType::International)
        };

        vec![
            passing(1, "Passes Everything"),
            TutorRecord {
                subjects: vec![Subject::Art],
                ..passing(2, "Wrong Subject")
            },
            passing(3, "Wrong Mode").with_delivery_mode(DeliveryMode::InPerson),
            passing(4, "Wrong School").with_institution_type(InstitutionType::Public),
            passing(5, "Wrong Text")
                .with_description("watercolour basics")
                .with_tags(["beginner"]),
        ]
    }

    fn narrow_filters() -> FilterState {
        FilterState::default()
            .with_subject(SubjectFilter::Only(Subject::Math))
            .with_delivery_mode(Choice::Only(DeliveryMode::Online))
            .with_institution_type(Choice::Only(InstitutionType::International))
            .with_search_query("IGCSE")
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let filters = FilterState::default().with_sort_key(SortKey::Price);
        assert_eq!(ids(&compute_view(&two_tutors(), &filters)), vec![1, 2]);
    }

    #[test]
    fn test_subject_filter() {
        let filters = FilterState::default().with_subject(SubjectFilter::Only(Subject::Math));
        assert_eq!(ids(&compute_view(&two_tutors(), &filters)), vec![2]);
    }

    #[test]
    fn test_unmatched_query_is_empty() {
        let filters = FilterState::default().with_search_query("zzz");
        assert!(compute_view(&two_tutors(), &filters).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(compute_view(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let catalog = vec![
            TutorRecord::new(1, "Sara Ahmed", vec![Subject::English], 4.0, 1, dec!(10)),
            TutorRecord::new(2, "Omar Said", vec![Subject::English], 4.0, 1, dec!(10)),
        ];
        let filters = FilterState::default().with_search_query("  SARA ");
        assert_eq!(ids(&compute_view(&catalog, &filters)), vec![1]);
    }

    #[test]
    fn test_search_covers_description_and_tags() {
        let catalog = vec![
            TutorRecord::new(1, "A", vec![Subject::Math], 4.0, 1, dec!(10)).with_description("SAT prep"),
            TutorRecord::new(2, "B", vec![Subject::Math], 4.0, 1, dec!(10)).with_tags(["Edexcel", "SAT"]),
            TutorRecord::new(3, "C", vec![Subject::Math], 4.0, 1, dec!(10)),
        ];
        let filters = FilterState::default().with_search_query("sat");
        assert_eq!(ids(&compute_view(&catalog, &filters)), vec![1, 2]);
    }

    #[test]
    fn test_search_spans_field_boundaries_with_single_space() {
        let catalog = vec![
            TutorRecord::new(1, "Karim", vec![Subject::Art], 4.0, 1, dec!(10)).with_description("draws"),
        ];
        let filters = FilterState::default().with_search_query("karim draws");
        assert_eq!(ids(&compute_view(&catalog, &filters)), vec![1]);
    }

    #[test]
    fn test_filter_conjunction() {
        let catalog = predicate_matrix();
        assert_eq!(ids(&compute_view(&catalog, &narrow_filters())), vec![1]);

        // Lifting one predicate re-admits exactly the record that failed it
        let base = narrow_filters();
        let lifted = [
            (base.with_subject(SubjectFilter::All), 2),
            (base.with_delivery_mode(Choice::All), 3),
            (base.with_institution_type(Choice::All), 4),
            (base.with_search_query(""), 5),
        ];
        for (filters, readmitted) in lifted {
            assert_eq!(ids(&compute_view(&catalog, &filters)), vec![1, readmitted]);
        }

        assert_eq!(ids(&compute_view(&catalog, &FilterState::default())), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rating_sort_is_stable() {
        let catalog = vec![
            TutorRecord::new(1, "A", vec![Subject::Math], 4.7, 5, dec!(10)),
            TutorRecord::new(2, "B", vec![Subject::Math], 4.9, 5, dec!(10)),
            TutorRecord::new(3, "C", vec![Subject::Math], 4.7, 5, dec!(10)),
            TutorRecord::new(4, "D", vec![Subject::Math], 4.7, 5, dec!(10)),
        ];
        let view = compute_view(&catalog, &FilterState::default());
        assert_eq!(ids(&view), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_signed_zero_ratings_tie() {
        let catalog = crate::catalog::Catalog::new(vec![
            TutorRecord::new(1, "A", vec![Subject::Math], -0.0, 5, dec!(10)),
            TutorRecord::new(2, "B", vec![Subject::Math], 0.0, 5, dec!(10)),
        ])
        .unwrap();
        let view = compute_view(catalog.tutors(), &FilterState::default());
        assert_eq!(ids(&view), vec![1, 2]);
    }

    #[test]
    fn test_review_count_sort_descending_with_stable_ties() {
        let catalog = vec![
            TutorRecord::new(1, "A", vec![Subject::Math], 4.0, 29, dec!(10)),
            TutorRecord::new(2, "B", vec![Subject::Math], 4.0, 132, dec!(10)),
            TutorRecord::new(3, "C", vec![Subject::Math], 4.0, 29, dec!(10)),
        ];
        let filters = FilterState::default().with_sort_key(SortKey::ReviewCount);
        assert_eq!(ids(&compute_view(&catalog, &filters)), vec![2, 1, 3]);
    }

    #[test]
    fn test_idempotent() {
        let catalog = predicate_matrix();
        let filters = FilterState::default().with_sort_key(SortKey::Price);
        assert_eq!(compute_view(&catalog, &filters), compute_view(&catalog, &filters));
    }
}
