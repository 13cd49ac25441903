//! Embedded Catalog
//!
//! The tutors shipped with the site. Used when no external catalog is
//! configured, and as the front end's data before any fetch completes.

use rust_decimal_macros::dec;

use super::{Catalog, CatalogSource};
use crate::error::Result;
use crate::model::{DeliveryMode, InstitutionType, Subject, TutorRecord};

/// Catalog source backed by compiled-in records
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self
    }

    /// The raw records, in display order
    pub fn records() -> Vec<TutorRecord> {
        use DeliveryMode::{InPerson, Online};
        use InstitutionType::{International, PrivateNational, Public};

        let arabic_english = ["العربية", "الإنجليزية"];

        vec![
            TutorRecord::new(
                1,
                "عفاف جيلاني",
                vec![Subject::English, Subject::Arabic, Subject::Daily, Subject::University],
                4.9,
                132,
                dec!(18),
            )
            .with_description("معلمة معتمدة في اللغة الإنجليزية، تحضير للامتحانات والمحادثة.")
            .with_tags(["IELTS", "TOEFL", "طلاب", "بالغين"])
            .with_languages(arabic_english)
            .with_timezones(["EET", "GMT+3"])
            .with_delivery_mode(Online)
            .with_institution_type(International)
            .with_accent("accent-rose"),
            TutorRecord::new(
                2,
                "دينا صلاح",
                vec![Subject::Math, Subject::Physics, Subject::Daily, Subject::University],
                4.8,
                98,
                dec!(22),
            )
            .with_description("مدرس رياضيات بمقاربات بديهية ومشروحة خطوة بخطوة.")
            .with_tags(["IGCSE", "SAT", "مسابقات"])
            .with_languages(arabic_english)
            .with_timezones(["EET"])
            .with_delivery_mode(InPerson)
            .with_institution_type(PrivateNational)
            .with_accent("accent-blue"),
            TutorRecord::new(3, "ليلى فتحي", vec![Subject::Chemistry, Subject::Biology], 4.7, 76, dec!(16))
                .with_description("فهم العلوم عبر تجارب مرئية وتمارين من امتحانات سابقة.")
                .with_tags(["IGCSE", "Edexcel"])
                .with_languages(arabic_english)
                .with_timezones(["EET", "CET"])
                .with_delivery_mode(Online)
                .with_institution_type(International)
                .with_accent("accent-emerald"),
            TutorRecord::new(
                4,
                "يوسف نبيل",
                vec![Subject::Programming, Subject::Daily, Subject::University],
                5.0,
                45,
                dec!(25),
            )
            .with_description("مشاريع عملية من أساسيات الويب إلى الواجهات المتقدمة.")
            .with_tags(["React", "Node", "Python"])
            .with_languages(arabic_english)
            .with_timezones(["EET"])
            .with_delivery_mode(Online)
            .with_institution_type(PrivateNational)
            .with_accent("accent-indigo"),
            TutorRecord::new(5, "منى عادل", vec![Subject::History, Subject::Geography], 4.6, 51, dec!(14))
                .with_description("دروس سردية مصوّرة تربط الحدث بالسياق والخرائط.")
                .with_tags(["IB", "GCSE"])
                .with_languages(arabic_english)
                .with_timezones(["EET"])
                .with_delivery_mode(InPerson)
                .with_institution_type(Public)
                .with_accent("accent-amber"),
            TutorRecord::new(6, "كريم شاكر", vec![Subject::Art], 4.8, 29, dec!(12))
                .with_description("من الرسم الكلاسيكي إلى الرسم الرقمي وبناء بورتفوليو.")
                .with_tags(["مبتدئ", "متوسط"])
                .with_languages(arabic_english)
                .with_timezones(["EET"])
                .with_delivery_mode(InPerson)
                .with_institution_type(PrivateNational)
                .with_accent("accent-fuchsia"),
        ]
    }
}

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog> {
        Catalog::new(Self::records())
    }

    fn name(&self) -> &str {
        "embedded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Choice, FilterState, SortKey, SubjectFilter};

    fn ids(view: &[TutorRecord]) -> Vec<u32> {
        view.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = EmbeddedCatalog::new().load().unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_default_view_sorted_by_rating() {
        let catalog = EmbeddedCatalog::new().load().unwrap();
        // 5.0, 4.9, 4.8 (id 2 before id 6), 4.7, 4.6
        assert_eq!(ids(&catalog.view(&FilterState::default())), vec![4, 1, 2, 6, 3, 5]);
    }

    #[test]
    fn test_price_and_reviews_orders() {
        let catalog = EmbeddedCatalog::new().load().unwrap();
        let by_price = FilterState::default().with_sort_key(SortKey::Price);
        assert_eq!(ids(&catalog.view(&by_price)), vec![6, 5, 3, 1, 2, 4]);

        let by_reviews = FilterState::default().with_sort_key(SortKey::ReviewCount);
        assert_eq!(ids(&catalog.view(&by_reviews)), vec![1, 2, 3, 5, 4, 6]);
    }

    #[test]
    fn test_daily_follow_up_online() {
        let catalog = EmbeddedCatalog::new().load().unwrap();
        let filters = FilterState::default()
            .with_subject(SubjectFilter::Only(Subject::Daily))
            .with_delivery_mode(Choice::Only(DeliveryMode::Online));
        assert_eq!(ids(&catalog.view(&filters)), vec![4, 1]);
    }

    #[test]
    fn test_tag_search() {
        let catalog = EmbeddedCatalog::new().load().unwrap();
        let filters = FilterState::default().with_search_query("igcse");
        assert_eq!(ids(&catalog.view(&filters)), vec![2, 3]);
    }
}
