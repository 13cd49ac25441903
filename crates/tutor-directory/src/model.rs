//! Domain Models
//!
//! Core data types for the tutor directory.
//! Uses `rust_decimal` for hourly prices - never use f64 for money!

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DirectoryError;

/// A subject a tutor can teach
///
/// The set is fixed and known at startup; order here is the order the
/// subject grid renders in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Physics,
    Chemistry,
    Biology,
    English,
    Arabic,
    Programming,
    History,
    Geography,
    Art,
    /// Daily homework follow-up
    Daily,
    /// University-level courses
    University,
}

impl Subject {
    pub const ALL: [Subject; 12] = [
        Subject::Math,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::English,
        Subject::Arabic,
        Subject::Programming,
        Subject::History,
        Subject::Geography,
        Subject::Art,
        Subject::Daily,
        Subject::University,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::English => "english",
            Subject::Arabic => "arabic",
            Subject::Programming => "programming",
            Subject::History => "history",
            Subject::Geography => "geography",
            Subject::Art => "art",
            Subject::Daily => "daily",
            Subject::University => "university",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Math => "الرياضيات",
            Subject::Physics => "الفيزياء",
            Subject::Chemistry => "الكيمياء",
            Subject::Biology => "الأحياء",
            Subject::English => "اللغة الإنجليزية",
            Subject::Arabic => "اللغة العربية",
            Subject::Programming => "البرمجة",
            Subject::History => "التاريخ",
            Subject::Geography => "الجغرافيا",
            Subject::Art => "الفن",
            Subject::Daily => "المتابعة اليومية",
            Subject::University => "مواد جامعية",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Subject::Math => "➗",
            Subject::Physics => "🧪",
            Subject::Chemistry => "⚗️",
            Subject::Biology => "🧬",
            Subject::English => "📚",
            Subject::Arabic => "📝",
            Subject::Programming => "💻",
            Subject::History => "🏺",
            Subject::Geography => "🗺️",
            Subject::Art => "🎨",
            Subject::Daily => "📖",
            Subject::University => "🎓",
        }
    }

    /// Catalog entry view of this subject
    pub fn tag(&self) -> SubjectTag {
        SubjectTag {
            key: *self,
            label: self.label(),
            icon: self.icon(),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Subject {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Subject::ALL
            .into_iter()
            .find(|subject| subject.key() == key)
            .ok_or_else(|| DirectoryError::invalid_filter("subject", s))
    }
}

/// Subject catalog entry as shown in the subject grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SubjectTag {
    pub key: Subject,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Full subject catalog in display order
pub fn subject_catalog() -> Vec<SubjectTag> {
    Subject::ALL.iter().map(Subject::tag).collect()
}

/// How sessions with a tutor take place
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    Online,
    #[serde(alias = "offline")]
    InPerson,
}

impl DeliveryMode {
    pub const ALL: [DeliveryMode; 2] = [DeliveryMode::Online, DeliveryMode::InPerson];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Online => "online",
            DeliveryMode::InPerson => "in-person",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryMode::Online => "أونلاين",
            DeliveryMode::InPerson => "حضوري",
        }
    }
}

impl FromStr for DeliveryMode {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(DeliveryMode::Online),
            "in-person" | "offline" => Ok(DeliveryMode::InPerson),
            _ => Err(DirectoryError::invalid_filter("delivery_mode", s)),
        }
    }
}

/// Kind of school a tutor teaches for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstitutionType {
    International,
    #[serde(alias = "ahli", alias = "private")]
    PrivateNational,
    #[serde(alias = "government")]
    Public,
}

impl InstitutionType {
    pub const ALL: [InstitutionType; 3] = [
        InstitutionType::International,
        InstitutionType::PrivateNational,
        InstitutionType::Public,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstitutionType::International => "international",
            InstitutionType::PrivateNational => "private-national",
            InstitutionType::Public => "public",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstitutionType::International => "انترناشونال",
            InstitutionType::PrivateNational => "أهلي",
            InstitutionType::Public => "حكومي",
        }
    }
}

impl FromStr for InstitutionType {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "international" => Ok(InstitutionType::International),
            "private-national" | "private" | "ahli" => Ok(InstitutionType::PrivateNational),
            "public" | "government" => Ok(InstitutionType::Public),
            _ => Err(DirectoryError::invalid_filter("institution_type", s)),
        }
    }
}

/// A tutor listed in the directory
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TutorRecord {
    pub id: u32,

    pub name: String,

    /// Subjects taught (non-empty)
    pub subjects: Vec<Subject>,

    /// Average score, 0.0 to 5.0
    pub rating: f32,

    #[serde(alias = "reviews")]
    pub review_count: u32,

    /// Price of one hour in USD
    #[serde(alias = "price")]
    pub hourly_price: Decimal,

    #[serde(alias = "blurb")]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(alias = "mode")]
    pub delivery_mode: DeliveryMode,

    #[serde(alias = "school")]
    pub institution_type: InstitutionType,

    #[serde(default)]
    pub timezones: Vec<String>,

    /// Card accent style token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl TutorRecord {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        subjects: Vec<Subject>,
        rating: f32,
        review_count: u32,
        hourly_price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            subjects,
            rating,
            review_count,
            hourly_price,
            description: String::new(),
            tags: Vec::new(),
            languages: Vec::new(),
            delivery_mode: DeliveryMode::Online,
            institution_type: InstitutionType::International,
            timezones: Vec::new(),
            accent: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timezones<I, S>(mut self, timezones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timezones = timezones.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_delivery_mode(mut self, mode: DeliveryMode) -> Self {
        self.delivery_mode = mode;
        self
    }

    pub fn with_institution_type(mut self, institution: InstitutionType) -> Self {
        self.institution_type = institution;
        self
    }

    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(accent.into());
        self
    }

    /// Text the free-text search runs against, lowercased.
    ///
    /// Rebuilt on every call.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.tags.join(" ")).to_lowercase()
    }
}
