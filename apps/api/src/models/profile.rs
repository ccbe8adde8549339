use serde::{Deserialize, Serialize};

/// Sentinel test type meaning "no French test taken".
pub const NO_TEST: &str = "None";

/// Result of a standardized language test (IELTS, CELPIP, TEF, TCF, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDetails {
    pub test_type: String,
    pub overall_score: f64,
    pub reading: f64,
    pub writing: f64,
    pub listening: f64,
    pub speaking: f64,
}

/// Applicant profile as submitted for analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub country_of_residence: String,
    pub education_level: String,
    pub field_of_study: String,
    pub work_experience_years: f64,
    /// Personal savings in CAD.
    pub savings: f64,
    /// Funds the applicant can show for settlement, in CAD.
    pub settlement_funds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_details: Option<LanguageDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub french_details: Option<LanguageDetails>,
}

/// Selects which analysis instructions apply. Unknown values fall back to `SkilledWorker`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Student,
    #[default]
    #[serde(other)]
    SkilledWorker,
}

/// Fields extracted from an uploaded resume. Absent fields are omitted from JSON,
/// so a failed extraction serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_residence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience_years: Option<f64>,
    /// Overall English score if the resume states one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_score: Option<f64>,
}

impl PartialProfile {
    pub fn is_empty(&self) -> bool {
        *self == PartialProfile::default()
    }
}
