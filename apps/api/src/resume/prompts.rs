// Resume ingestion prompt and response schema.

use serde_json::Value;

use crate::llm_client::schema::{number, object, string};

pub const RESUME_PARSE_PROMPT: &str = "\
Extract the following details from the attached resume: \
the candidate's full name, highest education level, field of study, \
total years of professional work experience, current country of residence, \
and overall English test score if one is mentioned. \
Express work experience as a number of years; round partial years to one decimal.";

/// Reply shape for resume extraction. Name, education, field and experience are required.
pub fn resume_schema() -> Value {
    object(
        &[
            ("name", string()),
            ("educationLevel", string()),
            ("fieldOfStudy", string()),
            ("workExperienceYears", number()),
            ("country", string()),
            ("englishScore", number()),
        ],
        &["name", "educationLevel", "fieldOfStudy", "workExperienceYears"],
    )
}
