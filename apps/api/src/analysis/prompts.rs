// Profile analysis prompt templates and response schema.
// All prompts for the analysis module are defined here.

use serde_json::Value;

use crate::llm_client::prompts::{ADVISOR_PERSONA, NO_INVENTION_INSTRUCTION};
use crate::llm_client::schema::{array_of, loose_object, number, object, string_array};
use crate::models::profile::{LanguageDetails, UserProfile, UserType, NO_TEST};

pub const STUDENT_INSTRUCTIONS: &str = "\
Assess this applicant as an INTERNATIONAL STUDENT planning to study in Canada.
Evaluate study permit approval odds: proof of funds against the current cost-of-living \
threshold plus first-year tuition, ties to the home country, and how the field of study \
fits a credible study plan.
Project the CRS score the applicant could reach after graduating from a Designated \
Learning Institution and holding a Post-Graduation Work Permit with one year of \
Canadian work experience.
Recommend programs and study-to-PR pathways (PGWP → Canadian Experience Class, \
provincial graduate streams) and list alternatives if the study route is weak.";

pub const SKILLED_WORKER_INSTRUCTIONS: &str = "\
Assess this applicant as a SKILLED WORKER seeking permanent residence in Canada.
Estimate the current Comprehensive Ranking System (CRS) score from age, education, \
language ability and work experience, and compare it with recent Express Entry draw cut-offs.
Check Federal Skilled Worker eligibility (67-point grid) and whether settlement funds \
meet the proof-of-funds requirement for a single applicant.
Recommend the strongest pathways (Express Entry streams, Provincial Nominee Programs, \
category-based draws) and realistic alternatives.";

const RESULT_INSTRUCTIONS: &str = "\
Return overallSuccessProbability as a percentage from 0 to 100 and crsScorePrediction as a CRS score.
List riskFactors, strengths and the assumptions you made.
Give recommendedPathways and alternativePathways as objects with a name, eligibility and timeline.
Give strategicAdvice as concrete next steps.
Give futureScoreProjections as an object mapping a scenario name to its projected CRS score.";

/// One-line summary of a language test, e.g. `IELTS - Overall:7, R:7, W:6, L:8, S:7`.
pub fn language_summary(details: &LanguageDetails) -> String {
    format!(
        "{} - Overall:{}, R:{}, W:{}, L:{}, S:{}",
        details.test_type,
        details.overall_score,
        details.reading,
        details.writing,
        details.listening,
        details.speaking
    )
}

/// Flat text rendering of the profile for the prompt.
pub fn render_profile(profile: &UserProfile) -> String {
    let english = profile
        .language_details
        .as_ref()
        .map(language_summary)
        .unwrap_or_else(|| "N/A".to_string());

    let french = profile
        .french_details
        .as_ref()
        .filter(|d| d.test_type != NO_TEST)
        .map(language_summary)
        .unwrap_or_else(|| NO_TEST.to_string());

    format!(
        "APPLICANT PROFILE:
Name: {}
Age: {}
Country of Residence: {}
Education Level: {}
Field of Study: {}
Work Experience: {} years
Savings: {} CAD
Settlement Funds: {} CAD
English Test: {english}
French Test: {french}",
        profile.name,
        profile.age,
        profile.country_of_residence,
        profile.education_level,
        profile.field_of_study,
        profile.work_experience_years,
        profile.savings,
        profile.settlement_funds,
    )
}

pub fn instructions_for(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Student => STUDENT_INSTRUCTIONS,
        UserType::SkilledWorker => SKILLED_WORKER_INSTRUCTIONS,
    }
}

/// Full analysis prompt: persona, branch instructions, output guidance, then the profile.
pub fn build_analysis_prompt(profile: &UserProfile, user_type: UserType) -> String {
    format!(
        "{ADVISOR_PERSONA}\n\n{}\n\n{RESULT_INSTRUCTIONS}\n{NO_INVENTION_INSTRUCTION}\n\n{}",
        instructions_for(user_type),
        render_profile(profile)
    )
}

/// Reply shape for `AnalysisResult`. Pathway and projection entries are left loose;
/// advice is requested as plain strings, though any JSON the model returns is kept.
pub fn analysis_schema() -> Value {
    object(
        &[
            ("overallSuccessProbability", number()),
            ("crsScorePrediction", number()),
            ("riskFactors", string_array()),
            ("strengths", string_array()),
            ("assumptions", string_array()),
            ("recommendedPathways", array_of(loose_object())),
            ("alternativePathways", array_of(loose_object())),
            ("strategicAdvice", string_array()),
            ("futureScoreProjections", loose_object()),
        ],
        &[
            "overallSuccessProbability",
            "crsScorePrediction",
            "riskFactors",
            "strengths",
            "assumptions",
            "recommendedPathways",
            "strategicAdvice",
            "futureScoreProjections",
        ],
    )
}
