//! Profile analysis: asks the model for a structured immigration assessment.
//!
//! The call never fails on model trouble: transport errors, empty replies and
//! unparseable JSON all resolve to `fallback_analysis()`. Only a missing
//! credential is reported to the caller.

use std::collections::BTreeMap;

use serde_json::json;
use tracing::{debug, error, info};

use crate::analysis::prompts::{analysis_schema, build_analysis_prompt};
use crate::llm_client::{generate_json, GenerateRequest, LlmError, ModelProvider, Part};
use crate::models::analysis::AnalysisResult;
use crate::models::profile::{UserProfile, UserType};

/// Canned assessment returned whenever the live analysis is unavailable.
pub fn fallback_analysis() -> AnalysisResult {
    AnalysisResult {
        overall_success_probability: 72.0,
        crs_score_prediction: 310.0,
        risk_factors: vec![
            "Live analysis was unavailable, so this is a generic baseline rather than an assessment of your profile.".to_string(),
        ],
        strengths: vec!["Core profile information is complete.".to_string()],
        assumptions: vec![
            "No Canadian work experience, job offer or provincial nomination.".to_string(),
        ],
        recommended_pathways: Vec::new(),
        alternative_pathways: Vec::new(),
        strategic_advice: vec![
            json!("Raise every language ability to CLB 9 or higher; it is the quickest way to gain CRS points."),
            json!("Run the analysis again shortly for an assessment specific to your profile."),
        ],
        future_score_projections: BTreeMap::from([
            ("current".to_string(), json!(310)),
            ("withImprovedLanguage".to_string(), json!(360)),
            ("withCanadianExperience".to_string(), json!(390)),
            ("withFrenchProficiency".to_string(), json!(410)),
        ]),
    }
}

/// Runs a structured assessment of `profile` under the `user_type` branch.
pub async fn analyze_profile(
    provider: &dyn ModelProvider,
    profile: &UserProfile,
    user_type: UserType,
) -> Result<AnalysisResult, LlmError> {
    let model = provider.model()?;

    let request = GenerateRequest {
        parts: vec![Part::text(build_analysis_prompt(profile, user_type))],
        response_schema: analysis_schema(),
    };
    debug!(?user_type, prompt_chars = request.prompt_text().len(), "Requesting profile analysis");

    match generate_json::<AnalysisResult>(model.as_ref(), &request).await {
        Ok(result) => {
            info!(
                ?user_type,
                probability = result.overall_success_probability,
                crs = result.crs_score_prediction,
                "Profile analysis complete"
            );
            Ok(result)
        }
        Err(e) => {
            error!(error = %e, ?user_type, "Profile analysis failed; returning fallback assessment");
            Ok(fallback_analysis())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::prompts::{SKILLED_WORKER_INSTRUCTIONS, STUDENT_INSTRUCTIONS};
    use crate::llm_client::mock::{MockModel, MockProvider};

    const LIVE_REPLY: &str = r#"{
        "overallSuccessProbability": 64,
        "crsScorePrediction": 468,
        "riskFactors": ["Language scores below CLB 9"],
        "strengths": ["Age in the maximum-points band"],
        "assumptions": ["Single applicant"],
        "recommendedPathways": [{"name": "Federal Skilled Worker", "eligibility": "Eligible", "timeline": "6 months"}],
        "alternativePathways": [],
        "strategicAdvice": ["Retake IELTS"],
        "futureScoreProjections": {"withIelts8": 492}
    }"#;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Lucas Silva".to_string(),
            age: 31,
            country_of_residence: "Brazil".to_string(),
            education_level: "Master's Degree".to_string(),
            field_of_study: "Data Science".to_string(),
            work_experience_years: 6.0,
            savings: 30000.0,
            settlement_funds: 16000.0,
            ..UserProfile::default()
        }
    }

    async fn analyze_with(model: std::sync::Arc<MockModel>, user_type: UserType) -> AnalysisResult {
        let provider = MockProvider::with(model);
        analyze_profile(&provider, &profile(), user_type)
            .await
            .unwrap()
    }

    #[test]
    fn test_fallback_literal() {
        let fallback = fallback_analysis();
        assert_eq!(fallback.overall_success_probability, 72.0);
        assert_eq!(fallback.crs_score_prediction, 310.0);
        assert_eq!(fallback.risk_factors.len(), 1);
        assert_eq!(fallback.strengths.len(), 1);
        assert_eq!(fallback.assumptions.len(), 1);
        assert_eq!(fallback.strategic_advice.len(), 2);
        assert!(fallback.strategic_advice.iter().all(|a| a.is_string()));
        assert_eq!(fallback.future_score_projections.len(), 4);
        assert!(fallback.recommended_pathways.is_empty());
        assert!(fallback.alternative_pathways.is_empty());
    }

    #[test]
    fn test_fallback_serializes_every_list_field() {
        let value = serde_json::to_value(fallback_analysis()).unwrap();
        for key in [
            "riskFactors",
            "strengths",
            "assumptions",
            "recommendedPathways",
            "alternativePathways",
            "strategicAdvice",
        ] {
            assert!(value[key].is_array(), "{key} missing");
        }
        assert_eq!(value["overallSuccessProbability"], 72.0);
        assert_eq!(value["futureScoreProjections"]["current"], 310.0);
    }

    #[tokio::test]
    async fn test_live_reply_is_returned() {
        let result = analyze_with(MockModel::replying(LIVE_REPLY), UserType::SkilledWorker).await;
        assert_eq!(result.crs_score_prediction, 468.0);
        assert_eq!(result.future_score_projections["withIelts8"], 492.0);
        assert_eq!(result.recommended_pathways[0]["name"], "Federal Skilled Worker");
    }

    #[tokio::test]
    async fn test_structured_projection_reply_is_not_replaced_by_fallback() {
        let reply = r#"{
            "overallSuccessProbability": 61,
            "crsScorePrediction": 455,
            "riskFactors": [],
            "strengths": [],
            "assumptions": [],
            "recommendedPathways": [],
            "strategicAdvice": [],
            "futureScoreProjections": {"withIelts8": {"score": 492, "timeline": "6 months"}}
        }"#;
        let result = analyze_with(MockModel::replying(reply), UserType::SkilledWorker).await;

        assert_ne!(result, fallback_analysis());
        assert_eq!(result.crs_score_prediction, 455.0);
        assert_eq!(result.future_score_projections["withIelts8"]["timeline"], "6 months");
    }

    #[tokio::test]
    async fn test_student_branch_selected() {
        let model = MockModel::replying(LIVE_REPLY);
        analyze_with(model.clone(), UserType::Student).await;

        let prompt = model.last_request().prompt_text();
        assert!(prompt.contains(STUDENT_INSTRUCTIONS));
        assert!(!prompt.contains(SKILLED_WORKER_INSTRUCTIONS));
        assert!(prompt.contains("Name: Lucas Silva"));
    }

    #[tokio::test]
    async fn test_worker_branch_selected() {
        let model = MockModel::replying(LIVE_REPLY);
        analyze_with(model.clone(), UserType::SkilledWorker).await;

        let request = model.last_request();
        assert!(request.prompt_text().contains(SKILLED_WORKER_INSTRUCTIONS));
        assert_eq!(
            request.response_schema["properties"]["crsScorePrediction"]["type"],
            "NUMBER"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_returns_fallback() {
        let result = analyze_with(MockModel::failing(), UserType::Student).await;
        assert_eq!(result, fallback_analysis());
    }

    #[tokio::test]
    async fn test_empty_reply_returns_fallback() {
        let result = analyze_with(MockModel::empty(), UserType::SkilledWorker).await;
        assert_eq!(result, fallback_analysis());
    }

    #[tokio::test]
    async fn test_shape_mismatch_returns_fallback() {
        let result = analyze_with(
            MockModel::replying(r#"{"overallSuccessProbability": "high"}"#),
            UserType::SkilledWorker,
        )
        .await;
        assert_eq!(result, fallback_analysis());
    }

    #[tokio::test]
    async fn test_missing_credential_propagates() {
        let provider = MockProvider::unconfigured();
        let err = analyze_profile(&provider, &profile(), UserType::Student)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingCredential));
    }
}
