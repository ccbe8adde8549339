use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured assessment returned by profile analysis.
///
/// List fields default to empty when the model omits them, so every value
/// handed to a caller carries all of them. Pathway and advice entries are
/// passed through as the model shaped them, and so are projection values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0 to 100
    pub overall_success_probability: f64,
    pub crs_score_prediction: f64,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub assumptions: Vec<String>,
    #[serde(default)]
    pub recommended_pathways: Vec<Value>,
    #[serde(default)]
    pub alternative_pathways: Vec<Value>,
    #[serde(default)]
    pub strategic_advice: Vec<Value>,
    /// Scenario name → projection, usually a bare CRS score.
    #[serde(default)]
    pub future_score_projections: BTreeMap<String, Value>,
}
