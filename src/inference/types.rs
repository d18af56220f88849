use serde::{Deserialize, Serialize};

use crate::models::{PriorityTier, Severity};

// ---------------------------------------------------------------------------
// AdrResult
// ---------------------------------------------------------------------------

/// A possible adverse drug reaction, produced fresh on each evaluation and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdrResult {
    /// Label naming a single drug or a "DrugA + DrugB" combination.
    pub medication: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

// ---------------------------------------------------------------------------
// PredictionResult
// ---------------------------------------------------------------------------

/// A predicted future condition. `probability` is a fixed rule-assigned
/// constant in [0, 1], not a calibrated estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub condition: String,
    pub probability: f64,
    pub description: String,
    pub warning_level: Severity,
}

// ---------------------------------------------------------------------------
// InferenceReport
// ---------------------------------------------------------------------------

/// Combined output of one full evaluation pass over a stored patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceReport {
    pub adr_results: Vec<AdrResult>,
    pub predictions: Vec<PredictionResult>,
    pub priority: PriorityTier,
    pub processing_time_ms: u64,
}
