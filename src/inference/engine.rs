use std::sync::Arc;
use std::time::Instant;

use crate::models::{Patient, PriorityTier};
use crate::store::{PatientStore, StoreError};

use super::adr::detect_adr;
use super::prediction::predict_conditions;
use super::priority::classify;
use super::types::{AdrResult, InferenceReport, PredictionResult};

/// Facade that runs the rule evaluators against patients held by the store.
///
/// Evaluation itself is pure; the engine only resolves ids to snapshots and
/// logs completion events.
pub struct InferenceEngine {
    store: Arc<PatientStore>,
}

impl InferenceEngine {
    pub fn new(store: Arc<PatientStore>) -> Self {
        Self { store }
    }

    /// Evaluate the ADR rules for a stored patient.
    /// An unknown id yields an empty list, never an error.
    pub fn detect_adr(&self, patient_id: &str) -> Vec<AdrResult> {
        let Ok(Some(patient)) = self.store.get_patient(patient_id) else {
            tracing::debug!(patient_id = %patient_id, "ADR detection on unknown patient");
            return Vec::new();
        };

        let results = detect_adr(&patient);
        tracing::info!(
            patient_id = %patient_id,
            findings = results.len(),
            "ADR detection complete"
        );
        results
    }

    /// Evaluate the predictive rules over a patient snapshot.
    pub fn predict_conditions(&self, patient: &Patient) -> Vec<PredictionResult> {
        let results = predict_conditions(patient);
        tracing::info!(
            patient_id = %patient.id,
            findings = results.len(),
            "Condition prediction complete"
        );
        results
    }

    /// Derive the priority tier for a patient snapshot.
    pub fn classify(&self, patient: &Patient) -> PriorityTier {
        classify(patient)
    }

    /// Run all three evaluators over a stored patient and collect the
    /// results into a single report for dashboard-style consumers.
    pub fn evaluate(&self, patient_id: &str) -> Result<InferenceReport, StoreError> {
        let start = Instant::now();

        let patient = self
            .store
            .get_patient(patient_id)?
            .ok_or_else(|| StoreError::NotFound(patient_id.to_string()))?;

        let report = InferenceReport {
            adr_results: detect_adr(&patient),
            predictions: predict_conditions(&patient),
            priority: classify(&patient),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            patient_id = %patient_id,
            adr = report.adr_results.len(),
            predictions = report.predictions.len(),
            priority = report.priority.as_str(),
            processing_ms = report.processing_time_ms,
            "Evaluation complete"
        );
        Ok(report)
    }
}
