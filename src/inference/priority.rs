use crate::models::{Patient, PriorityTier};

/// Does any assessment in the full history exceed `threshold` on any axis?
fn any_score_above(patient: &Patient, threshold: u8) -> bool {
    patient.mental_health_scores.iter().any(|score| {
        score.anxiety_score > threshold
            || score.depression_score > threshold
            || score.stress_score > threshold
    })
}

// ---------------------------------------------------------------------------
// Priority classification
// ---------------------------------------------------------------------------

/// Derive the patient's risk tier from medication count and mental-health
/// thresholds.
///
/// Scans ALL assessments, not just the latest; list-filtering relies on a
/// patient staying high priority after a single elevated assessment. (The
/// prediction fallback in [`super::prediction`] reads only the latest.)
pub fn classify(patient: &Patient) -> PriorityTier {
    if patient.medications.len() > 3 || any_score_above(patient, 7) {
        return PriorityTier::High;
    }

    if patient.medications.len() > 1 || any_score_above(patient, 4) {
        return PriorityTier::Medium;
    }

    PriorityTier::Low
}
