use crate::models::{Patient, Severity};

use super::types::AdrResult;

/// Case-insensitive substring match against medication names only;
/// dosage and frequency are ignored.
fn has_medication(patient: &Patient, term: &str) -> bool {
    patient
        .medications
        .iter()
        .any(|med| med.name.to_lowercase().contains(term))
}

// ---------------------------------------------------------------------------
// ADR detection
// ---------------------------------------------------------------------------

/// Evaluate the adverse-drug-reaction rules over a patient snapshot.
///
/// A single medication never triggers evaluation. Rules run in a fixed
/// order and results keep that order; there is no re-sort by severity.
/// Pure and total: it cannot fail given a well-formed patient.
pub fn detect_adr(patient: &Patient) -> Vec<AdrResult> {
    let mut results = Vec::new();

    if patient.medications.len() <= 1 {
        return results;
    }

    // Rule 1: Lisinopril and Albuterol can interact.
    if has_medication(patient, "lisinopril") && has_medication(patient, "albuterol") {
        results.push(AdrResult {
            medication: "Lisinopril + Albuterol".to_string(),
            severity: Severity::Medium,
            description: "Potential interaction that may decrease the effectiveness of \
                          Lisinopril"
                .to_string(),
            recommendation: "Monitor blood pressure closely and consider alternative \
                             medications"
                .to_string(),
        });
    }

    // Rule 2: Metformin GI side effects.
    if has_medication(patient, "metformin") {
        results.push(AdrResult {
            medication: "Metformin".to_string(),
            severity: Severity::Low,
            description: "Common side effects include gastrointestinal discomfort".to_string(),
            recommendation: "Take with food to reduce GI side effects".to_string(),
        });
    }

    results
}
