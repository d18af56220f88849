use crate::models::{Patient, Severity};

use super::types::PredictionResult;

fn has_condition(patient: &Patient, term: &str) -> bool {
    patient
        .conditions
        .iter()
        .any(|c| c.to_lowercase().contains(term))
}

fn has_medication(patient: &Patient, term: &str) -> bool {
    patient
        .medications
        .iter()
        .any(|med| med.name.to_lowercase().contains(term))
}

fn finding(
    condition: &str,
    probability: f64,
    description: &str,
    warning_level: Severity,
) -> PredictionResult {
    PredictionResult {
        condition: condition.to_string(),
        probability,
        description: description.to_string(),
        warning_level,
    }
}

// ---------------------------------------------------------------------------
// Condition prediction
// ---------------------------------------------------------------------------

/// Evaluate the predictive rule set over a patient snapshot.
///
/// Rules are independent and never short-circuit; a patient may trigger any
/// subset. The two demographic fallbacks apply only when the rules above
/// them produced fewer than 2 findings, and the mental-health fallback reads
/// only the last-appended assessment (the classifier in
/// [`super::priority`] scans the full history; the asymmetry is deliberate).
/// Output is stable-sorted by probability, descending.
pub fn predict_conditions(patient: &Patient) -> Vec<PredictionResult> {
    let mut predictions = Vec::new();

    // Diabetes-related conditions.
    if has_condition(patient, "diabetes") || has_condition(patient, "blood sugar") {
        predictions.push(finding(
            "Diabetic Neuropathy",
            0.65,
            "Nerve damage that can occur in patients with diabetes, causing tingling or \
             pain in extremities.",
            Severity::Medium,
        ));
        predictions.push(finding(
            "Diabetic Retinopathy",
            0.48,
            "Damage to the blood vessels in the retina due to diabetes, may lead to vision \
             problems.",
            Severity::Medium,
        ));
    }

    // Hypertension-related conditions.
    if has_condition(patient, "hypertension") || has_condition(patient, "high blood pressure") {
        predictions.push(finding(
            "Coronary Artery Disease",
            0.55,
            "Narrowing of coronary arteries that can lead to heart attacks.",
            Severity::High,
        ));
        predictions.push(finding(
            "Stroke Risk",
            0.42,
            "Increased risk of blood vessel blockage or rupture in the brain.",
            Severity::High,
        ));
    }

    // Asthma-related conditions.
    if has_condition(patient, "asthma") {
        predictions.push(finding(
            "Chronic Obstructive Pulmonary Disease",
            0.38,
            "Progressive lung disease causing breathing difficulty.",
            Severity::Medium,
        ));
    }

    // Traditional Ayurvedic insights, evaluated independently of the
    // biomedical rules above.
    if has_condition(patient, "diabetes") {
        predictions.push(finding(
            "Imbalanced Kapha Dosha",
            0.45,
            "According to Ayurveda, diabetes (Madhumeha) is related to Kapha imbalance. \
             May benefit from certain herbal supplements.",
            Severity::Medium,
        ));
    }

    if has_condition(patient, "hypertension") {
        predictions.push(finding(
            "Pitta-Vata Imbalance",
            0.40,
            "According to Ayurvedic medicine, high blood pressure often indicates Pitta \
             and Vata imbalance. Lifestyle changes may help.",
            Severity::Medium,
        ));
    }

    // Medication-based predictions.
    if has_medication(patient, "metformin") {
        predictions.push(finding(
            "Vitamin B12 Deficiency",
            0.32,
            "Long-term metformin use can lead to vitamin B12 deficiency.",
            Severity::Low,
        ));
    }

    if has_medication(patient, "lisinopril") || has_medication(patient, "enalapril") {
        predictions.push(finding(
            "Chronic Cough",
            0.25,
            "ACE inhibitors may cause a persistent dry cough in some patients.",
            Severity::Low,
        ));
    }

    // Demographic fallbacks, only when the rules above were not productive.
    if predictions.len() < 2 {
        if patient.age > 50 {
            predictions.push(finding(
                "Osteoarthritis",
                0.40,
                "Degenerative joint disease that becomes more common with age.",
                Severity::Low,
            ));
        }

        // Only the last-appended assessment counts here.
        if let Some(latest) = patient.latest_score() {
            if latest.anxiety_score > 5 || latest.depression_score > 5 {
                predictions.push(finding(
                    "Chronic Fatigue Syndrome",
                    0.35,
                    "Extreme fatigue that can be worsened by mental health conditions.",
                    Severity::Medium,
                ));
            }
        }
    }

    // sort_by is stable, so equal probabilities keep rule order.
    predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    predictions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Medication, MentalHealthScore};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn patient(age: u32, conditions: &[&str], medications: &[&str]) -> Patient {
        let mut p = Patient::new(
            "Test Patient",
            age,
            "Other",
            conditions.iter().map(|c| c.to_string()).collect(),
        );
        for name in medications {
            p.medications
                .push(Medication::new(*name, "10mg", "Once daily", date(2023, 1, 1)));
        }
        p
    }

    #[test]
    fn diabetes_yields_three_findings_sorted() {
        let p = patient(30, &["Type 2 Diabetes"], &[]);
        let results = predict_conditions(&p);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].condition, "Diabetic Neuropathy");
        assert_eq!(results[0].probability, 0.65);
        assert_eq!(results[1].condition, "Diabetic Retinopathy");
        assert_eq!(results[1].probability, 0.48);
        assert_eq!(results[2].condition, "Imbalanced Kapha Dosha");
        assert_eq!(results[2].probability, 0.45);
    }

    #[test]
    fn hypertension_yields_three_findings() {
        let p = patient(30, &["Hypertension"], &[]);
        let results = predict_conditions(&p);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].condition, "Coronary Artery Disease");
        assert_eq!(results[0].warning_level, Severity::High);
        assert_eq!(results[1].condition, "Stroke Risk");
        assert_eq!(results[2].condition, "Pitta-Vata Imbalance");
    }

    #[test]
    fn high_blood_pressure_skips_ayurvedic_recheck() {
        // The Ayurvedic rule matches "hypertension" only, not the synonym.
        let p = patient(30, &["High Blood Pressure"], &[]);
        let results = predict_conditions(&p);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].condition, "Coronary Artery Disease");
        assert_eq!(results[1].condition, "Stroke Risk");
    }

    #[test]
    fn medication_rules_fire_without_conditions() {
        let p = patient(30, &[], &["Metformin", "Enalapril"]);
        let results = predict_conditions(&p);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].condition, "Vitamin B12 Deficiency");
        assert_eq!(results[1].condition, "Chronic Cough");
    }

    #[test]
    fn fallback_age_rule_fires_when_nothing_else_does() {
        let p = patient(60, &[], &[]);
        let results = predict_conditions(&p);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].condition, "Osteoarthritis");
        assert_eq!(results[0].probability, 0.40);
        assert_eq!(results[0].warning_level, Severity::Low);
    }

    #[test]
    fn fallbacks_suppressed_by_two_or_more_findings() {
        // Diabetes alone already yields 3 findings, so age > 50 adds nothing.
        let p = patient(60, &["Type 2 Diabetes"], &[]);
        let results = predict_conditions(&p);

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.condition != "Osteoarthritis"));
    }

    #[test]
    fn single_finding_still_allows_fallbacks() {
        // Asthma alone yields one finding; fewer than 2, so fallbacks apply.
        let p = patient(55, &["Asthma"], &[]);
        let results = predict_conditions(&p);

        assert_eq!(results.len(), 2);
        assert!(results.iter().any(|r| r.condition == "Osteoarthritis"));
    }

    #[test]
    fn mental_health_fallback_reads_last_appended_only() {
        let mut p = patient(30, &[], &[]);
        p.mental_health_scores
            .push(MentalHealthScore::new(date(2023, 3, 1), 8, 8, 8));
        p.mental_health_scores
            .push(MentalHealthScore::new(date(2023, 2, 1), 1, 1, 1));

        // Last-appended entry is calm, even though an earlier one (with a
        // later date) is elevated.
        assert!(predict_conditions(&p).is_empty());

        p.mental_health_scores
            .push(MentalHealthScore::new(date(2023, 1, 1), 6, 0, 0));
        let results = predict_conditions(&p);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].condition, "Chronic Fatigue Syndrome");
    }

    #[test]
    fn combined_rules_sort_descending() {
        let mut p = patient(40, &["Type 2 Diabetes", "Hypertension"], &["Metformin"]);
        p.mental_health_scores
            .push(MentalHealthScore::new(date(2023, 3, 1), 9, 9, 9));

        let results = predict_conditions(&p);

        // 2 diabetes + 2 hypertension + 2 ayurvedic + 1 metformin; fallbacks
        // suppressed despite the elevated score.
        assert_eq!(results.len(), 7);
        let probs: Vec<f64> = results.iter().map(|r| r.probability).collect();
        let mut sorted = probs.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(probs, sorted);
        assert_eq!(results[0].condition, "Diabetic Neuropathy");
    }

    #[test]
    fn evaluation_is_idempotent() {
        let p = patient(60, &["Asthma"], &["Lisinopril", "Metformin"]);
        assert_eq!(predict_conditions(&p), predict_conditions(&p));
    }

    #[test]
    fn empty_patient_yields_no_findings() {
        let p = patient(30, &[], &[]);
        assert!(predict_conditions(&p).is_empty());
    }
}
