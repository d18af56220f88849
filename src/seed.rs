//! Demo patient data for first-run and fixture use.

use chrono::NaiveDate;

use crate::models::{Medication, MentalHealthScore, Patient};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn medication(
    id: &str,
    name: &str,
    dosage: &str,
    frequency: &str,
    start_date: NaiveDate,
) -> Medication {
    Medication {
        id: id.to_string(),
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
        start_date,
        notes: None,
    }
}

/// The three demo patients the application ships with. Ids are the original
/// short numeric strings; patient ids are opaque, so nothing requires UUIDs.
pub fn demo_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "1".to_string(),
            name: "Arjun Patel".to_string(),
            age: 45,
            gender: "Male".to_string(),
            conditions: vec!["Hypertension".to_string(), "Type 2 Diabetes".to_string()],
            medications: vec![
                medication("101", "Lisinopril", "10mg", "Once daily", date(2023, 1, 15)),
                medication("102", "Metformin", "500mg", "Twice daily", date(2023, 2, 20)),
            ],
            mental_health_scores: vec![MentalHealthScore::new(date(2023, 3, 10), 3, 2, 4)],
        },
        Patient {
            id: "2".to_string(),
            name: "Priya Malhotra".to_string(),
            age: 38,
            gender: "Female".to_string(),
            conditions: vec!["Asthma".to_string(), "Allergic Rhinitis".to_string()],
            medications: vec![
                medication("201", "Albuterol", "90mcg", "As needed", date(2023, 1, 5)),
                medication("202", "Fluticasone", "50mcg", "Once daily", date(2023, 1, 10)),
            ],
            mental_health_scores: vec![MentalHealthScore::new(date(2023, 3, 15), 5, 3, 4)],
        },
        Patient {
            id: "3".to_string(),
            name: "Raj Sharma".to_string(),
            age: 52,
            gender: "Male".to_string(),
            conditions: vec![
                "Coronary Artery Disease".to_string(),
                "High Cholesterol".to_string(),
            ],
            medications: vec![
                medication("301", "Atorvastatin", "20mg", "Once daily", date(2023, 2, 10)),
                medication("302", "Aspirin", "81mg", "Once daily", date(2023, 2, 10)),
            ],
            mental_health_scores: vec![MentalHealthScore::new(date(2023, 4, 5), 2, 1, 3)],
        },
    ]
}
