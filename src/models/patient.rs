use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::medication::Medication;
use super::mental_health::MentalHealthScore;

/// A patient record.
///
/// `medications` and `mental_health_scores` are owned collections: no other
/// entity holds authoritative copies, and any cached view (the store's
/// current selection) must be resynchronized after mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Opaque string id, immutable once created.
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    /// Free-form condition names, ordered, duplicates allowed.
    pub conditions: Vec<String>,
    pub medications: Vec<Medication>,
    /// Append-only, chronological by insertion.
    pub mental_health_scores: Vec<MentalHealthScore>,
}

impl Patient {
    /// Registration: assigns a fresh id and empty owned collections.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        conditions: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            age,
            gender: gender.into(),
            conditions,
            medications: Vec::new(),
            mental_health_scores: Vec::new(),
        }
    }

    /// Last-appended assessment, if any. Deliberately not latest-by-date.
    pub fn latest_score(&self) -> Option<&MentalHealthScore> {
        self.mental_health_scores.last()
    }
}

/// Partial patient update. `Some` fields are merged into the record; the id
/// is immutable and the owned collections change only through the store's
/// append operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<String>>,
}

impl PatientUpdate {
    /// Merge the provided fields into `patient`.
    pub fn apply_to(&self, patient: &mut Patient) {
        if let Some(name) = &self.name {
            patient.name = name.clone();
        }
        if let Some(age) = self.age {
            patient.age = age;
        }
        if let Some(gender) = &self.gender {
            patient.gender = gender.clone();
        }
        if let Some(conditions) = &self.conditions {
            patient.conditions = conditions.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_patient_starts_empty() {
        let patient = Patient::new("Arjun Patel", 45, "Male", vec!["Hypertension".into()]);
        assert!(!patient.id.is_empty());
        assert!(patient.medications.is_empty());
        assert!(patient.mental_health_scores.is_empty());
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut patient = Patient::new("Arjun Patel", 45, "Male", vec![]);
        let id = patient.id.clone();

        PatientUpdate {
            age: Some(46),
            ..Default::default()
        }
        .apply_to(&mut patient);

        assert_eq!(patient.age, 46);
        assert_eq!(patient.name, "Arjun Patel");
        assert_eq!(patient.id, id);
    }

    #[test]
    fn serializes_camel_case() {
        let patient = Patient::new("Priya Malhotra", 38, "Female", vec!["Asthma".into()]);
        let json = serde_json::to_value(&patient).unwrap();
        assert!(json.get("mentalHealthScores").is_some());
        assert!(json.get("mental_health_scores").is_none());
    }
}
