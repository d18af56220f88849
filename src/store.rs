use std::sync::RwLock;

use thiserror::Error;

use crate::models::{Medication, MentalHealthScore, Patient, PatientUpdate};

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Patient not found: {0}")]
    NotFound(String),

    #[error("Patient id already present: {0}")]
    DuplicateId(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },

    #[error("Internal lock failed")]
    LockFailed,
}

// ---------------------------------------------------------------------------
// PatientStore
// ---------------------------------------------------------------------------

/// Canonical in-memory collection of patient records plus the "currently
/// selected" patient.
///
/// The selection is held by value: a snapshot handed out by
/// [`PatientStore::current_patient`] does not track later mutations. The
/// store itself refreshes its internal selection whenever a mutation hits
/// the selected record, so re-fetching always reflects the latest state.
///
/// Locks serialize access for multi-threaded hosts; the semantics are still
/// single-writer (no operation suspends mid-mutation).
pub struct PatientStore {
    patients: RwLock<Vec<Patient>>,
    current: RwLock<Option<Patient>>,
}

impl PatientStore {
    pub fn new() -> Self {
        Self {
            patients: RwLock::new(Vec::new()),
            current: RwLock::new(None),
        }
    }

    /// Build a store pre-populated with existing records (e.g. seed data or
    /// a persistence layer's snapshot).
    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self {
            patients: RwLock::new(patients),
            current: RwLock::new(None),
        }
    }

    /// Append a new patient. Rejects an id that is already present.
    pub fn add_patient(&self, patient: Patient) -> Result<(), StoreError> {
        let mut patients = self.patients.write().map_err(|_| StoreError::LockFailed)?;

        if patients.iter().any(|p| p.id == patient.id) {
            return Err(StoreError::DuplicateId(patient.id));
        }

        tracing::info!(patient_id = %patient.id, name = %patient.name, "Patient added");
        patients.push(patient);
        Ok(())
    }

    /// Merge the provided fields into the matching record. Returns the
    /// merged record.
    pub fn update_patient(
        &self,
        id: &str,
        update: PatientUpdate,
    ) -> Result<Patient, StoreError> {
        let mut patients = self.patients.write().map_err(|_| StoreError::LockFailed)?;

        let patient = patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        update.apply_to(patient);
        let merged = patient.clone();
        drop(patients);

        self.refresh_current(&merged)?;
        tracing::info!(patient_id = %id, "Patient updated");
        Ok(merged)
    }

    /// Append a medication to the patient's owned collection.
    pub fn add_medication(
        &self,
        patient_id: &str,
        medication: Medication,
    ) -> Result<(), StoreError> {
        let name = medication.name.clone();
        let updated = self.mutate(patient_id, |p| p.medications.push(medication))?;
        self.refresh_current(&updated)?;
        tracing::info!(patient_id = %patient_id, medication = %name, "Medication added");
        Ok(())
    }

    /// Append a mental-health assessment to the patient's owned collection.
    pub fn add_mental_health_score(
        &self,
        patient_id: &str,
        score: MentalHealthScore,
    ) -> Result<(), StoreError> {
        let updated = self.mutate(patient_id, |p| p.mental_health_scores.push(score))?;
        self.refresh_current(&updated)?;
        tracing::info!(patient_id = %patient_id, "Mental health assessment recorded");
        Ok(())
    }

    /// Select a patient (or clear the selection). The selection is a value
    /// copy of the supplied record.
    pub fn set_current_patient(&self, patient: Option<Patient>) -> Result<(), StoreError> {
        let mut current = self.current.write().map_err(|_| StoreError::LockFailed)?;
        *current = patient;
        Ok(())
    }

    /// Snapshot of the current selection.
    pub fn current_patient(&self) -> Result<Option<Patient>, StoreError> {
        let current = self.current.read().map_err(|_| StoreError::LockFailed)?;
        Ok(current.clone())
    }

    /// Snapshot of a single patient by id.
    pub fn get_patient(&self, id: &str) -> Result<Option<Patient>, StoreError> {
        let patients = self.patients.read().map_err(|_| StoreError::LockFailed)?;
        Ok(patients.iter().find(|p| p.id == id).cloned())
    }

    /// Snapshot of the whole collection, in insertion order.
    pub fn patients(&self) -> Result<Vec<Patient>, StoreError> {
        let patients = self.patients.read().map_err(|_| StoreError::LockFailed)?;
        Ok(patients.clone())
    }

    /// Apply a closure to the matching record and return the mutated copy.
    fn mutate(
        &self,
        patient_id: &str,
        f: impl FnOnce(&mut Patient),
    ) -> Result<Patient, StoreError> {
        let mut patients = self.patients.write().map_err(|_| StoreError::LockFailed)?;

        let patient = patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or_else(|| StoreError::NotFound(patient_id.to_string()))?;

        f(patient);
        Ok(patient.clone())
    }

    /// If the mutated record is the current selection, replace the selection
    /// with the fresh copy.
    fn refresh_current(&self, updated: &Patient) -> Result<(), StoreError> {
        let mut current = self.current.write().map_err(|_| StoreError::LockFailed)?;
        if let Some(selected) = current.as_ref() {
            if selected.id == updated.id {
                *current = Some(updated.clone());
            }
        }
        Ok(())
    }
}

impl Default for PatientStore {
    fn default() -> Self {
        Self::new()
    }
}
