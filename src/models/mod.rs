pub mod enums;
pub mod medication;
pub mod mental_health;
pub mod patient;

pub use enums::{PriorityTier, Severity};
pub use medication::Medication;
pub use mental_health::MentalHealthScore;
pub use patient::{Patient, PatientUpdate};
