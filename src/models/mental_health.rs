use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single mental-health assessment entry.
///
/// Scores are integers in [0, 10]. Entries carry no identity field and are
/// ordered by append order within the owning patient; "latest" always means
/// last-appended, not latest-by-date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentalHealthScore {
    pub date: NaiveDate,
    pub anxiety_score: u8,
    pub depression_score: u8,
    pub stress_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MentalHealthScore {
    pub fn new(date: NaiveDate, anxiety: u8, depression: u8, stress: u8) -> Self {
        Self {
            date,
            anxiety_score: anxiety,
            depression_score: depression,
            stress_score: stress,
            notes: None,
        }
    }
}
