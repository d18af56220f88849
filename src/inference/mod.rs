pub mod adr;
pub mod engine;
pub mod prediction;
pub mod priority;
pub mod types;

pub use adr::detect_adr;
pub use engine::InferenceEngine;
pub use prediction::predict_conditions;
pub use priority::classify;
pub use types::{AdrResult, InferenceReport, PredictionResult};
