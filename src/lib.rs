//! Arogya clinical inference core.
//!
//! The crate holds the decision logic of a patient-record management tool:
//! an in-memory patient store plus three deterministic rule-evaluation
//! subsystems (adverse-drug-reaction detection, condition prediction, and
//! priority classification). Presentation, persistence, and transport live
//! in the host application; this crate consumes patient snapshots and emits
//! structured result lists.

pub mod config;
pub mod models;
pub mod store;
pub mod inference;
pub mod seed;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a host that has no subscriber of its own.
/// Honors `RUST_LOG`, falling back to the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Arogya core starting v{}", config::APP_VERSION);
}
