//! Observability utilities.

mod logging;
mod summary;

pub use logging::{init_logging, LOG_ENV_VAR};
pub use summary::BuildSummary;
