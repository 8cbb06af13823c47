//! Pure functional business logic
//!
//! Functions here take inputs and return outputs; no I/O, no printing,
//! no network. The `commands/` shell composes them.

pub mod config;
pub mod launch;

// Re-export commonly used types
pub use config::{resolve_settings, validate_log_level, validate_rpc_url, OutputFormat, Settings};
pub use launch::{build_form, lock_advisory, outcome_json};
