//! Command handlers (imperative shell)

pub mod config;
pub mod info;
pub mod launch;
