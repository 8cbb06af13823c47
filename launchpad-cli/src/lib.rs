//! Launchpad CLI Library
//!
//! Terminal front end for the token launch workflow in `lib-launchpad`.
//!
//! ## Architecture
//!
//! - **Functional Core** (`logic/`): settings resolution, form filling and
//!   outcome shaping, all pure
//! - **Imperative Shell** (`commands/`): wallet construction, workflow
//!   execution and printing
//! - **Errors** (`error`): structured CLI error type
//! - **Output** (`output`): testable printing interface

pub mod argument_parsing;
pub mod cli_config;
pub mod commands;

pub mod error;
pub mod logic;
pub mod output;

// Re-export main types for public use
pub use argument_parsing::{run_cli, LaunchpadCli, LaunchpadCommand};
pub use error::{CliError, CliResult};
pub use output::Output;

/// Launchpad CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
