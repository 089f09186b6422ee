//! CLI module
//!
//! Command-line access to the job orchestration API.
//!
//! # Commands
//!
//! - `check-key` - Validate the configured API key without a network call
//! - `get-run` / `list-runs` / `run-statuses` / `cancel-run` - Inspect and control runs
//! - `get-event` / `cancel-event` / `send-event` - Work with events

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
