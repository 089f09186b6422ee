//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Job orchestration API client
#[derive(Parser, Debug)]
#[command(name = "trigger-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (falls back to TRIGGER_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API base URL (falls back to TRIGGER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(short, long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that an API key is configured and well formed
    CheckKey,

    /// Show a run and its tasks
    GetRun {
        /// Run id
        run_id: String,

        /// Include subtasks
        #[arg(long)]
        subtasks: bool,

        /// Task page cursor
        #[arg(long)]
        cursor: Option<String>,

        /// Task page size
        #[arg(long)]
        take: Option<u32>,

        /// Include task details
        #[arg(long)]
        task_details: bool,
    },

    /// List a job's runs
    ListRuns {
        /// Job slug
        job_slug: String,

        /// Page cursor
        #[arg(long)]
        cursor: Option<String>,

        /// Page size
        #[arg(long)]
        take: Option<u32>,
    },

    /// Show a run's statuses
    RunStatuses {
        /// Run id
        run_id: String,
    },

    /// Cancel a run
    CancelRun {
        /// Run id
        run_id: String,
    },

    /// Show an event and the runs it triggered
    GetEvent {
        /// Event id
        id: String,
    },

    /// Cancel a delayed event
    CancelEvent {
        /// Event id
        id: String,
    },

    /// Send an event
    SendEvent {
        /// Event name
        name: String,

        /// Event payload (JSON)
        #[arg(long, default_value = "{}")]
        payload: String,

        /// Event id
        #[arg(long)]
        id: Option<String>,
    },
}
