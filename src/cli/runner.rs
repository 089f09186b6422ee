//! CLI runner - executes commands

use crate::api::ApiClient;
use crate::cli::commands::{Cli, Commands};
use crate::config::ClientConfig;
use crate::models::{GetRunOptions, GetRunsOptions, SendEvent, SendEventOptions};
use crate::types::LogLevel;
use anyhow::Context;
use serde::Serialize;
use serde_json::{json, Value};

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: ClientConfig,
}

impl Runner {
    /// Create a runner, loading the config file and applying flag overrides
    pub fn new(cli: Cli) -> anyhow::Result<Self> {
        let config = resolve_config(&cli)?;
        Ok(Self { cli, config })
    }

    /// Effective log level
    pub fn log_level(&self) -> LogLevel {
        self.config.log_level.unwrap_or_default()
    }

    /// Effective client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run the CLI command
    pub async fn run(&self) -> anyhow::Result<()> {
        let client = ApiClient::new(self.config.clone())?;

        match &self.cli.command {
            Commands::CheckKey => {
                let api_key = client.api_key()?;
                print_json(&json!({
                    "valid": true,
                    "environment": api_key.environment(),
                    "apiUrl": client.base_url().as_str(),
                }))
            }
            Commands::GetRun {
                run_id,
                subtasks,
                cursor,
                take,
                task_details,
            } => {
                let options = GetRunOptions {
                    subtasks: subtasks.then_some(true),
                    cursor: cursor.clone(),
                    take: *take,
                    task_details: task_details.then_some(true),
                };
                print_json(&client.get_run(run_id, &options).await?)
            }
            Commands::ListRuns {
                job_slug,
                cursor,
                take,
            } => {
                let options = GetRunsOptions {
                    cursor: cursor.clone(),
                    take: *take,
                };
                print_json(&client.get_runs(job_slug, &options).await?)
            }
            Commands::RunStatuses { run_id } => {
                print_json(&client.get_run_statuses(run_id).await?)
            }
            Commands::CancelRun { run_id } => print_json(&client.cancel_run(run_id).await?),
            Commands::GetEvent { id } => print_json(&client.get_event(id).await?),
            Commands::CancelEvent { id } => print_json(&client.cancel_event(id).await?),
            Commands::SendEvent { name, payload, id } => {
                let payload: Value =
                    serde_json::from_str(payload).context("--payload is not valid JSON")?;
                let mut event = SendEvent::new(name.as_str(), payload);
                event.id.clone_from(id);
                print_json(
                    &client
                        .send_event(&event, &SendEventOptions::default())
                        .await?,
                )
            }
        }
    }
}

/// Merge the optional config file with command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };

    if let Some(api_key) = &cli.api_key {
        config.api_key = Some(api_key.clone());
    }
    if let Some(api_url) = &cli.api_url {
        config.api_url = Some(api_url.clone());
    }
    if let Some(level) = cli.log_level {
        config.log_level = Some(level);
    }

    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
