//! Implementation of the `azstore-config check` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::cli::output::{output, supports_color, CommandOutput};
use crate::domain::models::{parse_pair, Settings, StorageConfig};
use crate::domain::{ValidationError, Violation};
use crate::infrastructure::config::SettingsLoader;

/// Arguments of `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// YAML settings file; may be repeated, later files win
    #[arg(long = "file", short = 'f', value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Setting override, e.g. azure.storage.account-name=myaccount
    #[arg(long = "set", short = 's', value_name = "KEY=VALUE", value_parser = parse_set)]
    pub overrides: Vec<(String, String)>,

    /// Ignore AZURE_STORAGE_* environment variables
    #[arg(long)]
    pub no_env: bool,
}

fn parse_set(raw: &str) -> Result<(String, String), String> {
    parse_pair(raw).map_err(|e| e.to_string())
}

/// Outcome of `check`.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// Whether binding succeeded.
    pub success: bool,
    /// Bound configuration, key redacted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<StorageConfig>,
    /// Derived blob service URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_endpoint: Option<String>,
    /// Every reported violation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl CheckOutput {
    fn valid(config: StorageConfig) -> Self {
        Self {
            success: true,
            blob_endpoint: Some(config.blob_endpoint()),
            config: Some(config),
            violations: vec![],
        }
    }

    fn invalid(violations: Vec<Violation>) -> Self {
        Self {
            success: false,
            config: None,
            blob_endpoint: None,
            violations,
        }
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let color = supports_color();
        let mut lines = vec![];

        if let Some(config) = &self.config {
            let header = "Storage settings are valid";
            lines.push(if color {
                style(header).green().bold().to_string()
            } else {
                header.to_string()
            });
            lines.push(format!("  account name:   {}", config.account_name()));
            lines.push("  account key:    [REDACTED]".to_string());
            lines.push(format!(
                "  container name: {}",
                config.container_name().unwrap_or("-")
            ));
            lines.push(format!("  use emulator:   {}", config.use_emulator()));
            if let Some(host) = config.emulator_blob_host() {
                lines.push(format!("  emulator host:  {host}"));
            }
            if let Some(endpoint) = &self.blob_endpoint {
                lines.push(format!("  blob endpoint:  {endpoint}"));
            }
        } else {
            let header = format!("Storage settings are invalid ({} problem(s))", self.violations.len());
            lines.push(if color {
                style(header).red().bold().to_string()
            } else {
                header
            });
            for violation in &self.violations {
                lines.push(format!("  - {violation}"));
            }
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Load, bind, and print. Returns whether the settings were valid.
///
/// Violations are printed as command output; only loading failures are
/// returned as errors.
pub fn execute(args: CheckArgs, json_mode: bool) -> Result<bool> {
    let output_data = match loader(&args).bind() {
        Ok(config) => CheckOutput::valid(config),
        Err(err) => match err.downcast::<ValidationError>() {
            Ok(validation) => CheckOutput::invalid(validation.into_iter().collect()),
            Err(other) => return Err(other),
        },
    };

    output(&output_data, json_mode);
    Ok(output_data.success)
}

fn loader(args: &CheckArgs) -> SettingsLoader {
    let mut loader = SettingsLoader::new();
    for path in &args.files {
        loader = loader.with_file(path);
    }
    if args.no_env {
        loader = loader.without_env();
    }
    let overrides: Settings = args.overrides.iter().cloned().collect();
    loader.with_overrides(overrides)
}
