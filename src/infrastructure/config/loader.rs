//! Layered settings loading: YAML files, environment, explicit overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde_json::Value;
use tracing::{debug, instrument};

use super::binder::ConfigBinder;
use super::schema::KEY_PREFIX;
use crate::domain::models::{Settings, StorageConfig};
use crate::domain::SettingsError;

/// Default environment prefix: `AZURE_STORAGE_ACCOUNT_NAME` maps to
/// `azure.storage.account-name`.
pub const ENV_PREFIX: &str = "AZURE_STORAGE_";

/// Gathers a [`Settings`] snapshot from layered sources.
///
/// Precedence (lowest to highest):
/// 1. YAML files, in the order they were added
/// 2. Environment variables (`AZURE_STORAGE_*`), unless disabled
/// 3. Explicit `KEY=VALUE` overrides
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    files: Vec<PathBuf>,
    env_prefix: Option<String>,
    overrides: Settings,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            env_prefix: Some(ENV_PREFIX.to_string()),
            overrides: Settings::new(),
        }
    }
}

impl SettingsLoader {
    /// Loader with no files, the default environment prefix, and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a YAML file. A missing file contributes nothing.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Read environment variables with a custom prefix instead of `AZURE_STORAGE_`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Skip environment variables entirely.
    #[must_use]
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Values here are taken verbatim and win over every other source.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Settings) -> Self {
        self.overrides.merge(overrides);
        self
    }

    /// Add a single verbatim override.
    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key, value);
        self
    }

    /// The layered figment for the YAML file sources.
    pub fn figment(&self) -> Figment {
        self.files
            .iter()
            .fold(Figment::new(), |figment, path| figment.merge(Yaml::file(path)))
    }

    /// Environment variables under the configured prefix, values verbatim.
    ///
    /// Read through the raw iterator so `007` stays `007` instead of going
    /// through figment's value parser.
    pub fn env_settings(&self) -> Settings {
        let Some(prefix) = &self.env_prefix else {
            return Settings::new();
        };

        Env::prefixed(prefix)
            .iter()
            .map(|(key, value)| {
                let name = key.as_str().to_ascii_lowercase().replace('_', "-");
                (format!("{KEY_PREFIX}{name}"), value)
            })
            .collect()
    }

    /// Collect every layer into one snapshot, later layers winning.
    #[instrument(skip(self), fields(files = self.files.len(), env = self.env_prefix.is_some()))]
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let tree: Value = self.figment().extract()?;

        let mut settings = Settings::new();
        flatten("", &tree, &mut settings);
        debug!(keys = settings.len(), "collected settings from files");

        let env = self.env_settings();
        debug!(keys = env.len(), "collected settings from environment");
        settings.merge(env);

        settings.merge(self.overrides.clone());
        Ok(settings)
    }

    /// Load and bind in one step.
    pub fn bind(&self) -> Result<StorageConfig> {
        let settings = self.load().context("Failed to load storage settings")?;
        ConfigBinder::bind(&settings).context("Failed to bind storage settings")
    }
}

/// Flatten a nested tree into dotted keys with string values.
fn flatten(prefix: &str, value: &Value, out: &mut Settings) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::Null => {}
        _ if prefix.is_empty() => {}
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(render_scalar)
                .collect::<Vec<_>>()
                .join(",");
            out.insert(prefix, joined);
        }
        scalar => {
            if let Some(rendered) = render_scalar(scalar) {
                out.insert(prefix, rendered);
            }
        }
    }
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
