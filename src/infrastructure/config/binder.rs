//! Binding a settings snapshot into a validated `StorageConfig`.

use std::collections::BTreeMap;

use tracing::{debug, info, instrument, warn};

use super::schema::{
    self, FieldKind, ACCOUNT_KEY, ACCOUNT_NAME, CONTAINER_NAME, EMULATOR_BLOB_HOST, FIELDS,
    KEY_PREFIX, USE_EMULATOR,
};
use crate::domain::models::{
    Settings, StorageConfig, EMULATOR_ACCOUNT_KEY, EMULATOR_ACCOUNT_NAME,
};
use crate::domain::{ValidationError, Violation};

/// Binds a flat settings snapshot into a [`StorageConfig`].
///
/// Binding is pure: no I/O, no shared state. Every violation in the snapshot
/// is reported in one [`ValidationError`], in schema order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigBinder;

impl ConfigBinder {
    /// Validate `settings` and build the config, or report every violation.
    #[instrument(skip_all, fields(settings = settings.len()))]
    pub fn bind(settings: &Settings) -> Result<StorageConfig, ValidationError> {
        warn_unknown_keys(settings);

        let use_emulator = emulator_flag(settings);
        let mut violations = Vec::new();
        let mut text: BTreeMap<&'static str, String> = BTreeMap::new();

        for spec in &FIELDS {
            let raw = settings.get(spec.key);
            match (spec.kind, raw) {
                (FieldKind::Boolean, Some(value))
                    if !value.is_empty() && schema::parse_bool(value).is_none() =>
                {
                    violations.push(Violation::InvalidBooleanFormat {
                        field: spec.name,
                        value: value.to_string(),
                    });
                }
                (FieldKind::Boolean, _) => {}
                (FieldKind::Text, None) => {
                    if let Some(default) = emulator_default(spec.name, use_emulator) {
                        text.insert(spec.name, default.to_string());
                    } else if spec.requirement.is_required(use_emulator) {
                        violations.push(Violation::MissingRequiredField { field: spec.name });
                    }
                }
                (FieldKind::Text, Some("")) => {
                    if spec.requirement.rejects_empty(use_emulator) {
                        violations.push(Violation::EmptyValueNotAllowed { field: spec.name });
                    }
                }
                (FieldKind::Text, Some(value)) => {
                    text.insert(spec.name, value.to_string());
                }
            }
        }

        if let Some(err) = ValidationError::from_violations(violations) {
            for violation in err.violations() {
                debug!(field = violation.field(), %violation, "storage setting rejected");
            }
            return Err(err);
        }

        // Required fields are present here; the loop recorded a violation otherwise.
        let config = StorageConfig::new(
            text.remove(ACCOUNT_NAME).unwrap_or_default(),
            text.remove(ACCOUNT_KEY).unwrap_or_default(),
            text.remove(CONTAINER_NAME),
            use_emulator,
            text.remove(EMULATOR_BLOB_HOST),
        );

        info!(
            account = config.account_name(),
            container = ?config.container_name(),
            use_emulator = config.use_emulator(),
            "storage settings bound"
        );

        Ok(config)
    }
}

/// Emulator mode as far as the other fields are concerned. An unparsable
/// flag is reported by the main loop and counts as off here.
fn emulator_flag(settings: &Settings) -> bool {
    let key = schema::field(USE_EMULATOR).map_or("", |spec| spec.key);
    settings
        .get(key)
        .and_then(schema::parse_bool)
        .unwrap_or(false)
}

fn emulator_default(name: &str, use_emulator: bool) -> Option<&'static str> {
    if !use_emulator {
        return None;
    }
    match name {
        ACCOUNT_NAME => Some(EMULATOR_ACCOUNT_NAME),
        ACCOUNT_KEY => Some(EMULATOR_ACCOUNT_KEY),
        _ => None,
    }
}

/// Unknown keys never fail a bind, but a typo under our prefix is worth a warning.
fn warn_unknown_keys(settings: &Settings) {
    for (key, _) in settings.iter() {
        if key.starts_with(KEY_PREFIX) && !FIELDS.iter().any(|spec| spec.key == key) {
            warn!(key, "ignoring unrecognised storage setting");
        }
    }
}
