//! Domain errors for storage settings binding.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single problem found while binding one settings field.
///
/// Field names are the kebab-case suffix of the settings key
/// (`account-name` for `azure.storage.account-name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A required key is absent.
    #[error("required setting '{field}' is missing")]
    MissingRequiredField {
        /// Offending field.
        field: &'static str,
    },

    /// A key is present with an empty value.
    #[error("setting '{field}' must not be empty")]
    EmptyValueNotAllowed {
        /// Offending field.
        field: &'static str,
    },

    /// A boolean key holds something other than `true`/`false`.
    #[error("setting '{field}' expects 'true' or 'false', got '{value}'")]
    InvalidBooleanFormat {
        /// Offending field.
        field: &'static str,
        /// Raw text as supplied.
        value: String,
    },
}

impl Violation {
    /// Name of the field this violation refers to.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { field }
            | Self::EmptyValueNotAllowed { field }
            | Self::InvalidBooleanFormat { field, .. } => field,
        }
    }
}

/// Every violation found during one bind, in schema order.
///
/// Never empty: a bind with no violations produces a config instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Wrap a non-empty list of violations. Returns `None` for an empty list.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Violations in schema order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether `violation` was reported.
    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Names of the offending fields, in report order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.violations.iter().map(Violation::field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage settings are invalid: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl IntoIterator for ValidationError {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// Errors raised while gathering raw settings, before any binding happens.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An entry had no `=`.
    #[error("malformed setting '{0}': expected KEY=VALUE")]
    MalformedPair(String),

    /// An entry had nothing before `=`.
    #[error("setting key must not be empty in '{0}'")]
    EmptyKey(String),

    /// A file source could not be read or parsed.
    #[error("failed to read settings source: {0}")]
    Source(#[from] Box<figment::Error>),
}

impl From<figment::Error> for SettingsError {
    fn from(err: figment::Error) -> Self {
        Self::Source(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_not_an_error() {
        assert!(ValidationError::from_violations(vec![]).is_none());
    }

    #[test]
    fn test_display_lists_every_violation() {
        let err = ValidationError::from_violations(vec![
            Violation::EmptyValueNotAllowed { field: "account-name" },
            Violation::InvalidBooleanFormat {
                field: "use-emulator",
                value: "maybe".to_string(),
            },
        ])
        .unwrap();

        let message = err.to_string();
        assert_eq!(
            message,
            "storage settings are invalid: setting 'account-name' must not be empty; \
             setting 'use-emulator' expects 'true' or 'false', got 'maybe'"
        );
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_fields_follow_report_order() {
        let err = ValidationError::from_violations(vec![
            Violation::MissingRequiredField { field: "account-key" },
            Violation::MissingRequiredField { field: "emulator-blob-host" },
        ])
        .unwrap();

        let fields: Vec<_> = err.fields().collect();
        assert_eq!(fields, vec!["account-key", "emulator-blob-host"]);
    }

    #[test]
    fn test_violation_serializes_with_kind_tag() {
        let json = serde_json::to_value(Violation::InvalidBooleanFormat {
            field: "use-emulator",
            value: "yes".to_string(),
        })
        .unwrap();

        assert_eq!(json["kind"], "invalid_boolean_format");
        assert_eq!(json["field"], "use-emulator");
        assert_eq!(json["value"], "yes");
    }
}
