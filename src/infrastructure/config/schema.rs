//! Recognised storage settings keys.

use serde::Serialize;

/// Prefix shared by every storage settings key.
pub const KEY_PREFIX: &str = "azure.storage.";

/// Field name of the storage account name.
pub const ACCOUNT_NAME: &str = "account-name";
/// Field name of the base64 account key.
pub const ACCOUNT_KEY: &str = "account-key";
/// Field name of the default container.
pub const CONTAINER_NAME: &str = "container-name";
/// Field name of the emulator switch.
pub const USE_EMULATOR: &str = "use-emulator";
/// Field name of the emulator blob host URL.
pub const EMULATOR_BLOB_HOST: &str = "emulator-blob-host";

/// How a raw string value is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Taken as-is.
    Text,
    /// `true` or `false`.
    Boolean,
}

/// When a field has to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Always required.
    Required,
    /// Never required.
    Optional,
    /// Required unless emulator mode supplies a default.
    RequiredUnlessEmulator,
    /// Required only when emulator mode is on.
    RequiredWithEmulator,
}

impl Requirement {
    /// Whether an absent value is a violation.
    pub const fn is_required(self, use_emulator: bool) -> bool {
        match self {
            Self::Required => true,
            Self::Optional => false,
            Self::RequiredUnlessEmulator => !use_emulator,
            Self::RequiredWithEmulator => use_emulator,
        }
    }

    /// Whether a present-but-empty value is a violation. Optional text
    /// fields treat an empty value as unset.
    pub const fn rejects_empty(self, use_emulator: bool) -> bool {
        match self {
            Self::Required | Self::RequiredUnlessEmulator => true,
            Self::Optional => false,
            Self::RequiredWithEmulator => use_emulator,
        }
    }

    /// Short human-readable form for listings.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Required => "yes",
            Self::Optional => "no",
            Self::RequiredUnlessEmulator => "yes (unless emulator)",
            Self::RequiredWithEmulator => "if use-emulator=true",
        }
    }
}

/// One row of the settings schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Kebab-case name used in violations.
    pub name: &'static str,
    /// Full dotted settings key.
    pub key: &'static str,
    /// Value coercion.
    pub kind: FieldKind,
    /// When the field must be present.
    pub requirement: Requirement,
    /// Value used when the field is unset, for display.
    pub default: Option<&'static str>,
}

/// Schema rows in the order violations are reported.
pub const FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: ACCOUNT_NAME,
        key: "azure.storage.account-name",
        kind: FieldKind::Text,
        requirement: Requirement::RequiredUnlessEmulator,
        default: None,
    },
    FieldSpec {
        name: ACCOUNT_KEY,
        key: "azure.storage.account-key",
        kind: FieldKind::Text,
        requirement: Requirement::RequiredUnlessEmulator,
        default: None,
    },
    FieldSpec {
        name: CONTAINER_NAME,
        key: "azure.storage.container-name",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
    },
    FieldSpec {
        name: USE_EMULATOR,
        key: "azure.storage.use-emulator",
        kind: FieldKind::Boolean,
        requirement: Requirement::Optional,
        default: Some("false"),
    },
    FieldSpec {
        name: EMULATOR_BLOB_HOST,
        key: "azure.storage.emulator-blob-host",
        kind: FieldKind::Text,
        requirement: Requirement::RequiredWithEmulator,
        default: None,
    },
];

/// Look up a schema row by field name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// Strict `true`/`false`, ignoring ASCII case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
