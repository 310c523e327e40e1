//! The validated storage configuration.

use std::fmt;

use serde::{Serialize, Serializer};

/// Account name used by the local storage emulator.
pub const EMULATOR_ACCOUNT_NAME: &str = "devstoreaccount1";

/// Published, well-known key of the emulator's development account.
pub const EMULATOR_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";

const BLOB_ENDPOINT_SUFFIX: &str = "core.windows.net";

/// Validated Azure Storage settings.
///
/// Only [`crate::ConfigBinder`] constructs this type, so any instance that
/// exists has passed validation. Fields are read-only after binding.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct StorageConfig {
    account_name: String,
    #[serde(serialize_with = "redact")]
    account_key: String,
    container_name: Option<String>,
    use_emulator: bool,
    emulator_blob_host: Option<String>,
}

impl StorageConfig {
    pub(crate) const fn new(
        account_name: String,
        account_key: String,
        container_name: Option<String>,
        use_emulator: bool,
        emulator_blob_host: Option<String>,
    ) -> Self {
        Self {
            account_name,
            account_key,
            container_name,
            use_emulator,
            emulator_blob_host,
        }
    }

    /// Storage account name.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Base64 account key, exactly as supplied. Never decoded here.
    pub fn account_key(&self) -> &str {
        &self.account_key
    }

    /// Default container, if one was configured.
    pub fn container_name(&self) -> Option<&str> {
        self.container_name.as_deref()
    }

    /// Whether requests target the local emulator.
    pub const fn use_emulator(&self) -> bool {
        self.use_emulator
    }

    /// Emulator blob host URL, if one was configured.
    pub fn emulator_blob_host(&self) -> Option<&str> {
        self.emulator_blob_host.as_deref()
    }

    /// Base URL of the blob service for this account.
    pub fn blob_endpoint(&self) -> String {
        match self.emulator_host() {
            Some(host) => format!("{}/{}", host.trim_end_matches('/'), self.account_name),
            None => format!(
                "https://{}.blob.{BLOB_ENDPOINT_SUFFIX}",
                self.account_name
            ),
        }
    }

    /// Connection string in the form storage SDKs accept.
    ///
    /// Contains the account key in clear text; do not log it.
    pub fn connection_string(&self) -> String {
        if self.emulator_host().is_some() {
            format!(
                "DefaultEndpointsProtocol=http;AccountName={};AccountKey={};BlobEndpoint={};",
                self.account_name,
                self.account_key,
                self.blob_endpoint()
            )
        } else {
            format!(
                "DefaultEndpointsProtocol=https;AccountName={};AccountKey={};EndpointSuffix={BLOB_ENDPOINT_SUFFIX}",
                self.account_name, self.account_key
            )
        }
    }

    fn emulator_host(&self) -> Option<&str> {
        if self.use_emulator {
            self.emulator_blob_host.as_deref()
        } else {
            None
        }
    }
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("account_name", &self.account_name)
            .field("account_key", &"[REDACTED]")
            .field("container_name", &self.container_name)
            .field("use_emulator", &self.use_emulator)
            .field("emulator_blob_host", &self.emulator_blob_host)
            .finish()
    }
}

fn redact<S: Serializer>(_: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("[REDACTED]")
}
