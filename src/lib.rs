//! azstore-config - Azure Storage settings binding
//!
//! Turns a flat snapshot of string settings (`azure.storage.account-name`,
//! `azure.storage.use-emulator`, ...) into a validated, immutable
//! [`StorageConfig`], or an aggregated [`ValidationError`] listing every
//! problem at once.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): settings snapshot, config, and violations
//! - **Infrastructure Layer** (`infrastructure`): schema, binder, layered
//!   loading, and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use azstore_config::{ConfigBinder, Settings};
//!
//! let settings = Settings::from_pairs([
//!     "azure.storage.account-name=fakeStorageAccountName",
//!     "azure.storage.account-key=ZmFrZUFjY291bnRLZXk=",
//! ])
//! .unwrap();
//!
//! let config = ConfigBinder::bind(&settings).unwrap();
//! assert_eq!(config.account_name(), "fakeStorageAccountName");
//! assert!(!config.use_emulator());
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{Settings, StorageConfig, EMULATOR_ACCOUNT_KEY, EMULATOR_ACCOUNT_NAME};
pub use domain::{SettingsError, ValidationError, Violation};
pub use infrastructure::config::{ConfigBinder, SettingsLoader};
