//! Domain models for storage settings.

pub mod settings;
pub mod storage;

pub use settings::{parse_pair, Settings};
pub use storage::{StorageConfig, EMULATOR_ACCOUNT_KEY, EMULATOR_ACCOUNT_NAME};
