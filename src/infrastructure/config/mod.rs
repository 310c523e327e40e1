//! Configuration binding infrastructure
//!
//! - Settings schema (recognised keys, kinds, requirements)
//! - Binding a flat settings snapshot into a validated `StorageConfig`
//! - Layered loading from YAML files, environment, and overrides via figment

pub mod binder;
pub mod loader;
pub mod schema;

pub use binder::ConfigBinder;
pub use loader::{SettingsLoader, ENV_PREFIX};
pub use schema::{FieldKind, FieldSpec, Requirement, FIELDS};
