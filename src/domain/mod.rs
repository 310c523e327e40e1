//! Domain layer for storage settings binding
//!
//! Pure types with no I/O: the raw settings snapshot, the validated
//! configuration, and the violations binding can report.

pub mod errors;
pub mod models;

pub use errors::{SettingsError, ValidationError, Violation};
