//! Infrastructure layer module
//!
//! - Configuration binding and layered settings loading
//! - Logging infrastructure

pub mod config;
pub mod logging;
