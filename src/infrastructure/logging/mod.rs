//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber, JSON or
//! human-readable, written to stderr.

mod config;
mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
