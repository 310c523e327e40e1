//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

/// Process exit code for a bind that reported violations.
pub const EXIT_INVALID: u8 = 2;

/// Process exit code for any other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Print an error that stopped a command and return [`EXIT_FAILURE`].
///
/// Validation problems are not errors here: commands print them as output
/// and exit with [`EXIT_INVALID`].
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> u8 {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }

    EXIT_FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_error_exits_with_failure() {
        let err = anyhow::anyhow!("Failed to load storage settings");
        assert_eq!(handle_error(&err, true), EXIT_FAILURE);
        assert_eq!(handle_error(&err, false), EXIT_FAILURE);
    }
}
