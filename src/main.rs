//! azstore-config CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use azstore_config::cli::{handle_error, Cli, Commands, EXIT_INVALID};
use azstore_config::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: cli.log_level.clone(),
        format: cli.log_format,
    };
    if let Err(err) = LoggerImpl::init(&log_config) {
        return ExitCode::from(handle_error(&err, cli.json));
    }

    let result = match cli.command {
        Commands::Check(args) => azstore_config::cli::commands::check::execute(args, cli.json),
        Commands::Keys => {
            azstore_config::cli::commands::keys::execute(cli.json);
            Ok(true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(err) => ExitCode::from(handle_error(&err, cli.json)),
    }
}
