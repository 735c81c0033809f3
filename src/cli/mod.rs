//! CLI module for Feedboard.
//!
//! The dispatcher runs before the TUI starts: flags that produce output
//! (`--version`, `--help`, `--snapshot`) are handled here and the process
//! exits without touching the terminal.
//!
//! ```ignore
//! use feedboard::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &config) {
//!     // CLI command was executed, exit with result
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod snapshot;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use snapshot::write_snapshot;
pub use version::{version_line, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::sync::Arc;

use crate::adapters::PlaceholderImages;
use crate::client::ApiClient;
use crate::config::DashboardConfig;
use crate::controller::ViewKind;
use crate::pipeline::Pipeline;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: CliCommand, config: &DashboardConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        CliCommand::Snapshot(view) => Some(run_snapshot(view, config)),
        CliCommand::RunTui => None,
    }
}

fn run_snapshot(view: ViewKind, config: &DashboardConfig) -> Result<()> {
    let client = ApiClient::from_config(config)?;
    let pipeline = Pipeline::new(client, Arc::new(PlaceholderImages::new()), config);

    let runtime = tokio::runtime::Runtime::new()?;
    let mut stdout = std::io::stdout().lock();
    runtime.block_on(write_snapshot(&pipeline, view, &mut stdout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        let result = run_cli_command(CliCommand::RunTui, &DashboardConfig::default());
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_command_is_an_error() {
        let result = run_cli_command(
            CliCommand::Invalid("bad".to_string()),
            &DashboardConfig::default(),
        );
        assert!(matches!(result, Some(Err(_))));
    }
}
