//! Command-line argument parsing.

use crate::controller::ViewKind;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run one fetch cycle for a view and print it as JSON
    Snapshot(ViewKind),
    /// Arguments could not be understood
    Invalid(String),
    /// Run the TUI application (default)
    RunTui,
}

pub const USAGE: &str = "\
Usage: feedboard [OPTIONS]

Options:
  --snapshot <VIEW>  Print one view as JSON and exit (top-users, trending, feed)
  -V, --version      Print version
  -h, --help         Print this help

Environment:
  FEEDBOARD_API_URL       API base URL
  FEEDBOARD_TIMEOUT_SECS  Request timeout in seconds (default 10)
  FEEDBOARD_REFRESH_SECS  Feed refresh interval in seconds (default 30)
  FEEDBOARD_TOP_USERS     Number of top users shown (default 5)
  FEEDBOARD_LOG           Log filter, e.g. debug or feedboard=trace";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use feedboard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["feedboard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--snapshot" => {
                return match args.next() {
                    Some(route) => match ViewKind::from_route(&route) {
                        Some(view) => CliCommand::Snapshot(view),
                        None => CliCommand::Invalid(format!("unknown view '{}'", route)),
                    },
                    None => CliCommand::Invalid("--snapshot needs a view name".to_string()),
                };
            }
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["feedboard".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_snapshot() {
        assert_eq!(parse(&["--snapshot", "feed"]), CliCommand::Snapshot(ViewKind::Feed));
        assert_eq!(
            parse(&["--snapshot", "top-users"]),
            CliCommand::Snapshot(ViewKind::TopUsers)
        );
    }

    #[test]
    fn test_parse_snapshot_errors() {
        assert!(matches!(parse(&["--snapshot"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--snapshot", "home"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_no_args_and_unknown_flag() {
        assert_eq!(parse(&[]), CliCommand::RunTui);
        assert_eq!(parse(&["--unknown"]), CliCommand::RunTui);
    }
}
