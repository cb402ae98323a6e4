//! Command-line argument parsing.
//!
//! The portal takes no options beyond version and help; anything else
//! starts the TUI.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the command to run.
///
/// The first element is the program name and is skipped. The first
/// recognised flag wins.
///
/// # Examples
///
/// ```
/// use campus_portal::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["campus-portal".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}
