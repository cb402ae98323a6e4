//! CLI handling that runs before the TUI.
//!
//! ```ignore
//! use campus_portal::cli::{parse_args, cli_output};
//!
//! if let Some(text) = cli_output(&parse_args(std::env::args())) {
//!     println!("{text}");
//!     return Ok(());
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage_text, version_text, VERSION};

/// Text to print for a CLI-only command, or `None` when the TUI should run.
pub fn cli_output(command: &CliCommand) -> Option<String> {
    match command {
        CliCommand::Version => Some(version_text()),
        CliCommand::Help => Some(usage_text()),
        CliCommand::RunTui => None,
    }
}
