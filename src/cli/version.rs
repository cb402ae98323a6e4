//! Version and usage text.

use crate::startup::config::{
    ENV_CONTACT_URL, ENV_EVENTS_SHEET, ENV_FAQ_SHEET, ENV_LOG, ENV_LOG_FILE, ENV_SCHEDULE_SHEET,
    ENV_SHEET_URL, ENV_SPLASH_MS, ENV_TIMEOUT_SECS,
};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("campus-portal {}", VERSION)
}

pub fn usage_text() -> String {
    format!(
        "campus-portal {VERSION}\n\
         Terminal student portal: class rooms, events and FAQ.\n\
         \n\
         USAGE:\n    campus-portal [--help | --version]\n\
         \n\
         ENVIRONMENT:\n\
         \x20   {ENV_SHEET_URL:<22} base URL of the sheet service (required)\n\
         \x20   {ENV_SCHEDULE_SHEET:<22} schedule sheet name [Ensalamento]\n\
         \x20   {ENV_EVENTS_SHEET:<22} events sheet name [Eventos]\n\
         \x20   {ENV_FAQ_SHEET:<22} FAQ sheet name [FAQ]\n\
         \x20   {ENV_SPLASH_MS:<22} splash delay in milliseconds [2000]\n\
         \x20   {ENV_TIMEOUT_SECS:<22} HTTP timeout in seconds [15]\n\
         \x20   {ENV_CONTACT_URL:<22} contact link shown in the header\n\
         \x20   {ENV_LOG:<22} log filter [campus_portal=info]\n\
         \x20   {ENV_LOG_FILE:<22} log file path\n"
    )
}
