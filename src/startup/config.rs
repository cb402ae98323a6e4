//! Portal configuration.
//!
//! Settings come from `PORTAL_*` environment variables. Only the sheet
//! service base URL is required; everything else has a default.

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::SheetNames;
use crate::error::ConfigError;

pub const ENV_SHEET_URL: &str = "PORTAL_SHEET_URL";
pub const ENV_SCHEDULE_SHEET: &str = "PORTAL_SCHEDULE_SHEET";
pub const ENV_EVENTS_SHEET: &str = "PORTAL_EVENTS_SHEET";
pub const ENV_FAQ_SHEET: &str = "PORTAL_FAQ_SHEET";
pub const ENV_SPLASH_MS: &str = "PORTAL_SPLASH_MS";
pub const ENV_TIMEOUT_SECS: &str = "PORTAL_TIMEOUT_SECS";
pub const ENV_CONTACT_URL: &str = "PORTAL_CONTACT_URL";
pub const ENV_LOG: &str = "PORTAL_LOG";
pub const ENV_LOG_FILE: &str = "PORTAL_LOG_FILE";

pub const DEFAULT_SPLASH_MS: u64 = 2000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONTACT_URL: &str = "https://wa.me/554130524900";
pub const DEFAULT_LOG_FILTER: &str = "campus_portal=info";

/// Configuration for one portal session.
///
/// # Example
///
/// ```ignore
/// use campus_portal::startup::PortalConfig;
/// use std::time::Duration;
///
/// let config = PortalConfig::new("https://sheets.example.com/abc")
///     .with_splash_delay(Duration::from_millis(500))
///     .with_faq_sheet("Perguntas");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL of the sheet service; sheets live at `{base}/{sheet}`
    pub sheet_url: String,
    /// Sheet names for the three collections
    pub sheets: SheetNames,
    /// How long the splash stays up after the data settles
    pub splash_delay: Duration,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
    /// Link shown in the header and opened with `w`
    pub contact_url: String,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Log file override; `None` uses the cache directory
    pub log_file: Option<PathBuf>,
}

impl PortalConfig {
    /// Create a config for `sheet_url` with every other setting defaulted.
    pub fn new(sheet_url: impl Into<String>) -> Self {
        Self {
            sheet_url: sheet_url.into(),
            sheets: SheetNames::default(),
            splash_delay: Duration::from_millis(DEFAULT_SPLASH_MS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            contact_url: DEFAULT_CONTACT_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }

    pub fn with_schedule_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheets.schedule = name.into();
        self
    }

    pub fn with_events_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheets.events = name.into();
        self
    }

    pub fn with_faq_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheets.faq = name.into();
        self
    }

    pub fn with_splash_delay(mut self, delay: Duration) -> Self {
        self.splash_delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_contact_url(mut self, url: impl Into<String>) -> Self {
        self.contact_url = url.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let sheet_url = get(ENV_SHEET_URL).ok_or_else(|| ConfigError::missing(ENV_SHEET_URL))?;
        validate_http_url(ENV_SHEET_URL, &sheet_url)?;

        let mut config = Self::new(sheet_url.trim_end_matches('/'));

        if let Some(name) = get(ENV_SCHEDULE_SHEET) {
            config = config.with_schedule_sheet(name);
        }
        if let Some(name) = get(ENV_EVENTS_SHEET) {
            config = config.with_events_sheet(name);
        }
        if let Some(name) = get(ENV_FAQ_SHEET) {
            config = config.with_faq_sheet(name);
        }
        if let Some(raw) = get(ENV_SPLASH_MS) {
            let ms = parse_number(ENV_SPLASH_MS, &raw, "expected milliseconds")?;
            config = config.with_splash_delay(Duration::from_millis(ms));
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = parse_number(ENV_TIMEOUT_SECS, &raw, "expected seconds")?;
            if secs == 0 {
                return Err(ConfigError::invalid(
                    ENV_TIMEOUT_SECS,
                    &raw,
                    "timeout must be at least one second",
                ));
            }
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(url) = get(ENV_CONTACT_URL) {
            validate_http_url(ENV_CONTACT_URL, &url)?;
            config = config.with_contact_url(url);
        }
        if let Some(filter) = get(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }

        Ok(config)
    }
}

fn parse_number(variable: &str, raw: &str, reason: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>()
        .map_err(|_| ConfigError::invalid(variable, raw, reason))
}

fn validate_http_url(variable: &str, url: &str) -> Result<(), ConfigError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        Some(_) => Err(ConfigError::invalid(variable, url, "missing host")),
        None => Err(ConfigError::invalid(
            variable,
            url,
            "expected an http:// or https:// URL",
        )),
    }
}
