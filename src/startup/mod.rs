//! Startup: configuration and the initial data load.
//!
//! - [`config`] - `PORTAL_*` environment configuration
//! - [`loader`] - concurrent fetch of the three collections and the splash timer
//!
//! # Usage
//!
//! ```ignore
//! use campus_portal::startup::{PortalConfig, run_initial_load};
//!
//! let config = PortalConfig::from_env()?;
//! tokio::spawn(run_initial_load(source, config.splash_delay, app.message_tx.clone()));
//! ```

pub mod config;
pub mod loader;

pub use config::PortalConfig;
pub use loader::{load_all, run_initial_load, Collection, LoadFailure, LoadResult, PortalData};
