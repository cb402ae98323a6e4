//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET transport
//! - [`DataSource`] - the three sheet collections the portal shows

pub mod data_source;
pub mod http;

pub use data_source::DataSource;
pub use http::{Headers, HttpClient, HttpError, Response};
