//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`StaticDataSource`] - data source with preset rows or errors

pub mod data_source;
pub mod http;

pub use data_source::StaticDataSource;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
