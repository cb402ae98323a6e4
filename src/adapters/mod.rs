//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`SheetDataSource`] - the data fetch facade over a sheet service
//!
//! The [`mock`] submodule provides test doubles for both traits.

pub mod mock;
pub mod reqwest_http;
pub mod sheet_source;

pub use mock::{MockHttpClient, StaticDataSource};
pub use reqwest_http::ReqwestHttpClient;
pub use sheet_source::{SheetDataSource, SheetNames};
