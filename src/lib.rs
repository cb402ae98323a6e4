//! Campus Portal - a terminal student portal
//!
//! Schedule lookup by course, shift and period, the events list and the FAQ,
//! all read from a remote spreadsheet service. This library exposes the
//! modules for the binary and for integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod faq;
pub mod links;
pub mod logging;
pub mod models;
pub mod schedule;
pub mod sheets;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
