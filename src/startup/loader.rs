//! Initial data load.
//!
//! The three collections are fetched concurrently once at startup. A failed
//! fetch is logged and leaves only its own collection empty.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::app::AppMessage;
use crate::error::FetchError;
use crate::models::{EventEntry, FaqEntry, ScheduleEntry};
use crate::traits::DataSource;

/// The three collections shown by the portal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalData {
    pub schedule: Vec<ScheduleEntry>,
    pub events: Vec<EventEntry>,
    pub faq: Vec<FaqEntry>,
}

/// Which collection a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Schedule,
    Events,
    Faq,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::Schedule => "schedule",
            Collection::Events => "events",
            Collection::Faq => "faq",
        };
        f.write_str(name)
    }
}

/// A collection that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub collection: Collection,
    pub error: FetchError,
}

/// Outcome of the initial load: whatever data arrived plus what failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    pub data: PortalData,
    failures: Vec<LoadFailure>,
}

impl LoadResult {
    pub fn new(data: PortalData) -> Self {
        Self {
            data,
            failures: Vec::new(),
        }
    }

    pub fn with_failure(mut self, collection: Collection, error: FetchError) -> Self {
        self.failures.push(LoadFailure { collection, error });
        self
    }

    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// True when every fetch succeeded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, collection: Collection) -> bool {
        self.failures.iter().any(|f| f.collection == collection)
    }
}

fn settle<T>(
    collection: Collection,
    result: Result<Vec<T>, FetchError>,
    failures: &mut Vec<LoadFailure>,
) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(err) => {
            error!(
                %collection,
                code = err.error_code(),
                error = %err,
                "failed to load collection"
            );
            failures.push(LoadFailure {
                collection,
                error: err,
            });
            Vec::new()
        }
    }
}

/// Fetch all three collections concurrently and wait for every one to settle.
pub async fn load_all(source: &dyn DataSource) -> LoadResult {
    let (schedule, events, faq) = tokio::join!(
        source.fetch_schedule_entries(),
        source.fetch_events(),
        source.fetch_faq_entries(),
    );

    let mut failures = Vec::new();
    let data = PortalData {
        schedule: settle(Collection::Schedule, schedule, &mut failures),
        events: settle(Collection::Events, events, &mut failures),
        faq: settle(Collection::Faq, faq, &mut failures),
    };

    info!(
        schedule = data.schedule.len(),
        events = data.events.len(),
        faq = data.faq.len(),
        failed = failures.len(),
        "initial load settled"
    );

    LoadResult { data, failures }
}

/// Run the startup sequence: load, publish the data, hold the splash, then
/// dismiss it.
///
/// The splash delay starts once the fetches settle, so the splash is up for
/// the fetch time plus `splash_delay`. A closed channel ends the task early.
pub async fn run_initial_load(
    source: Arc<dyn DataSource>,
    splash_delay: Duration,
    tx: mpsc::UnboundedSender<AppMessage>,
) {
    let result = load_all(source.as_ref()).await;
    if tx.send(AppMessage::DataLoaded(result)).is_err() {
        return;
    }

    tokio::time::sleep(splash_delay).await;
    let _ = tx.send(AppMessage::SplashElapsed);
}
