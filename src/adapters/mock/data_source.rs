//! In-memory data source for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::FetchError;
use crate::models::{EventEntry, FaqEntry, ScheduleEntry};
use crate::traits::DataSource;

/// Data source returning preset results, optionally after a delay.
///
/// Each collection can be set to rows or to an error independently, which
/// is how the loader's partial-failure behaviour is exercised.
#[derive(Debug, Clone)]
pub struct StaticDataSource {
    schedule: Result<Vec<ScheduleEntry>, FetchError>,
    events: Result<Vec<EventEntry>, FetchError>,
    faq: Result<Vec<FaqEntry>, FetchError>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl StaticDataSource {
    /// A source where every collection is empty.
    pub fn new() -> Self {
        Self {
            schedule: Ok(Vec::new()),
            events: Ok(Vec::new()),
            faq: Ok(Vec::new()),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_schedule(mut self, rows: Vec<ScheduleEntry>) -> Self {
        self.schedule = Ok(rows);
        self
    }

    pub fn with_events(mut self, rows: Vec<EventEntry>) -> Self {
        self.events = Ok(rows);
        self
    }

    pub fn with_faq(mut self, rows: Vec<FaqEntry>) -> Self {
        self.faq = Ok(rows);
        self
    }

    pub fn with_schedule_error(mut self, err: FetchError) -> Self {
        self.schedule = Err(err);
        self
    }

    pub fn with_events_error(mut self, err: FetchError) -> Self {
        self.events = Err(err);
        self
    }

    pub fn with_faq_error(mut self, err: FetchError) -> Self {
        self.faq = Err(err);
        self
    }

    /// Make every fetch take `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of fetch calls made so far, across all three operations.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn answer<T: Clone>(&self, result: &Result<T, FetchError>) -> Result<T, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        result.clone()
    }
}

impl Default for StaticDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch_schedule_entries(&self) -> Result<Vec<ScheduleEntry>, FetchError> {
        self.answer(&self.schedule).await
    }

    async fn fetch_events(&self) -> Result<Vec<EventEntry>, FetchError> {
        self.answer(&self.events).await
    }

    async fn fetch_faq_entries(&self) -> Result<Vec<FaqEntry>, FetchError> {
        self.answer(&self.faq).await
    }
}
