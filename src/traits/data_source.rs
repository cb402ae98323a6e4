//! The data fetch facade.
//!
//! Three read-only operations, one per sheet. Implementations must return
//! rows in source order; callers treat the result as already validated.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{EventEntry, FaqEntry, ScheduleEntry};

#[async_trait]
pub trait DataSource: Send + Sync {
    /// All class-schedule rows.
    async fn fetch_schedule_entries(&self) -> Result<Vec<ScheduleEntry>, FetchError>;

    /// All event rows.
    async fn fetch_events(&self) -> Result<Vec<EventEntry>, FetchError>;

    /// All FAQ rows.
    async fn fetch_faq_entries(&self) -> Result<Vec<FaqEntry>, FetchError>;
}
