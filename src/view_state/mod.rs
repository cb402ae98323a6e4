//! View state for decoupling UI rendering from application state.
//!
//! Rendering is a pure function of view data. The `App` lends out an
//! [`AppViewState`] each frame and the screen-specific states are derived
//! from it on demand.
//!
//! ```text
//! App ──view_state()──▶ AppViewState ──derive──▶ ScheduleView / FaqViewState ──▶ ui
//! ```
//!
//! - [`AppViewState`]: everything a frame needs, borrowed from the `App`
//! - [`ScheduleView`]: the schedule screen for the current selection step
//! - [`FaqViewState`]: grouped FAQ and the cursor order

mod app_view;
pub mod faq_view;
pub mod schedule_view;

pub use app_view::AppViewState;
pub use faq_view::FaqViewState;
pub use schedule_view::ScheduleView;
