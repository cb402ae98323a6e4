//! Reusable UI Components
//!
//! - `TabSelector` - the nav bar with an arrow marker on the active screen
//! - `StatusIndicator` - spinner and warning lines
//! - `EmptyState` - placeholder for empty lists

mod empty_state;
mod status_indicator;
mod tab_selector;

pub use empty_state::render_empty_state;
pub use status_indicator::{render_status_indicator, StatusIndicatorType};
pub use tab_selector::{nav_items, render_tab_selector};
