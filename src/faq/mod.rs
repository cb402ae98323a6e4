//! FAQ grouping and accordion state.

mod accordion;
mod grouping;

pub use accordion::Accordion;
pub use grouping::{display_order, group_by_category, FaqCategory, IndexedFaq};
