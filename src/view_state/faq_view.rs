//! FAQ screen derivation.

use crate::faq::{display_order, group_by_category, FaqCategory};
use crate::models::FaqEntry;

/// Grouped FAQ plus the on-screen order of questions.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqViewState<'a> {
    pub categories: Vec<FaqCategory<'a>>,
    /// Global indices in display order; the FAQ cursor indexes into this
    pub order: Vec<usize>,
}

impl<'a> FaqViewState<'a> {
    pub fn derive(entries: &'a [FaqEntry]) -> Self {
        let categories = group_by_category(entries);
        let order = display_order(&categories);
        Self { categories, order }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Global index of the question under `cursor`.
    pub fn index_at(&self, cursor: usize) -> Option<usize> {
        self.order.get(cursor).copied()
    }
}
