//! FAQ grouping by category.

use crate::models::FaqEntry;

/// A FAQ entry together with its position in the flat source collection.
///
/// The accordion is keyed by this global index, not by the position inside
/// a category, so the open item survives regrouping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedFaq<'a> {
    pub index: usize,
    pub entry: &'a FaqEntry,
}

/// All entries sharing one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqCategory<'a> {
    pub name: &'a str,
    pub items: Vec<IndexedFaq<'a>>,
}

/// Partition entries by exact category label.
///
/// Categories appear in the order they are first seen in `entries`; items
/// inside a category keep source order.
pub fn group_by_category(entries: &[FaqEntry]) -> Vec<FaqCategory<'_>> {
    let mut categories: Vec<FaqCategory<'_>> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let item = IndexedFaq { index, entry };
        match categories.iter_mut().find(|c| c.name == entry.category) {
            Some(category) => category.items.push(item),
            None => categories.push(FaqCategory {
                name: entry.category.as_str(),
                items: vec![item],
            }),
        }
    }

    categories
}

/// Global indices in the order the grouped list shows them.
pub fn display_order(categories: &[FaqCategory<'_>]) -> Vec<usize> {
    categories
        .iter()
        .flat_map(|c| c.items.iter().map(|item| item.index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(category: &str, question: &str) -> FaqEntry {
        FaqEntry {
            category: category.to_string(),
            question: question.to_string(),
            answer: format!("answer to {question}"),
        }
    }

    #[test]
    fn test_empty_collection_has_no_groups() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_first_seen_category_order() {
        let data = vec![
            faq("Secretaria", "q0"),
            faq("Financeiro", "q1"),
            faq("Secretaria", "q2"),
            faq("Biblioteca", "q3"),
            faq("Financeiro", "q4"),
        ];
        let groups = group_by_category(&data);
        let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Secretaria", "Financeiro", "Biblioteca"]);
    }

    #[test]
    fn test_items_keep_global_index() {
        let data = vec![
            faq("Secretaria", "q0"),
            faq("Financeiro", "q1"),
            faq("Secretaria", "q2"),
        ];
        let groups = group_by_category(&data);
        let secretaria: Vec<usize> = groups[0].items.iter().map(|i| i.index).collect();
        assert_eq!(secretaria, vec![0, 2]);
        assert_eq!(groups[0].items[1].entry.question, "q2");
        assert_eq!(groups[1].items[0].index, 1);
    }

    #[test]
    fn test_category_match_is_exact() {
        let data = vec![faq("Financeiro", "q0"), faq("financeiro", "q1")];
        assert_eq!(group_by_category(&data).len(), 2);
    }

    #[test]
    fn test_display_order_follows_groups() {
        let data = vec![
            faq("A", "q0"),
            faq("B", "q1"),
            faq("A", "q2"),
            faq("C", "q3"),
            faq("B", "q4"),
        ];
        let groups = group_by_category(&data);
        assert_eq!(display_order(&groups), vec![0, 2, 1, 4, 3]);
    }
}
