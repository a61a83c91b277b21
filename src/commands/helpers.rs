use crate::model::Category;
use std::collections::BTreeMap;

/// Bounded page window over an ordered slice.
///
/// Pages are 1-based; page 0 is clamped to 1. The window is the half-open
/// range `[(page-1)*per_page, (page-1)*per_page + per_page)` clipped to the
/// input. A window starting past the end is an empty slice, not an error;
/// whether that means "not found" is the caller's contract.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// The id→type mapping used by the listing payloads. BTreeMap keeps the
/// serialized object key-ordered.
pub fn category_map(categories: &[Category]) -> BTreeMap<u32, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_the_leading_window() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn middle_page_is_a_full_window() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 2, 10), (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn last_page_is_clipped() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 3, 10), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let items: Vec<u32> = (1..=25).collect();
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 1000, 10).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let items: Vec<u32> = (1..=20).collect();
        assert_eq!(paginate(&items, 2, 10).len(), 10);
        assert!(paginate(&items, 3, 10).is_empty());
    }

    #[test]
    fn page_zero_clamps_to_one() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&items, 0, 10), paginate(&items, 1, 10));
    }

    #[test]
    fn empty_input_is_empty_everywhere() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(&items, 1, 10).is_empty());
        assert!(paginate(&items, 7, 10).is_empty());
    }

    #[test]
    fn category_map_is_keyed_by_id() {
        let cats = vec![
            Category {
                id: 2,
                kind: "Art".to_string(),
            },
            Category {
                id: 1,
                kind: "Science".to_string(),
            },
        ];

        let map = category_map(&cats);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], "Science");
        assert_eq!(map[&2], "Art");
    }
}
