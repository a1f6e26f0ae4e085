//! Similar listings for the detail page.

use crate::listing::Listing;

/// Default number of similar listings shown.
pub const SIMILAR_LIMIT: usize = 4;

/// Listings sharing `current`'s category, excluding `current`, at most `limit`,
/// in collection order.
pub fn similar_listings<'a>(
    current: &Listing,
    collection: &'a [Listing],
    limit: usize,
) -> Vec<&'a Listing> {
    collection
        .iter()
        .filter(|l| l.category_id == current.category_id && l.id != current.id)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::tests::listing;

    fn collection() -> Vec<Listing> {
        let mut all = Vec::new();
        for i in 0..7 {
            all.push(listing(&format!("e{}", i), "electronics"));
        }
        all.push(listing("h1", "home"));
        all
    }

    #[test]
    fn test_excludes_self_and_caps() {
        let all = collection();
        let similar = similar_listings(&all[0], &all, SIMILAR_LIMIT);
        assert_eq!(similar.len(), 4);
        assert!(similar.iter().all(|l| l.id != all[0].id));
        assert!(similar.iter().all(|l| l.category_id == all[0].category_id));
    }

    #[test]
    fn test_only_same_category() {
        let all = collection();
        let similar = similar_listings(&all[7], &all, SIMILAR_LIMIT);
        assert!(similar.is_empty());
    }

    #[test]
    fn test_current_not_in_collection() {
        let all = collection();
        let outside = listing("remote-1", "electronics");
        let similar = similar_listings(&outside, &all, 2);
        assert_eq!(similar.len(), 2);
        assert_eq!(similar[0].id.as_str(), "e0");
    }

    #[test]
    fn test_every_listing_property() {
        let all = collection();
        for current in &all {
            let similar = similar_listings(current, &all, SIMILAR_LIMIT);
            assert!(similar.len() <= SIMILAR_LIMIT);
            for l in similar {
                assert_ne!(l.id, current.id);
                assert_eq!(l.category_id, current.category_id);
            }
        }
    }
}
