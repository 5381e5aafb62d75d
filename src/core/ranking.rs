/// Order scored guides best first
///
/// Uses a stable sort, so guides with equal scores keep their input order
/// and repeated calls on the same input page identically.
pub fn rank_guides<G>(mut guides: Vec<(G, u8)>) -> Vec<(G, u8)> {
    guides.sort_by(|a, b| b.1.cmp(&a.1));
    guides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_and_stable() {
        let ranked = rank_guides(vec![("A", 70), ("B", 90), ("C", 70)]);
        assert_eq!(ranked, vec![("B", 90), ("A", 70), ("C", 70)]);
    }

    #[test]
    fn test_empty_pool() {
        let ranked: Vec<(&str, u8)> = rank_guides(Vec::new());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_all_tied_keeps_order() {
        let ranked = rank_guides(vec![(1, 50), (2, 50), (3, 50), (4, 50)]);
        let ids: Vec<_> = ranked.into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
