//! Helpers shared by the unit tests of this crate

use crate::{instance::BipartiteInstance, matching::Matching, *};

/// Size of a maximum matching computed by exhaustive search over all subsets of matched right
/// items (dynamic programming over `(left item, used right items)`).
/// Only feasible for instances with few items per side.
pub fn exhaustive_maximum_matching_size(instance: &BipartiteInstance) -> usize {
    let k = instance.items_per_side() as usize;
    assert!(k <= 16, "exhaustive search is limited to 16 items per side");

    // adjacency[l] = bitmask over right items (0-based) adjacent to left item l (0-based)
    let mut adjacency = vec![0usize; k];
    for &Edge(u, v) in instance.edges() {
        if instance.is_left(u) && instance.is_right(v) {
            adjacency[u as usize - 1] |= 1 << (v as usize - k - 1);
        }
    }

    // best[l][mask] = maximum number of pairs among left items l.. if `mask` is taken
    let mut best = vec![vec![0usize; 1 << k]; k + 1];
    for l in (0..k).rev() {
        for mask in 0..(1usize << k) {
            let mut value = best[l + 1][mask];
            let mut free = adjacency[l] & !mask;
            while free != 0 {
                let r = free & free.wrapping_neg();
                value = value.max(1 + best[l + 1][mask | r]);
                free ^= r;
            }
            best[l][mask] = value;
        }
    }

    best[0][0]
}

/// Asserts that every pair of `matching` goes from a left item to a right item along an edge
/// of `instance` and that no right item is matched twice.
pub fn assert_matching_is_valid(instance: &BipartiteInstance, matching: &Matching) {
    for (l, r) in matching.iter() {
        assert!(instance.is_left(l), "{l} is not a left item");
        assert!(instance.is_right(r), "{r} is not a right item");
        assert!(instance.contains_edge(l, r), "({l},{r}) is not an edge");
    }
    assert!(matching.has_unique_partners());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_search() {
        let mut instance = BipartiteInstance::new(6);
        assert_eq!(exhaustive_maximum_matching_size(&instance), 0);

        // l1 - r1, l2 - r1, l3 - r1, l3 - r3
        instance.add_edges([(1, 4), (2, 4), (3, 4), (3, 6)]);
        assert_eq!(exhaustive_maximum_matching_size(&instance), 2);

        instance.add_edge(2, 5);
        assert_eq!(exhaustive_maximum_matching_size(&instance), 3);
    }
}
