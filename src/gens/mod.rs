/*!
# Instance Generators

Builders for bipartite matching instances, used to produce benchmark and test inputs.

1. Create a generator instance (e.g., `RandomBipartite::new()`).
2. Set parameters using builder methods (e.g., `.items_per_side(k).prob(p)`).
3. Generate edges via `stream()` or a whole [`BipartiteInstance`] via `generate()`.

Supported models:
- [`RandomBipartite`]: every left-right pair is an edge independently with probability `p`
- [`Ladder`]: left `i` is adjacent to right `i` and right `i + 1`

Items are labelled `l1, l2, ...` on the left and `r1, r2, ...` on the right.
*/

use rand::Rng;

use crate::{instance::BipartiteInstance, *};

mod gnp;
mod ladder;

pub use gnp::*;
pub use ladder::*;

/// Trait for generators that allow setting the number of items on each side.
pub trait ItemsPerSideGen {
    /// Sets the number of items on each side of the instance.
    fn items_per_side(self, k: NumNodes) -> Self;
}

/// Creates an instance with `k` labelled items per side and the given 1-based edges
fn labelled_instance<I>(k: NumNodes, edges: I) -> BipartiteInstance
where
    I: IntoIterator<Item = Edge>,
{
    let mut instance = BipartiteInstance::from_labels(
        (1..=k).map(|i| format!("l{i}")),
        (1..=k).map(|i| format!("r{i}")),
    );
    instance.add_edges(edges);
    instance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let instance = labelled_instance(2, [Edge(1, 3)]);
        assert_eq!(instance.left_labels(), &["l1", "l2"]);
        assert_eq!(instance.right_labels(), &["r1", "r2"]);
        assert_eq!(instance.edges(), &[Edge(1, 3)]);
    }
}
