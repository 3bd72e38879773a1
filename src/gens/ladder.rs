use super::*;

/// Deterministic instance in which left `i` is adjacent to right `i` and right `i + 1`.
///
/// With discovery-tree level graphs, every phase of [`Dinic`](crate::algo::Dinic) reaches the
/// sink through a single right vertex and thus matches exactly one more pair, so the instance
/// exercises many phases.
#[derive(Debug, Copy, Clone, Default)]
pub struct Ladder {
    k: NumNodes,
}

impl Ladder {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stream over all edges using 1-based item indices
    pub fn stream(&self) -> impl Iterator<Item = Edge> {
        let k = self.k;
        (1..=k).flat_map(move |i| {
            let first = Edge(i, k + i);
            let second = (i < k).then(|| Edge(i, k + i + 1));
            std::iter::once(first).chain(second)
        })
    }

    /// Generates the whole instance
    pub fn generate(&self) -> BipartiteInstance {
        labelled_instance(self.k, self.stream())
    }
}

impl ItemsPerSideGen for Ladder {
    fn items_per_side(mut self, k: NumNodes) -> Self {
        self.k = k;
        self
    }
}
