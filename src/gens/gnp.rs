use super::*;

/// Random bipartite instances in which every pair `(left, right)` is an edge independently
/// with probability `p`.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomBipartite {
    k: NumNodes,
    p: f64,
}

impl RandomBipartite {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = prob;
        self
    }

    /// Creates a stream over random left-to-right edges using 1-based item indices
    pub fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let k = self.k;
        let p = self.p;

        (1..=k)
            .flat_map(move |u| (k + 1..=2 * k).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }

    /// Generates a whole instance
    pub fn generate<R: Rng>(&self, rng: &mut R) -> BipartiteInstance {
        labelled_instance(self.k, self.stream(rng))
    }
}

impl ItemsPerSideGen for RandomBipartite {
    fn items_per_side(mut self, k: NumNodes) -> Self {
        self.k = k;
        self
    }
}
