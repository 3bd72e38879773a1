use log::{debug, info, trace};

use super::*;

/// Dinic's blocking-flow algorithm on the unit-capacity network of a bipartite instance.
///
/// Each phase asks the [`ResidualNetwork`] for a [`LevelGraph`] and walks it depth-first from
/// the source, always advancing to the lowest-index successor. A walk that reaches the sink is
/// an augmenting path: it is recorded in the matching, its residual edges are reversed and its
/// level edges deleted, and the walk restarts at the source. A vertex without successors is a
/// dead end and is deleted from the level graph before the walk retreats by one vertex.
/// The phase ends once the source itself has no successors left; the algorithm ends once no
/// level graph can be built.
///
/// The walk uses an explicit stack, so its depth is not bounded by the call stack.
///
/// `Dinic` is an iterator over the augmenting paths it applies:
/// ```
/// use bimatch::{algo::*, instance::BipartiteInstance};
///
/// let mut instance = BipartiteInstance::from_labels(["A", "B"], ["X", "Y"]);
/// instance.add_edges([(1, 3), (1, 4), (2, 3)]);
///
/// let mut dinic = Dinic::new(ResidualNetwork::from_instance(&instance));
/// assert_eq!(dinic.next(), Some(vec![0, 1, 3, 5]));
/// assert_eq!(dinic.next(), Some(vec![0, 2, 3, 1, 4, 5]));
/// assert_eq!(dinic.next(), None);
/// assert_eq!(dinic.network().matching().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Dinic {
    network: ResidualNetwork,
    level_edges: LevelEdges,
    level_graph: LevelGraph,
    in_phase: bool,
    path: Vec<Node>,
    exhausted: bool,
    phases: usize,
    augmentations: usize,
    dead_ends: usize,
}

impl Dinic {
    /// Creates a new solver for a network whose source and sink are already connected
    pub fn new(network: ResidualNetwork) -> Self {
        let n = network.len();
        Self {
            level_edges: LevelEdges::default(),
            level_graph: LevelGraph::new(network.number_of_nodes()),
            in_phase: false,
            path: Vec::with_capacity(n),
            exhausted: false,
            phases: 0,
            augmentations: 0,
            dead_ends: 0,
            network,
        }
    }

    /// Sets which residual edges make it into each phase's level graph
    pub fn set_level_edges(&mut self, level_edges: LevelEdges) {
        self.level_edges = level_edges;
    }

    /// Chainable version of [`Self::set_level_edges`]
    pub fn level_edges(mut self, level_edges: LevelEdges) -> Self {
        self.set_level_edges(level_edges);
        self
    }

    /// Number of level graphs built so far (including the final, failed attempt)
    pub fn phases(&self) -> usize {
        self.phases
    }

    /// Number of augmenting paths applied so far
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Number of dead ends deleted from level graphs so far
    pub fn dead_ends(&self) -> usize {
        self.dead_ends
    }

    /// Returns *true* once no further augmenting path exists
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The residual network in its current state
    pub fn network(&self) -> &ResidualNetwork {
        &self.network
    }

    /// Consumes the solver and returns the residual network in its current state
    pub fn into_network(self) -> ResidualNetwork {
        self.network
    }

    /// Applies all remaining augmenting paths and returns the number of paths applied
    pub fn num_augmentations(&mut self) -> usize {
        self.count()
    }

    /// Applies all remaining augmenting paths and returns them
    pub fn augmenting_paths(&mut self) -> Vec<Vec<Node>> {
        self.collect()
    }

    /// Runs the algorithm to completion and returns the network holding the maximum matching
    pub fn run(mut self) -> ResidualNetwork {
        self.by_ref().for_each(drop);
        info!(
            "maximum matching of size {} after {} phases ({} augmenting paths, {} dead ends)",
            self.network.matching().len(),
            self.phases,
            self.augmentations,
            self.dead_ends
        );
        self.network
    }

    /// Walks the level graph from the source until the sink is reached or the source runs
    /// out of successors. On success the walk is left in `self.path`.
    fn search(&mut self) -> bool {
        let source = self.network.source();
        let sink = self.network.sink();

        self.path.clear();
        self.path.push(source);

        while let Some(&u) = self.path.last() {
            if u == sink {
                return true;
            }

            match self.level_graph.first_neighbor_of(u) {
                Some(v) => self.path.push(v),
                None if u == source => return false,
                None => {
                    // retreat
                    trace!("dead end at {u}");
                    self.level_graph.delete_node(u);
                    self.path.pop();
                    self.dead_ends += 1;
                }
            }
        }

        unreachable!("the source is never popped from the walk")
    }
}

impl Iterator for Dinic {
    type Item = Vec<Node>;

    /// Applies the next augmenting path, building new level graphs as needed.
    /// Returns `None` once the sink is unreachable from the source.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.exhausted {
                return None;
            }

            if !self.in_phase {
                self.phases += 1;
                if !self
                    .network
                    .build_level_graph(self.level_edges, &mut self.level_graph)
                {
                    debug!("phase {}: sink unreachable", self.phases);
                    self.exhausted = true;
                    return None;
                }
                debug!(
                    "phase {}: level graph with {} edges",
                    self.phases,
                    self.level_graph.number_of_edges()
                );
                self.in_phase = true;
            }

            if !self.search() {
                // blocking flow of this phase found
                self.in_phase = false;
                continue;
            }

            let path = self.path.clone();
            trace!("augmenting path {path:?}");

            self.network.augment_path(&path);
            self.network.reverse_connection_in_path(&path);
            self.level_graph.delete_edges_on_a_path(&path);
            self.augmentations += 1;

            return Some(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, instance::BipartiteInstance, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn four_by_four() -> BipartiteInstance {
        let mut instance =
            BipartiteInstance::from_labels(["A", "B", "C", "D"], ["W", "X", "Y", "Z"]);
        instance.add_edges([(1, 5), (1, 6), (2, 5), (3, 6), (3, 7), (4, 8)]);
        instance
    }

    #[test]
    fn four_by_four_perfect_matching() {
        let mut dinic = Dinic::new(ResidualNetwork::from_instance(&four_by_four()));
        let paths = dinic.augmenting_paths();

        // the last augmenting path zig-zags through reversed matching edges
        assert_eq!(
            paths,
            vec![
                vec![0, 1, 5, 9],
                vec![0, 3, 6, 9],
                vec![0, 4, 8, 9],
                vec![0, 2, 5, 1, 6, 3, 7, 9],
            ]
        );
        assert_eq!(dinic.phases(), 5);

        let network = dinic.into_network();
        assert_eq!(
            network
                .labeled_pairs()
                .map(|(l, r)| (l.unwrap(), r.unwrap()))
                .collect_vec(),
            vec![("A", "X"), ("C", "Y"), ("D", "Z"), ("B", "W")]
        );
    }

    #[test]
    fn no_perfect_matching() {
        let mut instance = BipartiteInstance::from_labels(["A", "B"], ["X", "Y"]);
        instance.add_edges([(1, 3), (2, 3)]);

        let network = Dinic::new(ResidualNetwork::from_instance(&instance)).run();
        assert_eq!(network.matching().iter().collect_vec(), vec![(1, 3)]);
    }

    #[test]
    fn disconnected_left_vertex() {
        let mut instance = BipartiteInstance::from_labels(["A", "B", "C"], ["X", "Y", "Z"]);
        instance.add_edges([(1, 4), (3, 4), (3, 6)]);

        let matching = instance.maximum_matching();
        assert_eq!(matching.len(), 2);
        assert!(!matching.is_matched(2));
    }

    #[test]
    fn empty_instance() {
        let mut dinic = Dinic::new(ResidualNetwork::from_instance(&BipartiteInstance::new(0)));
        assert_eq!(dinic.num_augmentations(), 0);
        assert_eq!(dinic.phases(), 1);
        assert!(dinic.is_exhausted());
        assert_eq!(dinic.next(), None);
        assert_eq!(dinic.phases(), 1);
    }

    #[test]
    fn level_edges_agree_on_size() {
        let instance = four_by_four();
        for level_edges in [LevelEdges::DiscoveryTree, LevelEdges::Layered] {
            let network = Dinic::new(ResidualNetwork::from_instance(&instance))
                .level_edges(level_edges)
                .run();
            assert_eq!(network.matching().len(), 4);
        }
    }

    #[test]
    fn ladder() {
        for k in [1, 2, 5, 20, 100] {
            let instance = Ladder::new().items_per_side(k).generate();
            let mut dinic = Dinic::new(ResidualNetwork::from_instance(&instance));
            assert_eq!(dinic.num_augmentations(), k as usize);
            assert!(dinic.phases() <= dinic.network().len());

            let network = dinic.into_network();
            assert_matching_is_valid(&instance, network.matching());
            assert_eq!(network.matching().len(), k as usize);
        }
    }

    #[test]
    fn large_ladder() {
        // dense adjacency would need gigabytes per phase here
        let k = 2000;
        let instance = Ladder::new().items_per_side(k).generate();
        let mut dinic = Dinic::new(ResidualNetwork::from_instance(&instance));

        assert_eq!(dinic.num_augmentations(), k as usize);
        assert!(dinic.phases() <= k as usize + 1);
        assert_matching_is_valid(&instance, dinic.network().matching());
    }

    #[test]
    fn random_against_exhaustive_search() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for k in 1..=8 {
            for prob in [0.1, 0.25, 0.5, 0.8] {
                for _ in 0..10 {
                    let instance = RandomBipartite::new()
                        .items_per_side(k)
                        .prob(prob)
                        .generate(rng);
                    let expected = exhaustive_maximum_matching_size(&instance);

                    for level_edges in [LevelEdges::DiscoveryTree, LevelEdges::Layered] {
                        let mut dinic = Dinic::new(ResidualNetwork::from_instance(&instance))
                            .level_edges(level_edges);
                        dinic.num_augmentations();

                        // termination bound
                        assert!(dinic.phases() <= dinic.network().len());

                        let matching = dinic.network().matching();
                        assert_matching_is_valid(&instance, matching);
                        assert_eq!(matching.len(), expected, "{instance:?}");

                        for left in 1..=k {
                            if !instance.edges().iter().any(|e| e.0 == left) {
                                assert!(!matching.is_matched(left));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn exhaustive_at_ten_per_side() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let instance = RandomBipartite::new()
                .items_per_side(10)
                .prob(0.2)
                .generate(rng);
            let matching = instance.maximum_matching();
            assert_matching_is_valid(&instance, &matching);
            assert_eq!(matching.len(), exhaustive_maximum_matching_size(&instance));
        }
    }

    #[test]
    fn level_graph_of_unmutated_network_is_stable() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..10 {
            let instance = RandomBipartite::new()
                .items_per_side(12)
                .prob(0.3)
                .generate(rng);
            let mut dinic = Dinic::new(ResidualNetwork::from_instance(&instance));

            // also after some augmentations
            for _ in 0..3 {
                let network = dinic.network();
                assert_eq!(network.create_level_graph(), network.create_level_graph());
                dinic.next();
            }
        }
    }
}
