/*!
# Residual Network

The unit-capacity flow network of a bipartite instance:

```text
          +--> left_1 --+--> right_1 --+
 source --+--> left_2 --+--> right_2 --+--> sink
          +--> ...      +--> ...       +
```

Every edge has capacity one, so pushing flow along an edge simply reverses it. The network
also accumulates the matching that results from the augmenting paths applied to it.
*/

use std::{collections::VecDeque, ops::Range, str::FromStr};

use super::*;
use crate::{instance::BipartiteInstance, matching::Matching};

/// Which residual edges are kept when building a [`LevelGraph`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum LevelEdges {
    /// Only the edges along which the breadth-first search discovered a vertex.
    /// Every vertex has at most one incoming level edge.
    #[default]
    DiscoveryTree,
    /// Every residual edge `(u, v)` with `depth(v) = depth(u) + 1`
    Layered,
}

impl FromStr for LevelEdges {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        match s.to_lowercase().as_str() {
            "tree" | "discovery-tree" => Ok(LevelEdges::DiscoveryTree),
            "layered" => Ok(LevelEdges::Layered),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown LevelEdges: {s}").as_str(),
            )),
        }
    }
}

/// Residual network of a bipartite matching instance with `n` items.
///
/// Vertex `0` is the source and vertex `n + 1` the sink. The left set occupies `1..=n/2` and
/// the right set `n/2 + 1..=n`, i.e. the 1-based item indices of the input.
#[derive(Debug, Clone)]
pub struct ResidualNetwork {
    source: Node,
    sink: Node,
    n: NumNodes,
    m: NumEdges,
    capacity: Vec<SortedNeighborhood>,
    labels: Vec<Option<String>>,
    matching: Matching,
    wired: bool,
}

impl ResidualNetwork {
    /// Creates a network for `num_items` matchable items without any edges.
    /// ** Panics if `num_items` is odd or exceeds [`MAX_ITEMS`] **
    pub fn new(num_items: NumNodes) -> Self {
        assert!(
            num_items % 2 == 0,
            "number of items must be even, got {num_items}"
        );
        let n = match num_items.checked_add(2) {
            Some(n) if num_items <= MAX_ITEMS => n,
            _ => panic!("number of items must not exceed {MAX_ITEMS}, got {num_items}"),
        };
        let mut labels = vec![None; n as usize];
        labels[0] = Some("source".to_string());
        labels[n as usize - 1] = Some("sink".to_string());

        Self {
            source: 0,
            sink: n - 1,
            n,
            m: 0,
            capacity: vec![SortedNeighborhood::new(); n as usize],
            labels,
            matching: Matching::new(),
            wired: false,
        }
    }

    /// Creates the network of an instance: non-empty labels and edges are copied over and the
    /// source and sink are connected afterwards.
    pub fn from_instance(instance: &BipartiteInstance) -> Self {
        let mut network = Self::new(instance.number_of_items());

        // empty labels stay unset and are reported by index
        for (i, label) in instance.labels().iter().enumerate() {
            if !label.is_empty() {
                network.add_node(label.clone(), i as Node + 1);
            }
        }

        for &Edge(u, v) in instance.edges() {
            network.add_edge(u, v);
        }

        network.connect_source_and_sink();
        network
    }

    /// Returns the source vertex
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the sink vertex
    pub fn sink(&self) -> Node {
        self.sink
    }

    /// Vertices of the left set
    pub fn left_range(&self) -> Range<Node> {
        1..self.n / 2
    }

    /// Vertices of the right set
    pub fn right_range(&self) -> Range<Node> {
        self.n / 2..self.n - 1
    }

    /// Returns *true* if `u` belongs to the left set
    pub fn is_left(&self, u: Node) -> bool {
        self.left_range().contains(&u)
    }

    /// Returns *true* if `u` belongs to the right set
    pub fn is_right(&self, u: Node) -> bool {
        self.right_range().contains(&u)
    }

    /// Records the display label of vertex `index`
    pub fn add_node<S: Into<String>>(&mut self, label: S, index: Node) {
        self.assert_in_bounds(index);
        self.labels[index as usize] = Some(label.into());
    }

    /// Returns the display label of `u`, if it has one
    pub fn label(&self, u: Node) -> Option<&str> {
        self.labels[u as usize].as_deref()
    }

    /// Adds the residual edge `from -> to`.
    /// Meant for loading the bipartite edges before [`Self::connect_source_and_sink`].
    pub fn add_edge(&mut self, from: Node, to: Node) {
        self.assert_in_bounds(from);
        self.assert_in_bounds(to);
        debug_assert!(!self.wired, "bipartite edges must be added before wiring");

        if !self.capacity[from as usize].try_add_neighbor(to) {
            self.m += 1;
        }
    }

    /// Connects the source to every left vertex and every right vertex to the sink.
    /// ** Panics if called twice **
    pub fn connect_source_and_sink(&mut self) {
        assert!(!self.wired, "source and sink are already connected");
        self.wired = true;

        for u in self.left_range() {
            if !self.capacity[self.source as usize].try_add_neighbor(u) {
                self.m += 1;
            }
        }

        for u in self.right_range() {
            if !self.capacity[u as usize].try_add_neighbor(self.sink) {
                self.m += 1;
            }
        }
    }

    /// Builds the level graph of the current residual network using [`LevelEdges::DiscoveryTree`].
    /// Returns `None` if the sink is not reachable from the source.
    pub fn create_level_graph(&self) -> Option<LevelGraph> {
        self.create_level_graph_with(LevelEdges::DiscoveryTree)
    }

    /// Builds the level graph of the current residual network by a breadth-first search from
    /// the source. Neighbors are expanded in ascending order and the sink is never expanded.
    /// Returns `None` if the sink is not reachable from the source.
    pub fn create_level_graph_with(&self, level_edges: LevelEdges) -> Option<LevelGraph> {
        let mut level_graph = LevelGraph::new(self.n);
        self.build_level_graph(level_edges, &mut level_graph)
            .then_some(level_graph)
    }

    /// Like [`Self::create_level_graph_with`] but reuses the allocation of `level_graph`,
    /// which is cleared first. Returns *true* if the sink was reached.
    pub fn build_level_graph(
        &self,
        level_edges: LevelEdges,
        level_graph: &mut LevelGraph,
    ) -> bool {
        assert_eq!(level_graph.number_of_nodes(), self.n);
        level_graph.clear();

        let mut depth = vec![INVALID_NODE; self.len()];
        let mut queue = VecDeque::new();

        depth[self.source as usize] = 0;
        queue.push_back(self.source);

        while let Some(u) = queue.pop_front() {
            if u == self.sink {
                continue;
            }

            let next_depth = depth[u as usize] + 1;
            for v in self.neighbors_of(u) {
                if depth[v as usize] == INVALID_NODE {
                    depth[v as usize] = next_depth;
                    queue.push_back(v);
                    level_graph.add_edge(u, v);
                } else if level_edges == LevelEdges::Layered && depth[v as usize] == next_depth {
                    level_graph.add_edge(u, v);
                }
            }
        }

        depth[self.sink as usize] != INVALID_NODE
    }

    /// Reverses the edge `(u, v)` into `(v, u)`
    pub fn reverse(&mut self, u: Node, v: Node) {
        let existed = self.capacity[u as usize].try_remove_neighbor(v);
        debug_assert!(existed, "({u},{v}) is not a residual edge");
        if self.capacity[v as usize].try_add_neighbor(u) {
            // the reverse edge existed already; both collapse into one
            self.m -= 1;
        }
    }

    /// Pushes one unit of flow along `path` by reversing each of its edges
    pub fn reverse_connection_in_path(&mut self, path: &[Node]) {
        for w in path.windows(2) {
            self.reverse(w[0], w[1]);
        }
    }

    /// Records every left-to-right hop of an augmenting path in the matching.
    ///
    /// On the alternating paths of this network these are the hops at positions `(1, 2)`,
    /// `(3, 4)`, ...; a left vertex that was matched before is re-matched to its new partner.
    pub fn augment_path(&mut self, path: &[Node]) {
        for w in path.windows(2) {
            let (u, v) = (w[0], w[1]);
            if self.is_left(u) && self.is_right(v) {
                self.matching.insert(u, v);
            }
        }
    }

    /// The matching accumulated so far
    pub fn matching(&self) -> &Matching {
        &self.matching
    }

    /// Consumes the network and returns its matching
    pub fn into_matching(self) -> Matching {
        self.matching
    }

    /// Iterates over the labels of all matched pairs in matching order.
    /// Vertices without a label are reported as `None`.
    pub fn labeled_pairs(&self) -> impl Iterator<Item = (Option<&str>, Option<&str>)> + '_ {
        self.matching
            .iter()
            .map(|(l, r)| (self.label(l), self.label(r)))
    }

    fn assert_in_bounds(&self, u: Node) {
        assert!(u < self.n, "vertex {u} out of bounds for {} vertices", self.n);
    }
}

impl GraphNodeOrder for ResidualNetwork {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for ResidualNetwork {
    fn number_of_edges(&self) -> NumEdges {
        self.m
    }
}

impl AdjacencyList for ResidualNetwork {
    type NeighborIter<'a>
        = NeighborsOf<'a>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.capacity[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.capacity[u as usize].num_of_neighbors()
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.capacity[u as usize].has_neighbor(v)
    }

    fn first_neighbor_of(&self, u: Node) -> Option<Node> {
        self.capacity[u as usize].first()
    }
}
