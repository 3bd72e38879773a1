use super::*;

/// Phase-scoped subgraph of a [`ResidualNetwork`] produced by its breadth-first search.
///
/// A level graph owns its adjacency; deleting edges or nodes here never affects the residual
/// network it was derived from. In-neighbors are stored alongside out-neighbors so that
/// [`LevelGraph::delete_node`] only touches incident edges. Memory is linear in the number of
/// vertices and edges, and [`LevelGraph::clear`] keeps it allocated for the next phase.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelGraph {
    n: NumNodes,
    m: NumEdges,
    out_edges: Vec<SortedNeighborhood>,
    in_edges: Vec<SortedNeighborhood>,
}

impl LevelGraph {
    /// Creates an empty level graph over `n` vertices
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            m: 0,
            out_edges: vec![SortedNeighborhood::new(); n as usize],
            in_edges: vec![SortedNeighborhood::new(); n as usize],
        }
    }

    /// Removes all edges
    pub fn clear(&mut self) {
        if self.m == 0 {
            return;
        }
        self.out_edges.iter_mut().for_each(SortedNeighborhood::clear);
        self.in_edges.iter_mut().for_each(SortedNeighborhood::clear);
        self.m = 0;
    }

    /// Adds the level edge `(u, v)` and returns *true* if it already existed
    pub fn add_edge(&mut self, u: Node, v: Node) -> bool {
        let existed = self.out_edges[u as usize].try_add_neighbor(v);
        self.in_edges[v as usize].try_add_neighbor(u);
        if !existed {
            self.m += 1;
        }
        existed
    }

    /// Removes the level edge `(u, v)` and returns *true* if it existed
    pub fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        let existed = self.out_edges[u as usize].try_remove_neighbor(v);
        self.in_edges[v as usize].try_remove_neighbor(u);
        if existed {
            self.m -= 1;
        }
        existed
    }

    /// Returns the successors of `node` in ascending order
    pub fn get_neighbors(&self, node: Node) -> Vec<Node> {
        self.neighbors_of(node).collect()
    }

    /// Removes every level edge between consecutive vertices of `path`, so that no edge of a
    /// consumed augmenting path is used again within the same phase.
    pub fn delete_edges_on_a_path(&mut self, path: &[Node]) {
        for w in path.windows(2) {
            self.remove_edge(w[0], w[1]);
        }
    }

    /// Removes all edges incident to `node`, in both directions
    pub fn delete_node(&mut self, node: Node) {
        let u = node as usize;
        let out_nbs = self.out_edges[u].take();
        let in_nbs = self.in_edges[u].take();

        // a self-loop is counted in both lists
        let self_loop = out_nbs.has_neighbor(node) as NumEdges;
        self.m -= out_nbs.num_of_neighbors() + in_nbs.num_of_neighbors() - self_loop;

        for v in out_nbs.neighbors() {
            self.in_edges[v as usize].try_remove_neighbor(node);
        }
        for v in in_nbs.neighbors() {
            self.out_edges[v as usize].try_remove_neighbor(node);
        }
    }

    /// Returns the predecessors of `u` in ascending order
    pub fn in_neighbors_of(&self, u: Node) -> NeighborsOf<'_> {
        self.in_edges[u as usize].neighbors()
    }

    /// Returns the number of predecessors of `u`
    pub fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_edges[u as usize].num_of_neighbors()
    }
}

impl GraphNodeOrder for LevelGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for LevelGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.m
    }
}

impl AdjacencyList for LevelGraph {
    type NeighborIter<'a>
        = NeighborsOf<'a>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.out_edges[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_edges[u as usize].num_of_neighbors()
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_edges[u as usize].has_neighbor(v)
    }

    fn first_neighbor_of(&self, u: Node) -> Option<Node> {
        self.out_edges[u as usize].first()
    }
}
