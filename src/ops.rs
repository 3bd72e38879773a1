use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a network
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the network
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all vertices.
    /// The range does not borrow `self` and may hence be used while mutating the network.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }
}

/// Provides getters pertaining to the edge-size of a network
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the network
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the network has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Directed adjacency access.
///
/// Neighbors are always reported in ascending order. Traversals in this crate rely on this
/// to break ties deterministically (lowest index first).
pub trait AdjacencyList: GraphNodeOrder {
    /// Iterator over the out-neighbors of a node
    type NeighborIter<'a>: Iterator<Item = Node>
    where
        Self: 'a;

    /// Returns an iterator over the out-neighbors of `u` in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns the number of out-neighbors of `u`.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns *true* if the edge `(u, v)` exists.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns the out-neighbor of `u` with the smallest index, if any
    fn first_neighbor_of(&self, u: Node) -> Option<Node> {
        self.neighbors_of(u).next()
    }

    /// Returns all edges in lexicographical order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.neighbors_of(u).map(move |v| Edge(u, v)))
    }
}
