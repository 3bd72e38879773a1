/*!
# Bipartite Instances

A [`BipartiteInstance`] is the parsed, not yet solved, description of a matching problem:
`n` labelled items (the first `n / 2` form the left set, the remaining `n / 2` the right set)
and a list of edges between them using 1-based item indices.
*/

use crate::{algo::*, matching::Matching, *};

/// Items to be matched together with their candidate pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BipartiteInstance {
    /// `labels[i]` is the label of item `i + 1`
    labels: Vec<String>,
    /// 1-based edges `Edge(from, to)`
    edges: Vec<Edge>,
}

impl BipartiteInstance {
    /// Creates an instance with `n` unlabelled items and no edges.
    /// Unlabelled (i.e. empty) labels are reported by their 1-based index.
    /// ** Panics if `n` is odd or exceeds [`MAX_ITEMS`] **
    pub fn new(n: NumNodes) -> Self {
        assert!(n % 2 == 0, "number of items must be even, got {n}");
        assert!(n <= MAX_ITEMS, "number of items must not exceed {MAX_ITEMS}, got {n}");
        Self {
            labels: vec![String::new(); n as usize],
            edges: Vec::new(),
        }
    }

    /// Creates an instance from the labels of both sides.
    /// ** Panics if both sides differ in size **
    pub fn from_labels<L, R, S>(left: L, right: R) -> Self
    where
        L: IntoIterator<Item = S>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = left.into_iter().map(Into::into).collect();
        let per_side = labels.len();
        labels.extend(right.into_iter().map(Into::into));
        assert_eq!(
            labels.len(),
            2 * per_side,
            "both sides of a bipartite instance must have the same size"
        );

        Self {
            labels,
            edges: Vec::new(),
        }
    }

    /// Sets the label of the 1-based item `index`
    pub fn set_label<S: Into<String>>(&mut self, index: Node, label: S) {
        assert!(
            (1..=self.number_of_items()).contains(&index),
            "item index {index} out of bounds"
        );
        self.labels[index as usize - 1] = label.into();
    }

    /// Adds the edge `from -> to` using 1-based item indices
    pub fn add_edge(&mut self, from: Node, to: Node) {
        let n = self.number_of_items();
        assert!(
            (1..=n).contains(&from) && (1..=n).contains(&to),
            "edge ({from},{to}) out of bounds for {n} items"
        );
        self.edges.push(Edge(from, to));
    }

    /// Adds all edges of an iterator using 1-based item indices
    pub fn add_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(Into::into) {
            self.add_edge(u, v);
        }
    }

    /// Number of items of both sides combined
    pub fn number_of_items(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Number of items on each side
    pub fn items_per_side(&self) -> NumNodes {
        self.number_of_items() / 2
    }

    /// Number of edges (duplicates included)
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns the label of the 1-based item `index`
    pub fn label(&self, index: Node) -> &str {
        &self.labels[index as usize - 1]
    }

    /// Labels of all items, left side first
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels of the left side
    pub fn left_labels(&self) -> &[String] {
        &self.labels[..self.items_per_side() as usize]
    }

    /// Labels of the right side
    pub fn right_labels(&self) -> &[String] {
        &self.labels[self.items_per_side() as usize..]
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns *true* if the 1-based item `index` belongs to the left side
    pub fn is_left(&self, index: Node) -> bool {
        (1..=self.items_per_side()).contains(&index)
    }

    /// Returns *true* if the 1-based item `index` belongs to the right side
    pub fn is_right(&self, index: Node) -> bool {
        (self.items_per_side() + 1..=self.number_of_items()).contains(&index)
    }

    /// Returns *true* if `Edge(from, to)` was given as part of the instance
    pub fn contains_edge(&self, from: Node, to: Node) -> bool {
        self.edges.contains(&Edge(from, to))
    }

    /// Builds the residual network, runs Dinic's algorithm to completion and returns the
    /// resulting maximum matching.
    pub fn maximum_matching(&self) -> Matching {
        Dinic::new(ResidualNetwork::from_instance(self))
            .run()
            .into_matching()
    }
}
