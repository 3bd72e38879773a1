use std::fmt::{Debug, Display};

use crate::Node;

/// A directed edge `from -> to`.
///
/// In a [`BipartiteInstance`](crate::instance::BipartiteInstance) edges use the 1-based item
/// indices of the input, which coincide with the internal indices of the flow network since
/// index `0` is taken by the source.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Edge(3, 7).to_string(), "(3,7)");
        assert_eq!(format!("{:?}", [Edge(0, 1), Edge::from((2, 5))]), "[(0,1), (2,5)]");
    }
}
