/*!
# Matching

A [`Matching`] maps left vertices to right vertices of a bipartite flow network.
Entries are kept in the order in which their left vertex was *first* matched; re-matching a
left vertex overwrites its partner but keeps its position.
*/

use indexmap::IndexMap;

use crate::*;

/// A partial map from left vertices to right vertices.
///
/// The map is keyed by the left vertex, so every left vertex occurs at most once. Whether
/// every right vertex occurs at most once as well is guaranteed by the flow algorithm, not by
/// this type; see [`Matching::has_unique_partners`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching(IndexMap<Node, Node>);

impl Matching {
    /// Creates an empty matching
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches `left` with `right` and returns the previous partner of `left`, if any.
    /// A left vertex that was matched before keeps its position in the iteration order.
    pub fn insert(&mut self, left: Node, right: Node) -> Option<Node> {
        self.0.insert(left, right)
    }

    /// Returns the partner of `left`, if `left` is matched
    pub fn partner_of(&self, left: Node) -> Option<Node> {
        self.0.get(&left).copied()
    }

    /// Returns *true* if `left` is matched
    pub fn is_matched(&self, left: Node) -> bool {
        self.0.contains_key(&left)
    }

    /// Number of matched pairs
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns *true* if no pair is matched
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all pairs `(left, right)` in first-insertion order of the left vertex
    pub fn iter(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.0.iter().map(|(&l, &r)| (l, r))
    }

    /// Iterates over all pairs as [`Edge`]s
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.iter().map(Edge::from)
    }

    /// Returns *true* if no right vertex is the partner of two different left vertices
    pub fn has_unique_partners(&self) -> bool {
        let mut partners = self.0.values().copied().collect::<Vec<_>>();
        partners.sort_unstable();
        partners.windows(2).all(|w| w[0] != w[1])
    }
}

impl<'a> IntoIterator for &'a Matching {
    type Item = (&'a Node, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, Node, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Node, Node)> for Matching {
    fn from_iter<T: IntoIterator<Item = (Node, Node)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
