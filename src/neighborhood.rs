/*!
# Neighborhoods

Both the residual network and its level graphs store one [`SortedNeighborhood`] per vertex.
The networks built from matching instances are sparse, so memory stays linear in the number
of edges. Keeping each neighborhood sorted makes neighbor enumeration ascending, which the
flow algorithm relies on to break ties deterministically.
*/

use std::{iter::Copied, slice::Iter};

use smallvec::SmallVec;

use crate::*;

/// Ascending iterator over one neighborhood
pub type NeighborsOf<'a> = Copied<Iter<'a, Node>>;

/// Ascending list of distinct neighbors backed by a `SmallVec`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortedNeighborhood(SmallVec<[Node; 4]>);

impl SortedNeighborhood {
    /// Creates an empty neighborhood
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of neighbors
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns an iterator over all neighbors in ascending order
    pub fn neighbors(&self) -> NeighborsOf<'_> {
        self.0.iter().copied()
    }

    /// Returns the smallest neighbor, if any
    pub fn first(&self) -> Option<Node> {
        self.0.first().copied()
    }

    /// Returns *true* if `v` is a neighbor
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.0.binary_search(&v).is_ok()
    }

    /// Tries to add a neighbor.
    /// Returns *true* if the node was in the neighborhood before.
    pub fn try_add_neighbor(&mut self, v: Node) -> bool {
        match self.0.binary_search(&v) {
            Ok(_) => true,
            Err(pos) => {
                self.0.insert(pos, v);
                false
            }
        }
    }

    /// Tries to remove a neighbor.
    /// Returns *true* if the node was in the neighborhood before.
    pub fn try_remove_neighbor(&mut self, v: Node) -> bool {
        match self.0.binary_search(&v) {
            Ok(pos) => {
                self.0.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes all neighbors and returns them in ascending order
    pub fn take(&mut self) -> SortedNeighborhood {
        std::mem::take(self)
    }

    /// Removes all neighbors but keeps the allocation
    pub fn clear(&mut self) {
        self.0.clear();
    }
}
