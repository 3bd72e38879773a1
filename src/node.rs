/*!
# Node Representation

We choose `Node = u32` as instances handled here involve far less than `2^32` vertices.
The flow network adds two vertices (source and sink) to the matchable items, so an
instance with `n` items occupies the indices `0..n + 2`.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a network
pub type NumNodes = Node;

/// Largest number of matchable items: source and sink are added and `INVALID_NODE` stays unused
pub const MAX_ITEMS: NumNodes = Node::MAX - 3;
