/*!
`bimatch` computes maximum matchings of bipartite instances, e.g. people to tasks or
applicants to positions, using Dinic's blocking-flow algorithm on a unit-capacity network.

# Representation

We represent **vertices** as `u32`. An instance with `n` items (half of them on the left side,
half on the right side) becomes a flow network with `n + 2` vertices:
- vertex `0` is the source,
- vertices `1..=n/2` are the left items,
- vertices `n/2 + 1..=n` are the right items,
- vertex `n + 1` is the sink.

Hence the 1-based item indices used in input files coincide with the vertex indices of the
network. For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Both the residual network and the per-phase level graphs store one sorted neighborhood per
vertex, so memory is linear in the size of the instance and neighbors are always enumerated in
ascending order which makes every run deterministic.

# Design

Algorithms and IO handlers are provided as configurable structs that one can alter to their
needs using the *Builder* / *Setter* pattern before running them. The most common uses are
available via traits and shorthands on the data itself:

```
use bimatch::{instance::BipartiteInstance, io::*};

let input = "4\nAnn\nBob\nCook\nDriver\n3\n1 3\n1 4\n2 3\n";
let instance = BipartiteInstance::try_read_instance(input.as_bytes()).unwrap();

let matching = instance.maximum_matching();
assert_eq!(matching.len(), 2);
```

# Usage

- [`instance`] holds the parsed description of a matching problem,
- [`algo`] includes the [`ResidualNetwork`](algo::ResidualNetwork), its
  [`LevelGraph`](algo::LevelGraph)s and the [`Dinic`](algo::Dinic) solver,
- [`matching`] holds the resulting left-to-right assignment,
- [`gens`] includes generators for random and structured instances,
- [`io`] includes the reader for instance files and the writer for matchings.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod instance;
pub mod io;
pub mod matching;
pub mod neighborhood;
pub mod node;
pub mod ops;
#[cfg(test)]
pub(crate) mod testing;

/// `bimatch::prelude` includes definitions for nodes, edges and neighborhoods as well as all basic network operation traits.
pub mod prelude {
    pub use super::{edge::*, neighborhood::*, node::*, ops::*};
}

pub use prelude::*;
