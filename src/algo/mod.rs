/*!
# Algorithms

The flow network, its phase-scoped level graphs and Dinic's algorithm on top of them.
All types are re-exported at the top level of this module, so you can simply do:
```rust
use bimatch::algo::*;
```
[`Dinic`] is provided as an **iterator** over augmenting paths, making it easy to inspect
every step or to simply run it to completion.
*/

mod dinic;
mod level_graph;
mod residual;

use crate::prelude::*;

pub use dinic::*;
pub use level_graph::*;
pub use residual::*;
