//! graph-bfs-core: adjacency-map graphs and breadth-first traversal.
//!
//! A pure Rust library providing directed and undirected graphs behind a
//! shared [`Graph`] trait, a CLRS-style BFS engine (distances, BFS tree,
//! discovery order), connected-component counting and path reconstruction
//! from a predecessor map. No I/O: callers build graphs and read results.

mod adjacency;
mod components;
mod error;
mod graph;
mod model;
mod path;
mod traversal;

pub use adjacency::{Adjacent, AdjacentIter};
pub use components::{components, connected_components};
pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, Graph, UndirectedGraph};
pub use model::{Edge, Vertex, VertexKey};
pub use path::reconstruct_path;
pub use traversal::{bfs, shortest_path, BfsResult, Color, DistanceMap, PredecessorMap};
