use std::fmt;

use tracing::trace;

use crate::adjacency::{Adjacent, AdjacencyMap};
use crate::error::{GraphError, Result};
use crate::model::{Edge, Vertex, VertexKey};

/// Shared interface of directed and undirected adjacency-map graphs.
///
/// Implementors provide the variant-specific operations (edge insertion and
/// removal, degree queries, incident-edge enumeration and the listing rule
/// used by [`Graph::edges`]); the read-only queries are derived from the
/// backing adjacency store. The trait is sealed: the store is only ever
/// written through `add_vertex`, `add_edge` and the removals.
pub trait Graph: sealed::Sealed {
    type Key: VertexKey;
    type VertexData;
    type EdgeData: Clone;

    /// Read-only view of the backing store.
    fn adjacency(&self) -> &AdjacencyMap<Self::Key, Self::VertexData, Self::EdgeData>;

    fn is_directed(&self) -> bool;

    /// Add `v` unless a vertex with the same id is already present.
    fn add_vertex(&mut self, v: impl Into<Vertex<Self::Key, Self::VertexData>>);

    /// Remove `v` together with every edge incident to it. No-op if absent.
    fn remove_vertex(&mut self, v: &Self::Key);

    /// Insert the edge `u -> v`, adding missing endpoints first, and return it.
    /// Re-adding an edge between the same pair replaces the previous one.
    fn add_edge(
        &mut self,
        u: impl Into<Vertex<Self::Key, Self::VertexData>>,
        v: impl Into<Vertex<Self::Key, Self::VertexData>>,
        weight: Option<f64>,
        data: Option<Self::EdgeData>,
    ) -> Edge<Self::Key, Self::EdgeData>;

    /// Remove `e`. No-op if it is not stored.
    fn remove_edge(&mut self, e: &Edge<Self::Key, Self::EdgeData>);

    fn in_degree(&self, v: &Self::Key) -> usize;

    fn out_degree(&self, v: &Self::Key) -> usize;

    fn degree(&self, v: &Self::Key) -> usize;

    fn in_edges<'a>(
        &'a self,
        v: &'a Self::Key,
    ) -> impl Iterator<Item = &'a Edge<Self::Key, Self::EdgeData>> + 'a;

    fn out_edges<'a>(
        &'a self,
        v: &'a Self::Key,
    ) -> impl Iterator<Item = &'a Edge<Self::Key, Self::EdgeData>> + 'a;

    /// Whether the stored entry `source -> target` represents its logical edge
    /// when enumerating all edges.
    fn lists_edge(source: &Self::Key, target: &Self::Key) -> bool;

    // -- shared operations --

    fn contains_vertex(&self, v: &Self::Key) -> bool {
        self.adjacency().contains_vertex(v)
    }

    fn vertex(&self, v: &Self::Key) -> Option<&Vertex<Self::Key, Self::VertexData>> {
        self.adjacency().vertex(v)
    }

    /// All vertices in order of first insertion.
    fn vertices(&self) -> impl Iterator<Item = &Vertex<Self::Key, Self::VertexData>> + '_ {
        self.adjacency().vertices()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = &Self::Key> + '_ {
        self.adjacency().ids()
    }

    /// Every logical edge exactly once.
    fn edges(&self) -> impl Iterator<Item = &Edge<Self::Key, Self::EdgeData>> + '_ {
        self.adjacency().rows().flat_map(|(u, neighbors)| {
            neighbors
                .iter()
                .filter(move |(v, _)| Self::lists_edge(u, v))
                .map(|(_, e)| e)
        })
    }

    /// Neighbor → edge mapping of `v`; empty if `v` is absent or isolated.
    fn adjacent(&self, v: &Self::Key) -> Adjacent<'_, Self::Key, Self::EdgeData> {
        self.adjacency().neighbors(v)
    }

    fn get_edge(&self, u: &Self::Key, v: &Self::Key) -> Option<&Edge<Self::Key, Self::EdgeData>> {
        self.adjacency().edge(u, v)
    }

    fn endpoints<'e>(
        &self,
        e: &'e Edge<Self::Key, Self::EdgeData>,
    ) -> (&'e Self::Key, &'e Self::Key) {
        e.endpoints()
    }

    /// The endpoint of `e` that is not `v`.
    fn opposite<'e>(
        &self,
        v: &Self::Key,
        e: &'e Edge<Self::Key, Self::EdgeData>,
    ) -> Result<&'e Self::Key> {
        if e.source() == v {
            Ok(e.target())
        } else if e.target() == v {
            Ok(e.source())
        } else {
            Err(GraphError::NotIncident {
                vertex: v.to_string(),
                from: e.source().to_string(),
                to: e.target().to_string(),
            })
        }
    }

    /// Number of vertices.
    fn order(&self) -> usize {
        self.adjacency().vertex_count()
    }

    /// Number of logical edges.
    fn size(&self) -> usize {
        self.edges().count()
    }

    /// Bulk insert unweighted edges.
    fn load_edges<It>(&mut self, edges: It)
    where
        It: IntoIterator<Item = (Self::Key, Self::Key)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v, None, None);
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl<I, V, E> Sealed for super::DirectedGraph<I, V, E> {}
    impl<I, V, E> Sealed for super::UndirectedGraph<I, V, E> {}
}

/// Directed graph: `add_edge(u, v)` stores `u -> v` only.
pub struct DirectedGraph<I, V = (), E = ()> {
    adj: AdjacencyMap<I, V, E>,
}

/// Undirected graph: `add_edge(u, v)` stores `u -> v` and the mirror `v -> u`.
pub struct UndirectedGraph<I, V = (), E = ()> {
    adj: AdjacencyMap<I, V, E>,
}

impl<I: VertexKey, V, E> DirectedGraph<I, V, E> {
    pub fn new() -> Self {
        Self {
            adj: AdjacencyMap::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            adj: AdjacencyMap::with_capacity(vertex_count),
        }
    }
}

impl<I: VertexKey, V, E> UndirectedGraph<I, V, E> {
    pub fn new() -> Self {
        Self {
            adj: AdjacencyMap::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            adj: AdjacencyMap::with_capacity(vertex_count),
        }
    }

    /// Canonical direction of an undirected pair: `u -> v` with `u <= v`.
    fn canonical(u: &I, v: &I) -> bool {
        u <= v
    }
}

impl<I: VertexKey, V, E: Clone> Graph for DirectedGraph<I, V, E> {
    type Key = I;
    type VertexData = V;
    type EdgeData = E;

    fn adjacency(&self) -> &AdjacencyMap<I, V, E> {
        &self.adj
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn add_vertex(&mut self, v: impl Into<Vertex<I, V>>) {
        self.adj.insert_vertex(v.into());
    }

    fn remove_vertex(&mut self, v: &I) {
        if self.adj.remove_vertex(v).is_some() {
            trace!(vertex = %v, "removed vertex");
        }
    }

    fn add_edge(
        &mut self,
        u: impl Into<Vertex<I, V>>,
        v: impl Into<Vertex<I, V>>,
        weight: Option<f64>,
        data: Option<E>,
    ) -> Edge<I, E> {
        let (u, v) = (u.into(), v.into());
        let edge = Edge::new(u.id().clone(), v.id().clone(), weight, data);
        self.adj.insert_vertex(u);
        self.adj.insert_vertex(v);
        let stored = self.adj.insert_edge(edge.clone());
        debug_assert!(stored);
        edge
    }

    fn remove_edge(&mut self, e: &Edge<I, E>) {
        if self.adj.remove_edge(e.source(), e.target()).is_some() {
            trace!(from = %e.source(), to = %e.target(), "removed edge");
        }
    }

    /// Number of vertices with an edge into `v`. Scans every adjacency row.
    fn in_degree(&self, v: &I) -> usize {
        self.adj
            .rows()
            .filter(|(_, neighbors)| neighbors.contains_key(v))
            .count()
    }

    fn out_degree(&self, v: &I) -> usize {
        self.adj.neighbors(v).len()
    }

    /// In-degree plus out-degree.
    fn degree(&self, v: &I) -> usize {
        self.in_degree(v) + self.out_degree(v)
    }

    fn in_edges<'a>(&'a self, v: &'a I) -> impl Iterator<Item = &'a Edge<I, E>> + 'a {
        self.adj
            .rows()
            .filter_map(move |(_, neighbors)| neighbors.get(v))
    }

    fn out_edges<'a>(&'a self, v: &'a I) -> impl Iterator<Item = &'a Edge<I, E>> + 'a {
        self.adj.neighbors(v).edges()
    }

    fn lists_edge(_source: &I, _target: &I) -> bool {
        true
    }
}

impl<I: VertexKey, V, E: Clone> Graph for UndirectedGraph<I, V, E> {
    type Key = I;
    type VertexData = V;
    type EdgeData = E;

    fn adjacency(&self) -> &AdjacencyMap<I, V, E> {
        &self.adj
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn add_vertex(&mut self, v: impl Into<Vertex<I, V>>) {
        self.adj.insert_vertex(v.into());
    }

    fn remove_vertex(&mut self, v: &I) {
        if self.adj.remove_vertex(v).is_some() {
            trace!(vertex = %v, "removed vertex");
        }
    }

    fn add_edge(
        &mut self,
        u: impl Into<Vertex<I, V>>,
        v: impl Into<Vertex<I, V>>,
        weight: Option<f64>,
        data: Option<E>,
    ) -> Edge<I, E> {
        let (u, v) = (u.into(), v.into());
        let edge = Edge::new(u.id().clone(), v.id().clone(), weight, data);
        self.adj.insert_vertex(u);
        self.adj.insert_vertex(v);
        let stored = self.adj.insert_edge(edge.clone()) && self.adj.insert_edge(edge.reversed());
        debug_assert!(stored);
        edge
    }

    fn remove_edge(&mut self, e: &Edge<I, E>) {
        let forward = self.adj.remove_edge(e.source(), e.target());
        let mirror = self.adj.remove_edge(e.target(), e.source());
        if forward.is_some() || mirror.is_some() {
            trace!(from = %e.source(), to = %e.target(), "removed edge");
        }
    }

    fn in_degree(&self, v: &I) -> usize {
        self.degree(v)
    }

    fn out_degree(&self, v: &I) -> usize {
        self.degree(v)
    }

    /// Size of `v`'s neighbor map; a self-loop counts once.
    fn degree(&self, v: &I) -> usize {
        self.adj.neighbors(v).len()
    }

    /// Incident edges of `v` whose stored direction is canonical.
    fn in_edges<'a>(&'a self, v: &'a I) -> impl Iterator<Item = &'a Edge<I, E>> + 'a {
        self.out_edges(v)
    }

    /// Incident edges of `v` whose stored direction is canonical.
    fn out_edges<'a>(&'a self, v: &'a I) -> impl Iterator<Item = &'a Edge<I, E>> + 'a {
        self.adj
            .neighbors(v)
            .iter()
            .filter(move |(u, _)| Self::canonical(v, u))
            .map(|(_, e)| e)
    }

    fn lists_edge(source: &I, target: &I) -> bool {
        Self::canonical(source, target)
    }
}

impl<I: VertexKey, V, E> Default for DirectedGraph<I, V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: VertexKey, V, E> Default for UndirectedGraph<I, V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: VertexKey, V, E> fmt::Display for DirectedGraph<I, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.adj, f)
    }
}

impl<I: VertexKey, V, E> fmt::Display for UndirectedGraph<I, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.adj, f)
    }
}
