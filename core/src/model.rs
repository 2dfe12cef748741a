use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a vertex. Any stable, totally ordered, hashable scalar works:
/// string ids (`&str`, `String`) and integer ids (`u64`, `i64`, ...) both do.
///
/// The `Ord` bound supplies the canonical tie-break used to list each
/// undirected edge exactly once.
pub trait VertexKey: Clone + Eq + Hash + Ord + fmt::Display {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Ord + fmt::Display {}

/// A graph vertex: an immutable identity plus an optional payload.
///
/// Equality and hashing look at the identity only, so two vertices with the
/// same id and different payloads are the same vertex.
#[derive(Debug, Clone)]
pub struct Vertex<I, V = ()> {
    id: I,
    data: Option<V>,
}

impl<I, V> Vertex<I, V> {
    pub fn new(id: I) -> Self {
        Self { id, data: None }
    }

    pub fn with_data(id: I, data: V) -> Self {
        Self {
            id,
            data: Some(data),
        }
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn data(&self) -> Option<&V> {
        self.data.as_ref()
    }
}

impl<I, V> From<I> for Vertex<I, V> {
    fn from(id: I) -> Self {
        Self::new(id)
    }
}

impl<I: PartialEq, V> PartialEq for Vertex<I, V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<I: Eq, V> Eq for Vertex<I, V> {}

impl<I: Hash, V> Hash for Vertex<I, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<I: fmt::Display, V> fmt::Display for Vertex<I, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({})", self.id)
    }
}

/// A directed connection `source -> target` with optional weight and payload.
///
/// Edges are value objects: once built they are never mutated. Undirected
/// graphs store each logical edge as two `Edge`s, one per direction, carrying
/// the same weight and payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<I, E = ()> {
    source: I,
    target: I,
    weight: Option<f64>,
    data: Option<E>,
}

impl<I, E> Edge<I, E> {
    pub fn new(source: I, target: I, weight: Option<f64>, data: Option<E>) -> Self {
        Self {
            source,
            target,
            weight,
            data,
        }
    }

    pub fn source(&self) -> &I {
        &self.source
    }

    pub fn target(&self) -> &I {
        &self.target
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn data(&self) -> Option<&E> {
        self.data.as_ref()
    }

    /// `(source, target)`.
    pub fn endpoints(&self) -> (&I, &I) {
        (&self.source, &self.target)
    }

    /// True if `v` is either endpoint.
    pub fn is_incident(&self, v: &I) -> bool
    where
        I: PartialEq,
    {
        self.source == *v || self.target == *v
    }
}

impl<I: Clone, E: Clone> Edge<I, E> {
    /// The mirror entry `target -> source` with identical weight and payload.
    pub(crate) fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            weight: self.weight,
            data: self.data.clone(),
        }
    }
}

impl<I: fmt::Display, E> fmt::Display for Edge<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "Edge({} -> {}, w={})", self.source, self.target, w),
            None => write!(f, "Edge({} -> {})", self.source, self.target),
        }
    }
}
