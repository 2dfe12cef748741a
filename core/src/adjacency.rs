use std::fmt;

use indexmap::map::Iter;
use indexmap::IndexMap;

use crate::model::{Edge, Vertex, VertexKey};

/// Neighbor map of a single vertex: neighbor id → edge to that neighbor.
pub type NeighborMap<I, E> = IndexMap<I, Edge<I, E>>;

struct Slot<I, V, E> {
    vertex: Vertex<I, V>,
    neighbors: NeighborMap<I, E>,
}

/// Adjacency store shared by both graph variants.
///
/// Maps each vertex id to its vertex record and its outgoing neighbor map.
/// Entries are only created by `insert_vertex`/`insert_edge`; read paths
/// never grow the map. Iteration follows insertion order, and removals shift
/// later entries down so the remaining order is preserved.
pub struct AdjacencyMap<I, V = (), E = ()> {
    slots: IndexMap<I, Slot<I, V, E>>,
}

impl<I: VertexKey, V, E> AdjacencyMap<I, V, E> {
    pub(crate) fn new() -> Self {
        Self {
            slots: IndexMap::new(),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub(crate) fn with_capacity(vertex_count: usize) -> Self {
        Self {
            slots: IndexMap::with_capacity(vertex_count),
        }
    }

    /// Insert a vertex if its id is not present yet. Returns true if inserted.
    /// An existing vertex keeps its original payload.
    pub(crate) fn insert_vertex(&mut self, vertex: Vertex<I, V>) -> bool {
        if self.slots.contains_key(vertex.id()) {
            return false;
        }
        self.slots.insert(
            vertex.id().clone(),
            Slot {
                vertex,
                neighbors: IndexMap::new(),
            },
        );
        true
    }

    /// Remove a vertex and every entry pointing at it from other neighbor maps.
    pub(crate) fn remove_vertex(&mut self, id: &I) -> Option<Vertex<I, V>> {
        if !self.slots.contains_key(id) {
            return None;
        }
        for slot in self.slots.values_mut() {
            slot.neighbors.shift_remove(id);
        }
        self.slots.shift_remove(id).map(|slot| slot.vertex)
    }

    /// Store `edge` under its source, replacing any previous edge to the same
    /// target in place. Returns false and stores nothing unless both endpoints
    /// are already present.
    #[must_use]
    pub(crate) fn insert_edge(&mut self, edge: Edge<I, E>) -> bool {
        if !self.slots.contains_key(edge.target()) {
            return false;
        }
        match self.slots.get_mut(edge.source()) {
            Some(slot) => {
                slot.neighbors.insert(edge.target().clone(), edge);
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_edge(&mut self, source: &I, target: &I) -> Option<Edge<I, E>> {
        self.slots
            .get_mut(source)
            .and_then(|slot| slot.neighbors.shift_remove(target))
    }

    pub fn contains_vertex(&self, id: &I) -> bool {
        self.slots.contains_key(id)
    }

    pub fn vertex(&self, id: &I) -> Option<&Vertex<I, V>> {
        self.slots.get(id).map(|slot| &slot.vertex)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<I, V>> + '_ {
        self.slots.values().map(|slot| &slot.vertex)
    }

    pub fn ids(&self) -> impl Iterator<Item = &I> + '_ {
        self.slots.keys()
    }

    pub fn neighbors(&self, id: &I) -> Adjacent<'_, I, E> {
        Adjacent {
            map: self.slots.get(id).map(|slot| &slot.neighbors),
        }
    }

    pub fn edge(&self, source: &I, target: &I) -> Option<&Edge<I, E>> {
        self.slots
            .get(source)
            .and_then(|slot| slot.neighbors.get(target))
    }

    /// Every stored `(source, neighbor map)` pair in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = (&I, &NeighborMap<I, E>)> + '_ {
        self.slots.iter().map(|(id, slot)| (id, &slot.neighbors))
    }

    pub fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored directed entries (mirrors counted separately).
    pub fn entry_count(&self) -> usize {
        self.slots.values().map(|slot| slot.neighbors.len()).sum()
    }
}

/// One line per vertex: `id: [n1, n2, ...]`, neighbors in adjacency order.
impl<I: VertexKey, V, E> fmt::Display for AdjacencyMap<I, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (id, slot)) in self.slots.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: [", id)?;
            for (j, neighbor) in slot.neighbors.keys().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", neighbor)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Read-only view of a vertex's neighbor → edge mapping.
///
/// Empty when the vertex is absent or isolated.
#[derive(Debug)]
pub struct Adjacent<'a, I, E> {
    map: Option<&'a NeighborMap<I, E>>,
}

impl<I, E> Clone for Adjacent<'_, I, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, E> Copy for Adjacent<'_, I, E> {}

impl<'a, I: VertexKey, E> Adjacent<'a, I, E> {
    pub fn len(&self) -> usize {
        self.map.map_or(0, |m| m.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, neighbor: &I) -> Option<&'a Edge<I, E>> {
        self.map.and_then(|m| m.get(neighbor))
    }

    pub fn contains(&self, neighbor: &I) -> bool {
        self.get(neighbor).is_some()
    }

    /// Neighbor ids in adjacency order.
    pub fn keys(&self) -> impl Iterator<Item = &'a I> + 'a {
        self.map.into_iter().flat_map(|m| m.keys())
    }

    /// Incident edges in adjacency order.
    pub fn edges(&self) -> impl Iterator<Item = &'a Edge<I, E>> + 'a {
        self.map.into_iter().flat_map(|m| m.values())
    }

    pub fn iter(&self) -> AdjacentIter<'a, I, E> {
        AdjacentIter {
            inner: self.map.map(|m| m.iter()),
        }
    }
}

impl<'a, I: VertexKey, E> IntoIterator for Adjacent<'a, I, E> {
    type Item = (&'a I, &'a Edge<I, E>);
    type IntoIter = AdjacentIter<'a, I, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(neighbor, edge)` pairs of an [`Adjacent`] view.
pub struct AdjacentIter<'a, I, E> {
    inner: Option<Iter<'a, I, Edge<I, E>>>,
}

impl<'a, I, E> Iterator for AdjacentIter<'a, I, E> {
    type Item = (&'a I, &'a Edge<I, E>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut().and_then(|it| it.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |it| it.size_hint())
    }
}
