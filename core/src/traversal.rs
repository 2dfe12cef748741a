use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::graph::Graph;
use crate::model::VertexKey;
use crate::path::reconstruct_path;

/// Per-vertex discovery state. Transitions only move forward:
/// `Undiscovered -> Discovered -> Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Undiscovered,
    Discovered,
    Finished,
}

/// Shortest edge-count distance per vertex; `None` marks unreachable.
pub type DistanceMap<I> = IndexMap<I, Option<u32>>;

/// BFS-tree parent per vertex; `None` for the source and unreachable vertices.
pub type PredecessorMap<I> = IndexMap<I, Option<I>>;

/// Outcome of a single-source BFS.
#[derive(Debug, Clone)]
pub struct BfsResult<I> {
    pub source: I,
    pub distance: DistanceMap<I>,
    pub predecessor: PredecessorMap<I>,
    /// Vertices in the order they were dequeued.
    pub order: Vec<I>,
    pub colors: IndexMap<I, Color>,
}

impl<I: VertexKey> BfsResult<I> {
    pub fn distance_to(&self, v: &I) -> Option<u32> {
        self.distance.get(v).copied().flatten()
    }

    pub fn is_reachable(&self, v: &I) -> bool {
        self.distance_to(v).is_some()
    }

    /// Number of vertices reached, source included.
    pub fn reached(&self) -> usize {
        self.order.len()
    }

    /// Source-to-`target` path through the BFS tree, empty if unreachable.
    pub fn path_to(&self, target: &I) -> Vec<I> {
        reconstruct_path(&self.predecessor, &self.source, target)
    }

    /// Reached vertices grouped by distance: `layers()[d]` holds every vertex
    /// at distance `d`, in discovery order.
    pub fn layers(&self) -> Vec<Vec<I>> {
        let mut layers: Vec<Vec<I>> = Vec::new();
        for v in &self.order {
            let Some(d) = self.distance_to(v) else {
                continue;
            };
            let d = d as usize;
            if layers.len() <= d {
                layers.resize_with(d + 1, Vec::new);
            }
            layers[d].push(v.clone());
        }
        layers
    }
}

/// Side tables of one traversal, keyed by vertex id.
///
/// A single `BfsState` can serve several [`BfsState::visit`] calls; vertices
/// reached by an earlier visit are skipped by later ones.
pub(crate) struct BfsState<I> {
    color: IndexMap<I, Color>,
    distance: DistanceMap<I>,
    predecessor: PredecessorMap<I>,
    order: Vec<I>,
}

impl<I: VertexKey> BfsState<I> {
    /// Every vertex of `graph` starts undiscovered, unreachable, without parent.
    pub(crate) fn new<G>(graph: &G) -> Self
    where
        G: Graph<Key = I>,
    {
        let n = graph.order();
        let mut color = IndexMap::with_capacity(n);
        let mut distance = IndexMap::with_capacity(n);
        let mut predecessor = IndexMap::with_capacity(n);
        for id in graph.vertex_ids() {
            color.insert(id.clone(), Color::Undiscovered);
            distance.insert(id.clone(), None);
            predecessor.insert(id.clone(), None);
        }
        Self {
            color,
            distance,
            predecessor,
            order: Vec::with_capacity(n),
        }
    }

    pub(crate) fn color(&self, v: &I) -> Color {
        self.color.get(v).copied().unwrap_or(Color::Undiscovered)
    }

    pub(crate) fn order(&self) -> &[I] {
        &self.order
    }

    /// Breadth-first visit from `start`, extending the shared tables.
    ///
    /// Neighbors are scanned in `adjacent(u)` order and the queue is strict
    /// FIFO, so every vertex at distance `d` is dequeued before any vertex at
    /// distance `d + 1`; each vertex is enqueued at most once.
    pub(crate) fn visit<G>(&mut self, graph: &G, start: &I)
    where
        G: Graph<Key = I>,
    {
        self.color.insert(start.clone(), Color::Discovered);
        self.distance.insert(start.clone(), Some(0));
        self.predecessor.insert(start.clone(), None);

        let mut queue: VecDeque<I> = VecDeque::new();
        queue.push_back(start.clone());

        while let Some(u) = queue.pop_front() {
            let next = self.distance.get(&u).copied().flatten().map(|d| d + 1);

            for v in graph.adjacent(&u).keys() {
                if self.color(v) == Color::Undiscovered {
                    trace!(vertex = %v, parent = %u, "discovered");
                    self.color.insert(v.clone(), Color::Discovered);
                    self.distance.insert(v.clone(), next);
                    self.predecessor.insert(v.clone(), Some(u.clone()));
                    queue.push_back(v.clone());
                }
            }

            self.color.insert(u.clone(), Color::Finished);
            self.order.push(u);
        }
    }

    pub(crate) fn into_result(self, source: I) -> BfsResult<I> {
        BfsResult {
            source,
            distance: self.distance,
            predecessor: self.predecessor,
            order: self.order,
            colors: self.color,
        }
    }
}

/// Breadth-first search from `source`.
///
/// Computes, for every vertex of `graph`, its edge-count distance from
/// `source` and its BFS-tree parent, plus the discovery order. Runs in
/// O(V + E). Vertices that cannot be reached keep distance `None` and no
/// predecessor.
///
/// A `source` that is not in the graph is treated as an isolated start: it
/// is reported at distance 0 and nothing else is reached.
pub fn bfs<G>(graph: &G, source: &G::Key) -> BfsResult<G::Key>
where
    G: Graph,
{
    if !graph.contains_vertex(source) {
        debug!(source = %source, "bfs source not in graph");
    }

    let mut state = BfsState::new(graph);
    state.visit(graph, source);

    debug!(
        source = %source,
        reached = state.order().len(),
        vertices = graph.order(),
        "bfs complete"
    );
    state.into_result(source.clone())
}

/// Shortest unweighted path from `start` to `target`, both endpoints included.
///
/// Returns `None` if either vertex is not in the graph or `target` cannot be
/// reached. `start == target` yields a single-vertex path.
pub fn shortest_path<G>(graph: &G, start: &G::Key, target: &G::Key) -> Option<Vec<G::Key>>
where
    G: Graph,
{
    if !graph.contains_vertex(start) || !graph.contains_vertex(target) {
        return None;
    }

    let result = bfs(graph, start);
    let path = result.path_to(target);
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, UndirectedGraph};

    fn make_chain(n: u64) -> UndirectedGraph<u64> {
        let mut g = UndirectedGraph::new();
        g.load_edges((0..n.saturating_sub(1)).map(|i| (i, i + 1)));
        g
    }

    fn make_star(center: u64, leaves: u64) -> UndirectedGraph<u64> {
        let mut g = UndirectedGraph::new();
        g.load_edges((1..=leaves).map(|i| (center, center + i)));
        g
    }

    fn make_cycle(n: u64) -> DirectedGraph<u64> {
        let mut g = DirectedGraph::new();
        g.load_edges((0..n).map(|i| (i, (i + 1) % n)));
        g
    }

    fn clrs_example() -> UndirectedGraph<&'static str> {
        let mut g = UndirectedGraph::new();
        g.load_edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "E")]);
        g
    }

    #[test]
    fn test_bfs_clrs_example() {
        let g = clrs_example();
        let r = bfs(&g, &"A");
        assert_eq!(r.order, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(r.distance_to(&"A"), Some(0));
        assert_eq!(r.distance_to(&"B"), Some(1));
        assert_eq!(r.distance_to(&"C"), Some(1));
        assert_eq!(r.distance_to(&"D"), Some(2));
        assert_eq!(r.distance_to(&"E"), Some(2));
        assert_eq!(r.predecessor[&"E"], Some("C"));
        assert_eq!(r.predecessor[&"A"], None);
        assert_eq!(r.path_to(&"E"), vec!["A", "C", "E"]);
    }

    #[test]
    fn test_bfs_chain() {
        let g = make_chain(5);
        let r = bfs(&g, &0);
        assert_eq!(r.order, vec![0, 1, 2, 3, 4]);
        assert_eq!(r.distance_to(&4), Some(4));
        assert_eq!(r.reached(), 5);
    }

    #[test]
    fn test_bfs_star() {
        let g = make_star(0, 10);
        let r = bfs(&g, &0);
        assert_eq!(r.reached(), 11);
        assert!((1..=10u64).all(|leaf| r.distance_to(&leaf) == Some(1)));
        assert_eq!(r.layers().len(), 2);
        assert_eq!(r.layers()[1].len(), 10);
    }

    #[test]
    fn test_bfs_cycle_no_infinite_loop() {
        let g = make_cycle(6);
        let r = bfs(&g, &0);
        assert_eq!(r.reached(), 6);
        assert_eq!(r.distance_to(&5), Some(5));
    }

    #[test]
    fn test_bfs_directed_respects_direction() {
        let g = make_cycle(4);
        let r = bfs(&g, &2);
        assert_eq!(r.order, vec![2, 3, 0, 1]);

        let mut d: DirectedGraph<u64> = DirectedGraph::new();
        d.load_edges([(0, 1), (1, 2)]);
        let r = bfs(&d, &2);
        assert_eq!(r.reached(), 1);
        assert!(!r.is_reachable(&0));
    }

    #[test]
    fn test_bfs_unreachable() {
        let mut g = make_chain(3);
        g.add_vertex(99);
        let r = bfs(&g, &0);
        assert_eq!(r.distance.get(&99), Some(&None));
        assert_eq!(r.predecessor.get(&99), Some(&None));
        assert_eq!(r.colors[&99], Color::Undiscovered);
        assert!(r.path_to(&99).is_empty());
    }

    #[test]
    fn test_bfs_all_reached_are_finished() {
        let g = clrs_example();
        let r = bfs(&g, &"B");
        assert!(r.colors.values().all(|c| *c == Color::Finished));
        assert_eq!(r.colors.len(), g.order());
    }

    #[test]
    fn test_bfs_state_covers_every_vertex() {
        let mut g = make_chain(3);
        g.add_vertex(7);
        let r = bfs(&g, &1);
        assert_eq!(r.distance.len(), 4);
        assert_eq!(r.predecessor.len(), 4);
    }

    #[test]
    fn test_bfs_start_not_in_graph() {
        let g = make_chain(3);
        let r = bfs(&g, &42);
        assert_eq!(r.order, vec![42]);
        assert_eq!(r.distance_to(&42), Some(0));
        assert!((0..3u64).all(|v| !r.is_reachable(&v)));
    }

    #[test]
    fn test_bfs_empty_graph() {
        let g: UndirectedGraph<u64> = UndirectedGraph::new();
        let r = bfs(&g, &0);
        assert_eq!(r.reached(), 1);
        assert_eq!(r.layers(), vec![vec![0]]);
    }

    #[test]
    fn test_bfs_self_loop() {
        let mut g: UndirectedGraph<u64> = UndirectedGraph::new();
        g.load_edges([(0, 0), (0, 1)]);
        let r = bfs(&g, &0);
        assert_eq!(r.order, vec![0, 1]);
        assert_eq!(r.predecessor[&0], None);
    }

    #[test]
    fn test_bfs_layers_non_decreasing() {
        let mut g: UndirectedGraph<u64> = UndirectedGraph::new();
        g.load_edges([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5), (1, 5)]);
        let r = bfs(&g, &0);
        let dists: Vec<u32> = r.order.iter().filter_map(|v| r.distance_to(v)).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(r.distance_to(&5), Some(2));
    }

    #[test]
    fn test_shortest_path_chain() {
        let g = make_chain(5);
        assert_eq!(shortest_path(&g, &0, &4), Some(vec![0, 1, 2, 3, 4]));
        assert_eq!(shortest_path(&g, &4, &1), Some(vec![4, 3, 2, 1]));
    }

    #[test]
    fn test_shortest_path_self() {
        let g = make_chain(3);
        assert_eq!(shortest_path(&g, &1, &1), Some(vec![1]));
    }

    #[test]
    fn test_shortest_path_no_path() {
        let mut g = make_chain(3);
        g.add_vertex(10);
        assert_eq!(shortest_path(&g, &0, &10), None);
    }

    #[test]
    fn test_shortest_path_missing_endpoint() {
        let g = make_chain(3);
        assert_eq!(shortest_path(&g, &0, &50), None);
        assert_eq!(shortest_path(&g, &50, &0), None);
        assert_eq!(shortest_path(&g, &50, &50), None);
    }
}
