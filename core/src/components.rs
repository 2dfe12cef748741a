use tracing::debug;

use crate::graph::{Graph, UndirectedGraph};
use crate::model::VertexKey;
use crate::traversal::{BfsState, Color};

/// Number of connected components of an undirected graph.
///
/// Vertices are scanned in `vertices()` order; every vertex still
/// undiscovered starts a new BFS visit over the same shared state, so each
/// visit sweeps exactly one component. Directed graphs are rejected by the
/// parameter type.
pub fn connected_components<I, V, E>(graph: &UndirectedGraph<I, V, E>) -> usize
where
    I: VertexKey,
    E: Clone,
{
    let mut state = BfsState::new(graph);
    let mut count = 0;

    for root in graph.vertex_ids() {
        if state.color(root) == Color::Undiscovered {
            count += 1;
            state.visit(graph, root);
        }
    }

    debug!(components = count, vertices = graph.order(), "connected components");
    count
}

/// Members of each connected component, in BFS discovery order from the
/// component's root. Components are ordered by their root's position in
/// `vertices()`.
pub fn components<I, V, E>(graph: &UndirectedGraph<I, V, E>) -> Vec<Vec<I>>
where
    I: VertexKey,
    E: Clone,
{
    let mut state = BfsState::new(graph);
    let mut components = Vec::new();

    for root in graph.vertex_ids() {
        if state.color(root) != Color::Undiscovered {
            continue;
        }
        let before = state.order().len();
        state.visit(graph, root);
        let members = state.order()[before..].to_vec();
        debug!(root = %root, size = members.len(), "component");
        components.push(members);
    }

    components
}
