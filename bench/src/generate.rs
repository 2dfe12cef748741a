use std::collections::VecDeque;

use graph_bfs_core::{Graph, UndirectedGraph, Vertex};

/// Generated graphs carry a vertex label and an edge relationship label.
pub type BenchGraph = UndirectedGraph<u64, &'static str, &'static str>;

// Generators are O(n) or O(n + edges), single-threaded, deterministic.

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

const REL_TYPES: [&str; 5] = ["IMPLIES", "SUPPORTS", "CONTRADICTS", "RELATED_TO", "REQUIRES"];

fn link(graph: &mut BenchGraph, rng: &mut FastRng, u: u64, v: u64) {
    let rel = REL_TYPES[rng.next(REL_TYPES.len() as u64) as usize];
    graph.add_edge(u, v, None, Some(rel));
}

fn add_labeled(graph: &mut BenchGraph, id: u64, label: &'static str) {
    graph.add_vertex(Vertex::with_data(id, label));
}

/// Path 0 - 1 - ... - (n-1). Longest possible BFS tree and path.
pub fn gen_chain(node_count: u64) -> BenchGraph {
    let mut graph = BenchGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(7);
    add_labeled(&mut graph, 0, "Root");
    for i in 1..node_count {
        add_labeled(&mut graph, i, "Concept");
        link(&mut graph, &mut rng, i - 1, i);
    }
    graph
}

/// L-system fractal tree: each vertex spawns three children.
///
/// Deep branching with exponential width; exercises layering and path
/// reconstruction.
pub fn gen_lsystem(node_count: u64) -> BenchGraph {
    let mut graph = BenchGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(42);

    let branching = 3u64;
    add_labeled(&mut graph, 0, "Root");

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                add_labeled(&mut graph, child, "Concept");
                link(&mut graph, &mut rng, parent, child);
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice with a few rewired edges.
pub fn gen_small_world(node_count: u64) -> BenchGraph {
    let k = 5u64;
    let p = 0.05f64;
    let mut graph = BenchGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        add_labeled(&mut graph, i, "Concept");
    }

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                let target = if rewired != i { rewired } else { neighbor };
                link(&mut graph, &mut rng, i, target);
            } else {
                link(&mut graph, &mut rng, i, neighbor);
            }
        }
    }

    graph
}

/// Erdos-Renyi: uniform random edges, ~2 per vertex so several components
/// survive at the default size.
pub fn gen_random(node_count: u64) -> BenchGraph {
    let target_edges = node_count * 2;
    let mut graph = BenchGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(54321);

    for i in 0..node_count {
        add_labeled(&mut graph, i, "Concept");
    }

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            link(&mut graph, &mut rng, from, to);
        }
    }

    graph
}

/// Barbell: two dense clusters joined by a thin chain of bridge vertices.
pub fn gen_barbell(node_count: u64) -> BenchGraph {
    let bridge_len = 10u64.min(node_count / 4);
    let cluster_size = (node_count - bridge_len) / 2;
    let fan_out = 20u64.min(cluster_size.saturating_sub(1));
    let mut graph = BenchGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(99999);

    for i in 0..cluster_size {
        add_labeled(&mut graph, i, "ClusterA");
    }
    for i in 0..cluster_size {
        for _ in 0..fan_out {
            let target = rng.next(cluster_size);
            if target != i {
                link(&mut graph, &mut rng, i, target);
            }
        }
    }

    let bridge_start = cluster_size;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        add_labeled(&mut graph, id, "Bridge");
        graph.add_edge(id - 1, id, None, Some("BRIDGES"));
    }

    let b_start = bridge_start + bridge_len;
    for i in 0..cluster_size {
        add_labeled(&mut graph, b_start + i, "ClusterB");
    }
    graph.add_edge(b_start - 1, b_start, None, Some("BRIDGES"));

    for i in 0..cluster_size {
        for _ in 0..fan_out {
            let target = rng.next(cluster_size);
            if target != i {
                link(&mut graph, &mut rng, b_start + i, b_start + target);
            }
        }
    }

    graph
}

/// Diffusion-limited aggregation, simplified: each new vertex attaches to a
/// recent "surface" vertex, with occasional shortcuts back into the body.
pub fn gen_dla(node_count: u64) -> BenchGraph {
    let mut graph = BenchGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(77777);

    add_labeled(&mut graph, 0, "Seed");

    let surface_max = 10_000usize;
    let mut surface: VecDeque<u64> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_node in 1..node_count {
        add_labeled(&mut graph, new_node, "Concept");

        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        link(&mut graph, &mut rng, new_node, attach_to);

        // 10% chance of a second connection (creates loops / shortcuts)
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                link(&mut graph, &mut rng, new_node, other);
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    graph
}
