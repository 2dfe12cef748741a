use graph_bfs_core::{bfs, components, reconstruct_path, DirectedGraph, Graph, UndirectedGraph};
use proptest::prelude::*;

const N: u64 = 8;

/// All-pairs edge-count distances by Floyd-Warshall over `get_edge`.
fn all_pairs<G: Graph<Key = u64>>(g: &G) -> Vec<Vec<Option<u32>>> {
    let n = N as usize;
    let mut dist = vec![vec![None; n]; n];
    for u in 0..N {
        dist[u as usize][u as usize] = Some(0);
        for v in 0..N {
            if u != v && g.get_edge(&u, &v).is_some() {
                dist[u as usize][v as usize] = Some(1);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

prop_compose! {
    fn random_edges()
        (edges in prop::collection::vec((0..N, 0..N), 0..=24))
        -> Vec<(u64, u64)>
    {
        edges
    }
}

#[derive(Debug, Clone)]
enum Mutation {
    AddVertex(u64),
    AddEdge(u64, u64),
    RemoveEdge(u64, u64),
    RemoveVertex(u64),
}

fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        (0..N).prop_map(Mutation::AddVertex),
        (0..N, 0..N).prop_map(|(u, v)| Mutation::AddEdge(u, v)),
        (0..N, 0..N).prop_map(|(u, v)| Mutation::RemoveEdge(u, v)),
        (0..N).prop_map(Mutation::RemoveVertex),
    ]
}

fn undirected(edges: &[(u64, u64)]) -> UndirectedGraph<u64> {
    let mut g = UndirectedGraph::new();
    for v in 0..N {
        g.add_vertex(v);
    }
    g.load_edges(edges.iter().copied());
    g
}

fn directed(edges: &[(u64, u64)]) -> DirectedGraph<u64> {
    let mut g = DirectedGraph::new();
    for v in 0..N {
        g.add_vertex(v);
    }
    g.load_edges(edges.iter().copied());
    g
}

fn check_against_reference<G: Graph<Key = u64>>(g: &G, source: u64) -> Result<(), TestCaseError> {
    let reference = all_pairs(g);
    let r = bfs(g, &source);

    for v in 0..N {
        let expected = reference[source as usize][v as usize];
        prop_assert_eq!(r.distance_to(&v), expected, "distance {} -> {}", source, v);

        let path = reconstruct_path(&r.predecessor, &source, &v);
        match expected {
            Some(d) => {
                prop_assert_eq!(path.len(), d as usize + 1);
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&v));
                for hop in path.windows(2) {
                    prop_assert!(g.get_edge(&hop[0], &hop[1]).is_some());
                }
            }
            None => {
                prop_assert!(path.is_empty());
                prop_assert_eq!(r.predecessor.get(&v), Some(&None));
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_undirected_bfs_matches_all_pairs(edges in random_edges(), source in 0..N) {
        let g = undirected(&edges);
        check_against_reference(&g, source)?;
    }

    #[test]
    fn prop_directed_bfs_matches_all_pairs(edges in random_edges(), source in 0..N) {
        let g = directed(&edges);
        check_against_reference(&g, source)?;
    }

    #[test]
    fn prop_undirected_edges_listed_once(edges in random_edges()) {
        let g = undirected(&edges);
        let mut pairs: Vec<(u64, u64)> = edges
            .iter()
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();
        pairs.sort_unstable();
        pairs.dedup();

        let mut listed: Vec<(u64, u64)> = g.edges().map(|e| (*e.source(), *e.target())).collect();
        listed.sort_unstable();
        prop_assert_eq!(listed, pairs);
    }

    #[test]
    fn prop_undirected_symmetry(edges in random_edges()) {
        let g = undirected(&edges);
        for &(u, v) in &edges {
            let forward = g.get_edge(&u, &v);
            let backward = g.get_edge(&v, &u);
            prop_assert!(forward.is_some() && backward.is_some());
            prop_assert!(g.adjacent(&u).contains(&v));
            prop_assert_eq!(g.adjacent(&u).keys().filter(|n| **n == v).count(), 1);
        }
        for v in 0..N {
            prop_assert_eq!(g.in_degree(&v), g.degree(&v));
            prop_assert_eq!(g.out_degree(&v), g.degree(&v));
        }
    }

    #[test]
    fn prop_components_match_reachability(edges in random_edges()) {
        let g = undirected(&edges);
        let reference = all_pairs(&g);
        for part in components(&g) {
            for u in &part {
                for v in &part {
                    prop_assert!(reference[*u as usize][*v as usize].is_some());
                }
            }
        }
        let total: usize = components(&g).iter().map(|p| p.len()).sum();
        prop_assert_eq!(total, N as usize);
    }

    #[test]
    fn prop_directed_degree_sums(edges in random_edges()) {
        let g = directed(&edges);
        let ins: usize = (0..N).map(|v| g.in_degree(&v)).sum();
        let outs: usize = (0..N).map(|v| g.out_degree(&v)).sum();
        prop_assert_eq!(ins, g.size());
        prop_assert_eq!(outs, g.size());
    }

    #[test]
    fn prop_undirected_store_consistent_under_mutation(
        ops in prop::collection::vec(mutation(), 0..=40),
    ) {
        let mut g: UndirectedGraph<u64> = UndirectedGraph::new();
        for op in ops {
            match op {
                Mutation::AddVertex(v) => g.add_vertex(v),
                Mutation::AddEdge(u, v) => {
                    g.add_edge(u, v, None, None);
                }
                Mutation::RemoveEdge(u, v) => {
                    if let Some(e) = g.get_edge(&u, &v).cloned() {
                        g.remove_edge(&e);
                    }
                }
                Mutation::RemoveVertex(v) => g.remove_vertex(&v),
            }
            for u in g.vertex_ids() {
                for v in g.adjacent(u).keys() {
                    prop_assert!(g.contains_vertex(v));
                    prop_assert!(g.adjacent(v).contains(u));
                }
            }
            let reached = bfs(&g, &0).order;
            prop_assert!(reached.iter().skip(1).all(|v| g.contains_vertex(v)));
        }
    }
}
