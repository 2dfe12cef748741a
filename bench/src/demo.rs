use graph_bfs_core::{bfs, connected_components, reconstruct_path, Graph, UndirectedGraph, Vertex};
use serde_json::json;

use crate::config::OutputFormat;

/// BFS from A over {A-B, A-C, B-D, C-E}: discovery order, distances and the
/// A -> E path.
pub fn run_bfs_demo(format: OutputFormat) -> anyhow::Result<()> {
    let mut g: UndirectedGraph<&str> = UndirectedGraph::new();
    g.load_edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "E")]);

    let result = bfs(&g, &"A");
    let path = reconstruct_path(&result.predecessor, &"A", &"E");

    match format {
        OutputFormat::Table => {
            println!("Graph:");
            println!("{}", g);
            println!();
            println!("BFS from A:");
            println!("{}", result.order.join(" -> "));
            println!();
            println!("{:>8} {:>10} {:>12}", "vertex", "distance", "predecessor");
            for (v, d) in &result.distance {
                let dist = d.map_or_else(|| "inf".to_string(), |d| d.to_string());
                let pred = result.predecessor[v].unwrap_or("-");
                println!("{:>8} {:>10} {:>12}", v, dist, pred);
            }
            println!();
            println!("Path A -> E: [{}]", path.join(", "));
        }
        OutputFormat::Json => {
            let distances: serde_json::Map<String, serde_json::Value> = result
                .distance
                .iter()
                .map(|(v, d)| (v.to_string(), json!(d)))
                .collect();
            let out = json!({
                "graph": g.to_string(),
                "order": result.order,
                "distance": distances,
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

/// Component count over {A..F} with edges {A-B, B-C, D-E}.
pub fn run_components_demo(format: OutputFormat) -> anyhow::Result<()> {
    let mut g: UndirectedGraph<&str> = UndirectedGraph::new();
    for id in ["A", "B", "C", "D", "E", "F"] {
        g.add_vertex(Vertex::new(id));
    }
    g.add_edge("A", "B", None, None);
    g.add_edge("B", "C", None, None);
    g.add_edge("D", "E", None, None);

    let count = connected_components(&g);

    match format {
        OutputFormat::Table => {
            println!("{}", g);
            println!("Number of connected components: {}", count);
        }
        OutputFormat::Json => {
            let out = json!({
                "graph": g.to_string(),
                "order": g.order(),
                "size": g.size(),
                "components": count,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
