mod config;
mod demo;
mod generate;

use std::time::Instant;

use graph_bfs_core::{bfs, connected_components, Graph};
use serde_json::json;
use tracing::info;

use config::{BenchConfig, Mode, OutputFormat, NODE_COUNT};
use generate::BenchGraph;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = BenchConfig::load(&args)?;

    if let Some(level) = config.log_level.as_tracing() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    }

    let generators: Vec<(&str, fn(u64) -> BenchGraph)> = match config.mode {
        Mode::Help => {
            print_help();
            return Ok(());
        }
        Mode::BfsDemo => return demo::run_bfs_demo(config.format),
        Mode::ComponentsDemo => return demo::run_components_demo(config.format),
        Mode::Chain => vec![("Chain", generate::gen_chain)],
        Mode::LSystem => vec![("L-system tree", generate::gen_lsystem)],
        Mode::SmallWorld => vec![("Small-world (Watts-Strogatz)", generate::gen_small_world)],
        Mode::Random => vec![("Erdos-Renyi random", generate::gen_random)],
        Mode::Barbell => vec![("Barbell (cluster-bridge-cluster)", generate::gen_barbell)],
        Mode::Dla => vec![("DLA (organic branching)", generate::gen_dla)],
        Mode::All => vec![
            ("Chain", generate::gen_chain as fn(u64) -> BenchGraph),
            ("L-system tree", generate::gen_lsystem),
            ("Small-world (Watts-Strogatz)", generate::gen_small_world),
            ("Erdos-Renyi random", generate::gen_random),
            ("Barbell (cluster-bridge-cluster)", generate::gen_barbell),
            ("DLA (organic branching)", generate::gen_dla),
        ],
    };

    if config.format == OutputFormat::Table {
        println!("graph-bfs-bench");
        println!("===============");
        println!();
    }

    for (name, generator) in generators {
        run_benchmark(name, generator, config.node_count, config.format)?;
    }
    Ok(())
}

fn print_help() {
    println!("Usage: graph-bfs-bench [mode] [node_count]");
    println!();
    println!("Modes:");
    println!("  all              Run all generators and benchmark each (default)");
    println!("  chain            Single path (deepest BFS tree)");
    println!("  lsystem          Fractal branching tree (deep paths)");
    println!("  smallworld       Watts-Strogatz ring lattice + shortcuts");
    println!("  random           Erdos-Renyi uniform random edges (several components)");
    println!("  barbell          Two dense clusters connected by a thin bridge");
    println!("  dla              Diffusion-limited aggregation (organic branching)");
    println!("  bfs-demo         BFS on the textbook five-vertex graph");
    println!("  components-demo  Connected components on the textbook six-vertex graph");
    println!();
    println!("Environment:");
    println!(
        "  {:<18} {} (default {}, {}..={})",
        NODE_COUNT.name, NODE_COUNT.description, NODE_COUNT.default, NODE_COUNT.min, NODE_COUNT.max
    );
    println!("  {:<18} quiet | info | debug | trace (default info)", config::LOG_LEVEL_VAR);
    println!("  {:<18} table | json (default table)", config::FORMAT_VAR);
}

fn run_benchmark(
    name: &str,
    generator: fn(u64) -> BenchGraph,
    node_count: u64,
    format: OutputFormat,
) -> anyhow::Result<()> {
    info!(generator = name, node_count, "generating graph");

    let t = Instant::now();
    let graph = generator(node_count);
    let gen_time = t.elapsed();

    let t = Instant::now();
    let result = bfs(&graph, &0);
    let bfs_time = t.elapsed();
    let depth = result.layers().len().saturating_sub(1);

    let t = Instant::now();
    let components = connected_components(&graph);
    let cc_time = t.elapsed();

    let far_node = graph.vertex_ids().last().copied().unwrap_or(0);
    let t = Instant::now();
    let path = result.path_to(&far_node);
    let path_time = t.elapsed();

    match format {
        OutputFormat::Table => {
            println!("--- {} ---", name);
            println!(
                "Generated in {:.2}s: {} vertices, {} edges",
                gen_time.as_secs_f64(),
                graph.order(),
                graph.size()
            );
            println!("Degree of vertex 0: {}", graph.degree(&0));
            println!();
            println!("{:>16} {:>12} {:>10}", "operation", "result", "time");
            println!("{:->16} {:->12} {:->10}", "", "", "");
            println!(
                "{:>16} {:>12} {:>8.1}ms",
                "bfs reached",
                result.reached(),
                bfs_time.as_secs_f64() * 1000.0
            );
            println!("{:>16} {:>12}", "bfs depth", depth);
            println!(
                "{:>16} {:>12} {:>8.1}ms",
                "components",
                components,
                cc_time.as_secs_f64() * 1000.0
            );
            let hops = if path.is_empty() {
                "no path".to_string()
            } else {
                format!("{} hops", path.len() - 1)
            };
            println!(
                "{:>16} {:>12} {:>8.3}ms",
                format!("path 0 -> {}", far_node),
                hops,
                path_time.as_secs_f64() * 1000.0
            );
            println!();
        }
        OutputFormat::Json => {
            let out = json!({
                "generator": name,
                "vertices": graph.order(),
                "edges": graph.size(),
                "generate_ms": gen_time.as_secs_f64() * 1000.0,
                "bfs": {
                    "reached": result.reached(),
                    "depth": depth,
                    "ms": bfs_time.as_secs_f64() * 1000.0,
                },
                "components": {
                    "count": components,
                    "ms": cc_time.as_secs_f64() * 1000.0,
                },
                "path": {
                    "target": far_node,
                    "hops": path.len().checked_sub(1),
                    "ms": path_time.as_secs_f64() * 1000.0,
                },
            });
            println!("{}", serde_json::to_string(&out)?);
        }
    }
    Ok(())
}
