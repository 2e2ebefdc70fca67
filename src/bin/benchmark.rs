use std::env;
use std::time::{Duration, Instant};

use graphkit::graph::generators::{generate_grid_maze, GeneratedGraph};
use graphkit::graph::total_weight;
use graphkit::top_k_sort;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Benchmark settings, overridable by positional arguments:
/// `benchmark [max_side] [queries] [k] [seed]`
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    /// Largest grid side length; sides double from 16 up to this value
    max_side: usize,
    /// Shortest path queries per grid
    queries: usize,
    /// Number of lightest walls selected with top-K
    k: usize,
    /// RNG seed for wall weights and query endpoints
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            max_side: 256,
            queries: 20,
            k: 100,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        let defaults = Self::default();
        let parse = |index: usize, default: u64| -> u64 {
            args.get(index)
                .and_then(|value| value.parse().ok())
                .unwrap_or(default)
        };

        BenchmarkConfig {
            max_side: parse(0, defaults.max_side as u64) as usize,
            queries: parse(1, defaults.queries as u64) as usize,
            k: parse(2, defaults.k as u64) as usize,
            seed: parse(3, defaults.seed),
        }
    }
}

// Function to time a closure
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn run(config: &BenchmarkConfig) -> graphkit::Result<()> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::new();

    let mut side = 16;
    while side <= config.max_side {
        println!("\nGenerating {}x{} grid maze...", side, side);
        let graph: GeneratedGraph = generate_grid_maze(side, side, &mut rng)?;
        info!(
            "Grid has {} rooms and {} walls",
            graph.vertex_count(),
            graph.edge_count()
        );

        let (tree, mst_time) = timed(|| graph.find_minimum_spanning_tree());
        let tree = tree?;
        println!(
            "  - Spanning tree: {} edges, weight {:.3}, in {:?}",
            tree.len(),
            total_weight(&tree),
            mst_time
        );

        let vertex_count = graph.vertex_count();
        let (paths, path_time) = timed(|| {
            (0..config.queries)
                .map(|_| {
                    let start = rng.gen_range(0..vertex_count);
                    let end = rng.gen_range(0..vertex_count);
                    graph.find_shortest_path_between(&start, &end)
                })
                .collect::<graphkit::Result<Vec<_>>>()
        });
        let paths = paths?;
        let longest = paths.iter().map(Vec::len).max().unwrap_or(0);
        println!(
            "  - {} shortest paths (longest {} edges) in {:?}",
            paths.len(),
            longest,
            path_time
        );

        let weights: Vec<_> = graph
            .edges()
            .iter()
            .map(|wall| ordered_float::OrderedFloat(wall.weight))
            .collect();
        let (top, top_time) = timed(|| top_k_sort(config.k, &weights));
        println!("  - Top {} wall weights in {:?}", top.len(), top_time);

        results.push((side, mst_time, path_time, top_time));
        side *= 2;
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15}",
        "Side", "MST (ms)", "Paths (ms)", "Top-K (ms)"
    );
    println!("-----------------------------------------------------");
    for (side, mst_time, path_time, top_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15}",
            side,
            mst_time.as_millis(),
            path_time.as_millis(),
            top_time.as_millis()
        );
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let config = BenchmarkConfig::from_args();
    println!("=====================================================");
    println!("Benchmark: Kruskal, Dijkstra and top-K on grid mazes");
    println!("Configuration: {:?}", config);
    println!("=====================================================");

    if let Err(err) = run(&config) {
        eprintln!("Benchmark failed: {}", err);
        std::process::exit(1);
    }
}
