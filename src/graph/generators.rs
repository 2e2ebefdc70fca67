use crate::graph::{WeightedEdge, WeightedGraph};
use crate::Result;
use rand::Rng;

/// Graph of integer vertices with `f64` weights, as produced by the generators
pub type GeneratedGraph = WeightedGraph<usize, WeightedEdge<usize, f64>>;

/// Generates a `width` x `height` grid of rooms separated by walls
///
/// Every room is a vertex numbered `y * width + x`; every wall between two
/// horizontally or vertically adjacent rooms is an edge with a random weight in
/// `[0, 1)`. Carving a maze amounts to removing the walls of a minimum spanning
/// tree of this graph.
pub fn generate_grid_maze<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<GeneratedGraph> {
    let rooms = 0..width * height;
    let mut walls = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let room = y * width + x;

            if x + 1 < width {
                walls.push(WeightedEdge::new(room, room + 1, rng.gen_range(0.0..1.0)));
            }
            if y + 1 < height {
                walls.push(WeightedEdge::new(room, room + width, rng.gen_range(0.0..1.0)));
            }
        }
    }

    WeightedGraph::new(rooms, walls)
}

/// Generates a connected graph with `n` vertices
///
/// A random spanning tree is laid down first so the graph is always connected,
/// then `extra_edges` further random edges (self-loops and parallel edges
/// included) are added. Weights are drawn from `[1, 100)`.
pub fn generate_random_connected<R: Rng + ?Sized>(
    n: usize,
    extra_edges: usize,
    rng: &mut R,
) -> Result<GeneratedGraph> {
    let mut edges = Vec::with_capacity(n.saturating_sub(1) + extra_edges);

    for v in 1..n {
        let parent = rng.gen_range(0..v);
        edges.push(WeightedEdge::new(parent, v, rng.gen_range(1.0..100.0)));
    }

    if n > 0 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            edges.push(WeightedEdge::new(u, v, rng.gen_range(1.0..100.0)));
        }
    }

    WeightedGraph::new(0..n, edges)
}
