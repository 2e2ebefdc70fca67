use graphkit::graph::generators::{generate_grid_maze, generate_random_connected, GeneratedGraph};
use graphkit::graph::total_weight;
use graphkit::{DisjointSet, Edge, WeightedEdge, WeightedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPSILON: f64 = 1e-9;

// Prim's algorithm on a dense visited array, used as a reference weight
fn prim_weight(graph: &GeneratedGraph) -> f64 {
    let n = graph.vertex_count();
    if n == 0 {
        return 0.0;
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    best[0] = 0.0;
    let mut total = 0.0;

    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| !in_tree[v])
            .min_by(|&a, &b| best[a].partial_cmp(&best[b]).unwrap())
            .unwrap();
        in_tree[next] = true;
        total += best[next];

        for edge in graph.incident_edges(&next).unwrap() {
            let other = *edge.other_vertex(&next).unwrap();
            if !in_tree[other] && edge.weight < best[other] {
                best[other] = edge.weight;
            }
        }
    }
    total
}

// Replays the tree through a fresh disjoint set; any rejected union is a cycle
fn assert_acyclic<V: std::hash::Hash + Eq + Clone + std::fmt::Debug>(
    vertices: &[V],
    tree: &[WeightedEdge<V>],
) {
    let mut sets = DisjointSet::new();
    for vertex in vertices {
        sets.make_set(vertex.clone()).unwrap();
    }
    for edge in tree {
        sets.union(&edge.vertex1, &edge.vertex2)
            .unwrap_or_else(|_| panic!("edge {:?} closes a cycle", edge));
    }
}

#[test]
fn test_small_square_with_diagonal() {
    let graph = WeightedGraph::new(
        ["A", "B", "C", "D"],
        [
            WeightedEdge::new("A", "B", 1.0),
            WeightedEdge::new("B", "C", 2.0),
            WeightedEdge::new("C", "D", 1.0),
            WeightedEdge::new("A", "D", 4.0),
            WeightedEdge::new("A", "C", 3.0),
        ],
    )
    .unwrap();

    let tree = graph.find_minimum_spanning_tree().unwrap();

    let weight: f64 = total_weight(&tree);
    assert_eq!(tree.len(), 3);
    assert!((weight - 4.0).abs() < EPSILON);
    assert!(tree.contains(&WeightedEdge::new("A", "B", 1.0)));
    assert!(tree.contains(&WeightedEdge::new("B", "C", 2.0)));
    assert!(tree.contains(&WeightedEdge::new("C", "D", 1.0)));
}

#[test]
fn test_chain_with_heavy_shortcut() {
    let graph = WeightedGraph::new(
        ["A", "B", "C", "D"],
        [
            WeightedEdge::new("A", "B", 1.0),
            WeightedEdge::new("B", "C", 2.0),
            WeightedEdge::new("A", "C", 5.0),
            WeightedEdge::new("C", "D", 1.0),
        ],
    )
    .unwrap();

    let tree = graph.find_minimum_spanning_tree().unwrap();

    assert_eq!(tree.len(), 3);
    assert_eq!(total_weight(&tree), 4.0);
    assert!(!tree.contains(&WeightedEdge::new("A", "C", 5.0)));
}

#[test]
fn test_empty_and_single_vertex_graphs() {
    let empty: WeightedGraph<u32, WeightedEdge<u32>> = WeightedGraph::new([], []).unwrap();
    assert!(empty.find_minimum_spanning_tree().unwrap().is_empty());

    let single = WeightedGraph::new([7u32], [WeightedEdge::new(7, 7, 3.0)]).unwrap();
    assert!(single.find_minimum_spanning_tree().unwrap().is_empty());
}

#[test]
fn test_self_loops_and_parallel_edges() {
    let graph = WeightedGraph::new(
        [1, 2, 3],
        [
            WeightedEdge::new(1, 1, 0.0),
            WeightedEdge::new(1, 2, 5.0),
            WeightedEdge::new(2, 1, 2.0),
            WeightedEdge::new(2, 3, 1.0),
            WeightedEdge::new(3, 3, 0.5),
            WeightedEdge::new(3, 2, 1.0),
        ],
    )
    .unwrap();

    let tree = graph.find_minimum_spanning_tree().unwrap();

    assert_eq!(tree.len(), 2);
    assert!(tree.iter().all(|edge| edge.vertex1 != edge.vertex2));
    let weight: f64 = total_weight(&tree);
    assert!((weight - 3.0).abs() < EPSILON);
    // Equal weights keep the edge listed first
    assert!(tree.contains(&WeightedEdge::new(2, 3, 1.0)));
    assert!(!tree.contains(&WeightedEdge::new(3, 2, 1.0)));
}

#[test]
fn test_disconnected_graph_yields_forest() {
    let graph = WeightedGraph::new(
        ['a', 'b', 'c', 'x', 'y', 'z'],
        [
            WeightedEdge::new('a', 'b', 1.0),
            WeightedEdge::new('b', 'c', 1.0),
            WeightedEdge::new('a', 'c', 0.5),
            WeightedEdge::new('x', 'y', 2.0),
        ],
    )
    .unwrap();

    let forest = graph.find_minimum_spanning_tree().unwrap();

    // Six vertices in three components
    assert_eq!(forest.len(), 3);
    let weight: f64 = total_weight(&forest);
    assert!((weight - 3.5).abs() < EPSILON);
    assert_acyclic(graph.vertices(), &forest);
}

#[test]
fn test_grid_maze_tree_spans_every_room() {
    let mut rng = StdRng::seed_from_u64(42);
    let (width, height) = (12, 9);
    let graph = generate_grid_maze(width, height, &mut rng).unwrap();

    let tree = graph.find_minimum_spanning_tree().unwrap();

    assert_eq!(tree.len(), width * height - 1);
    assert_acyclic(graph.vertices(), &tree);
    assert!((total_weight(&tree) - prim_weight(&graph)).abs() < EPSILON);
}

#[test]
fn test_random_graphs_match_prim() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..25 {
        let n = rng.gen_range(1..60);
        let extra = rng.gen_range(0..3 * n);
        let graph = generate_random_connected(n, extra, &mut rng).unwrap();

        let tree = graph.find_minimum_spanning_tree().unwrap();

        assert_eq!(tree.len(), n - 1);
        assert_acyclic(graph.vertices(), &tree);
        let expected = prim_weight(&graph);
        assert!(
            (total_weight(&tree) - expected).abs() < 1e-6,
            "kruskal {} vs prim {}",
            total_weight(&tree),
            expected
        );
    }
}

#[test]
fn test_tree_edges_come_from_the_graph() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = generate_random_connected(30, 40, &mut rng).unwrap();

    let tree = graph.find_minimum_spanning_tree().unwrap();
    assert!(tree.iter().all(|edge| graph.edges().contains(edge)));
}
