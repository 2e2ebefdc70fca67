pub mod dijkstra;
pub mod kruskal;
pub mod searcher;

pub use searcher::top_k_sort;
