pub mod edge;
pub mod generators;
pub mod traits;
pub mod weighted;

pub use edge::WeightedEdge;
pub use traits::{total_weight, Edge};
pub use weighted::WeightedGraph;
