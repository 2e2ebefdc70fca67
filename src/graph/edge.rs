use std::fmt::Debug;
use num_traits::Float;

use crate::graph::traits::Edge;

/// A plain undirected edge carrying its two endpoints and a weight
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge<V, W = f64> {
    pub vertex1: V,
    pub vertex2: V,
    pub weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    /// Creates a new edge between `vertex1` and `vertex2`
    pub fn new(vertex1: V, vertex2: V, weight: W) -> Self {
        WeightedEdge {
            vertex1,
            vertex2,
            weight,
        }
    }
}

impl<V, W> Edge for WeightedEdge<V, W>
where
    V: PartialEq + Debug,
    W: Float + Debug,
{
    type Vertex = V;
    type Weight = W;

    fn vertex1(&self) -> &V {
        &self.vertex1
    }

    fn vertex2(&self) -> &V {
        &self.vertex2
    }

    fn weight(&self) -> W {
        self.weight
    }
}
