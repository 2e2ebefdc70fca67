use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing an undirected weighted edge between two vertices
///
/// Graphs only need read access to the endpoints and the weight; ordering by
/// weight is derived from [`Edge::weight`] by the algorithms themselves.
pub trait Edge: Debug {
    /// Vertex type of both endpoints
    type Vertex: PartialEq;

    /// Weight type; must be a float so that distances can start at infinity
    type Weight: Float + Debug;

    /// Returns the first endpoint
    fn vertex1(&self) -> &Self::Vertex;

    /// Returns the second endpoint
    fn vertex2(&self) -> &Self::Vertex;

    /// Returns the weight of the edge
    fn weight(&self) -> Self::Weight;

    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex` is not
    /// an endpoint of this edge
    fn other_vertex(&self, vertex: &Self::Vertex) -> Option<&Self::Vertex> {
        if self.vertex1() == vertex {
            Some(self.vertex2())
        } else if self.vertex2() == vertex {
            Some(self.vertex1())
        } else {
            None
        }
    }

    /// Returns true if `vertex` is one of the endpoints
    fn is_incident_to(&self, vertex: &Self::Vertex) -> bool {
        self.vertex1() == vertex || self.vertex2() == vertex
    }
}

/// Sums the weights of a sequence of edges
pub fn total_weight<'a, E, I>(edges: I) -> E::Weight
where
    E: Edge + 'a,
    I: IntoIterator<Item = &'a E>,
{
    edges
        .into_iter()
        .fold(E::Weight::zero(), |total, edge| total + edge.weight())
}
