use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use num_traits::{Float, ToPrimitive, Zero};

use crate::data_structures::HashDictionary;
use crate::graph::traits::Edge;
use crate::{Error, Result};

/// An undirected weighted graph, possibly with self-loops, parallel edges and
/// several connected components
///
/// The graph owns copies of its vertices and edges and derives an adjacency
/// map from them at construction. It cannot be mutated afterwards.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, E> {
    /// Vertices in first-seen order, without duplicates
    pub(crate) vertices: Vec<V>,

    /// Edges in input order
    pub(crate) edges: Vec<E>,

    /// vertex -> indices into `edges` of every incident edge
    pub(crate) adjacency: HashDictionary<V, Vec<usize>>,
}

impl<V, E> WeightedGraph<V, E>
where
    V: Hash + Eq + Clone + Debug,
    E: Edge<Vertex = V> + Clone,
{
    /// Builds a graph from the given vertices and edges
    ///
    /// Repeated vertices are kept once. Fails with `InvalidWeight` if an edge
    /// has a negative or NaN weight and with `UnknownVertex` if an edge
    /// touches a vertex that is not in `vertices`.
    pub fn new<IV, IE>(vertices: IV, edges: IE) -> Result<Self>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = E>,
    {
        let mut adjacency = HashDictionary::new();
        let mut unique_vertices = Vec::new();
        for vertex in vertices {
            if !adjacency.contains_key(&vertex) {
                adjacency.put(vertex.clone(), Vec::new());
                unique_vertices.push(vertex);
            }
        }

        let edges: Vec<E> = edges.into_iter().collect();
        for (index, edge) in edges.iter().enumerate() {
            let weight = edge.weight();
            if weight.is_nan() || weight < E::Weight::zero() {
                return Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)));
            }

            for endpoint in [edge.vertex1(), edge.vertex2()] {
                if !adjacency.contains_key(endpoint) {
                    return Err(Error::UnknownVertex(format!("{:?}", endpoint)));
                }
            }

            adjacency.get_mut(edge.vertex1())?.push(index);
            if edge.vertex1() != edge.vertex2() {
                adjacency.get_mut(edge.vertex2())?.push(index);
            }
        }

        debug!(
            "Built graph with {} vertices and {} edges",
            unique_vertices.len(),
            edges.len()
        );

        Ok(WeightedGraph {
            vertices: unique_vertices,
            edges,
            adjacency,
        })
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertices in first-seen order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the edges in input order
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Returns true if the vertex exists in the graph
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns an iterator over the edges touching `vertex`
    ///
    /// A self-loop is reported once.
    pub fn incident_edges(&self, vertex: &V) -> Result<impl Iterator<Item = &E> + '_> {
        let indices = self
            .adjacency
            .get(vertex)
            .map_err(|_| Error::UnknownVertex(format!("{:?}", vertex)))?;
        Ok(indices.iter().map(move |&index| &self.edges[index]))
    }

    /// Returns the graph's own copy of `vertex`, borrowed for as long as the graph
    pub(crate) fn stored_vertex(&self, vertex: &V) -> Result<&V> {
        self.adjacency
            .get_key_value(vertex)
            .map(|(stored, _)| stored)
            .map_err(|_| Error::UnknownVertex(format!("{:?}", vertex)))
    }
}
