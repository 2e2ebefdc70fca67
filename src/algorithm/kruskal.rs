use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::data_structures::{ArrayHeap, DisjointSet};
use crate::graph::{Edge, WeightedGraph};
use crate::Result;

/// Heap entry for one graph edge, ordered by weight and then by input position
#[derive(Debug, Clone, Copy)]
struct EdgeEntry<W> {
    weight: OrderedFloat<W>,
    index: usize,
}

impl<W: Float> PartialEq for EdgeEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Float> Eq for EdgeEntry<W> {}

impl<W: Float> PartialOrd for EdgeEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Float> Ord for EdgeEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl<V, E> WeightedGraph<V, E>
where
    V: Hash + Eq + Clone + Debug,
    E: Edge<Vertex = V> + Clone,
{
    /// Returns the edges of a minimum spanning tree of this graph
    ///
    /// Kruskal's algorithm: edges leave a min-heap lightest first and are kept
    /// whenever their endpoints lie in different components, until
    /// `vertex_count() - 1` edges are kept. Among equal-weight edges the
    /// earlier one in input order is tried first.
    ///
    /// The graph is expected to be connected. On a disconnected graph the
    /// heap runs dry early and a minimum spanning forest is returned instead.
    pub fn find_minimum_spanning_tree(&self) -> Result<Vec<E>> {
        let target = self.vertices.len().saturating_sub(1);

        let mut frontier: ArrayHeap<EdgeEntry<E::Weight>> = self
            .edges
            .iter()
            .enumerate()
            .map(|(index, edge)| EdgeEntry {
                weight: OrderedFloat(edge.weight()),
                index,
            })
            .collect();

        let mut components = DisjointSet::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            components.make_set(vertex)?;
        }

        let mut tree = Vec::with_capacity(target);
        while tree.len() < target && !frontier.is_empty() {
            let entry = frontier.remove_min()?;
            let edge = &self.edges[entry.index];
            let (first, second) = (edge.vertex1(), edge.vertex2());

            if components.find_set(&first)? != components.find_set(&second)? {
                components.union(&first, &second)?;
                trace!("Kept edge {:?} with weight {:?}", entry.index, edge.weight());
                tree.push(edge.clone());
            }
        }

        debug!(
            "Spanning tree keeps {} of {} edges ({} components left)",
            tree.len(),
            self.edges.len(),
            components.set_count()
        );

        Ok(tree)
    }
}
