use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::data_structures::{ArrayHeap, ChainedHashSet, HashDictionary};
use crate::graph::{Edge, WeightedGraph};
use crate::{Error, Result};

/// Working record for one vertex during a single shortest path search
#[derive(Debug, Clone, Copy)]
struct PseudoVertex<W> {
    /// Best known distance from the start
    distance: W,

    /// Index of the edge through which `distance` was reached
    edge: Option<usize>,
}

impl<W: Float> PseudoVertex<W> {
    fn unreached() -> Self {
        PseudoVertex {
            distance: W::infinity(),
            edge: None,
        }
    }
}

/// Frontier entry; compares by distance only
#[derive(Debug)]
struct FrontierEntry<'a, V, W> {
    distance: OrderedFloat<W>,
    vertex: &'a V,
}

impl<'a, V, W: Float> FrontierEntry<'a, V, W> {
    fn new(distance: W, vertex: &'a V) -> Self {
        FrontierEntry {
            distance: OrderedFloat(distance),
            vertex,
        }
    }
}

impl<V, W: Float> PartialEq for FrontierEntry<'_, V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<V, W: Float> Eq for FrontierEntry<'_, V, W> {}

impl<V, W: Float> PartialOrd for FrontierEntry<'_, V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: Float> Ord for FrontierEntry<'_, V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

impl<V, E> WeightedGraph<V, E>
where
    V: Hash + Eq + Clone + Debug,
    E: Edge<Vertex = V> + Clone,
{
    /// Returns the edges of a shortest path from `start` to `end`
    ///
    /// The first edge leaves `start` and the last one reaches `end`. An empty
    /// path is returned when both are the same vertex.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if either vertex is not in the graph, `NoPathExists` if
    /// `end` cannot be reached from `start`.
    pub fn find_shortest_path_between(&self, start: &V, end: &V) -> Result<Vec<E>> {
        let start = self.stored_vertex(start)?;
        let end = self.stored_vertex(end)?;
        if start == end {
            return Ok(Vec::new());
        }

        let mut records: HashDictionary<&V, PseudoVertex<E::Weight>> =
            HashDictionary::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            records.put(vertex, PseudoVertex::unreached());
        }
        records.put(
            start,
            PseudoVertex {
                distance: E::Weight::zero(),
                edge: None,
            },
        );

        let mut finalized = ChainedHashSet::with_capacity(self.vertices.len());
        let mut frontier = ArrayHeap::new();
        frontier.insert(FrontierEntry::new(E::Weight::zero(), start));

        // No decrease-key: an improved distance pushes a fresh entry and the
        // stale ones are dropped here once their vertex is finalized.
        while !frontier.is_empty() {
            let entry = frontier.remove_min()?;
            let current = entry.vertex;
            if !finalized.add(current) {
                continue;
            }
            if current == end {
                break;
            }

            let distance = entry.distance.into_inner();
            for &index in self.adjacency.get(current)? {
                let edge = &self.edges[index];
                let Some(neighbor) = edge.other_vertex(current) else {
                    continue;
                };
                if finalized.contains(&neighbor) {
                    continue;
                }

                let candidate = distance + edge.weight();
                let record = records.get_mut(&neighbor)?;
                if candidate < record.distance {
                    record.distance = candidate;
                    record.edge = Some(index);
                    frontier.insert(FrontierEntry::new(candidate, neighbor));
                }
            }
        }

        trace!("Finalized {} vertices", finalized.len());

        let path = self.reconstruct_path(&records, start, end)?;
        debug!("Shortest path from {:?} to {:?} has {} edges", start, end, path.len());
        Ok(path)
    }

    /// Walks predecessor edges back from `end` and returns them in start-to-end order
    fn reconstruct_path<'a>(
        &'a self,
        records: &HashDictionary<&'a V, PseudoVertex<E::Weight>>,
        start: &'a V,
        end: &'a V,
    ) -> Result<Vec<E>> {
        let mut path = Vec::new();
        let mut visited = ChainedHashSet::new();
        let mut current = end;

        while current != start {
            if !visited.add(current) {
                return Err(Error::NoPathExists);
            }

            let index = records.get(&current)?.edge.ok_or(Error::NoPathExists)?;
            let edge = &self.edges[index];
            path.push(edge.clone());
            current = edge.other_vertex(current).ok_or(Error::NoPathExists)?;
        }

        path.reverse();
        Ok(path)
    }
}
