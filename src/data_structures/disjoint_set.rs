use std::hash::Hash;

use crate::data_structures::HashDictionary;
use crate::{Error, Result};

/// One arena slot of a [`DisjointSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Representative of its set
    Root { rank: u32 },
    /// Non-root member pointing towards its representative
    Child { parent: usize },
}

/// Union-find over arbitrary hashable items
///
/// Each tracked item owns one slot in a flat arena. Unions are by rank and
/// [`find_set`](Self::find_set) compresses the whole visited path, so any
/// sequence of operations runs in near-constant amortized time per call.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    /// Item -> slot index
    indices: HashDictionary<T, usize>,

    slots: Vec<Slot>,

    /// Number of disjoint sets currently tracked
    set_count: usize,
}

impl<T> DisjointSet<T>
where
    T: Hash + Eq,
{
    /// Creates a new empty disjoint set
    pub fn new() -> Self {
        DisjointSet {
            indices: HashDictionary::new(),
            slots: Vec::new(),
            set_count: 0,
        }
    }

    /// Creates a new empty disjoint set with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        DisjointSet {
            indices: HashDictionary::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            set_count: 0,
        }
    }

    /// Returns the number of tracked items
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no item is tracked
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns true if `item` is tracked
    pub fn contains(&self, item: &T) -> bool {
        self.indices.contains_key(item)
    }

    /// Starts tracking `item` as a singleton set
    pub fn make_set(&mut self, item: T) -> Result<()> {
        if self.indices.contains_key(&item) {
            return Err(Error::DuplicateItem);
        }

        self.indices.put(item, self.slots.len());
        self.slots.push(Slot::Root { rank: 0 });
        self.set_count += 1;
        Ok(())
    }

    /// Returns the representative id of the set containing `item`
    ///
    /// The id stays the same until a union touches that set.
    pub fn find_set(&mut self, item: &T) -> Result<usize> {
        let index = self.slot_of(item)?;
        Ok(self.find_root(index))
    }

    /// Merges the sets containing `first` and `second`
    ///
    /// Fails if either item is untracked or both already share a set.
    pub fn union(&mut self, first: &T, second: &T) -> Result<()> {
        let first_index = self.slot_of(first)?;
        let second_index = self.slot_of(second)?;

        let first_root = self.find_root(first_index);
        let second_root = self.find_root(second_index);
        if first_root == second_root {
            return Err(Error::AlreadyUnited);
        }

        let first_rank = self.rank_of(first_root);
        let second_rank = self.rank_of(second_root);

        if first_rank < second_rank {
            self.slots[first_root] = Slot::Child { parent: second_root };
        } else {
            self.slots[second_root] = Slot::Child { parent: first_root };
            if first_rank == second_rank {
                self.slots[first_root] = Slot::Root {
                    rank: first_rank + 1,
                };
            }
        }

        self.set_count -= 1;
        Ok(())
    }

    fn slot_of(&self, item: &T) -> Result<usize> {
        self.indices
            .get(item)
            .copied()
            .map_err(|_| Error::UntrackedItem)
    }
}

impl<T> DisjointSet<T> {
    fn rank_of(&self, root: usize) -> u32 {
        match self.slots[root] {
            Slot::Root { rank } => rank,
            Slot::Child { .. } => 0,
        }
    }

    fn find_root(&mut self, index: usize) -> usize {
        let mut root = index;
        while let Slot::Child { parent } = self.slots[root] {
            root = parent;
        }

        // Second pass: point every visited slot straight at the root
        let mut current = index;
        while let Slot::Child { parent } = self.slots[current] {
            self.slots[current] = Slot::Child { parent: root };
            current = parent;
        }
        root
    }
}

impl<T: Hash + Eq> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
