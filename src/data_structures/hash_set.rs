use std::hash::Hash;

use crate::data_structures::HashDictionary;
use crate::Result;

/// A set of items backed by a [`HashDictionary`] with unit values
#[derive(Debug, Clone)]
pub struct ChainedHashSet<T> {
    map: HashDictionary<T, ()>,
}

impl<T> ChainedHashSet<T>
where
    T: Hash + Eq,
{
    /// Creates a new empty set
    pub fn new() -> Self {
        ChainedHashSet {
            map: HashDictionary::new(),
        }
    }

    /// Creates a new empty set with a capacity hint
    pub fn with_capacity(capacity: usize) -> Self {
        ChainedHashSet {
            map: HashDictionary::with_capacity(capacity),
        }
    }

    /// Adds `item`, returning true if it was not already present
    pub fn add(&mut self, item: T) -> bool {
        self.map.put(item, ()).is_none()
    }

    /// Removes `item`; fails with `KeyNotFound` if it is absent
    pub fn remove(&mut self, item: &T) -> Result<()> {
        self.map.remove(item)
    }

    /// Returns true if `item` is present
    pub fn contains(&self, item: &T) -> bool {
        self.map.contains_key(item)
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the set is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over the items in dictionary order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.map.keys()
    }
}

impl<T: Hash + Eq> Default for ChainedHashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for ChainedHashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}
