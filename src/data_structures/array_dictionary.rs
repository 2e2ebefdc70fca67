use crate::{Error, Result};

/// An association list used as a single chain of [`HashDictionary`](super::HashDictionary)
///
/// Lookups scan the pairs linearly, so this is only meant for the handful of
/// keys that share a bucket.
#[derive(Debug, Clone)]
pub struct ArrayDictionary<K, V> {
    /// Live pairs, in insertion order until a removal swaps the last pair in
    pairs: Vec<(K, V)>,
}

impl<K, V> ArrayDictionary<K, V> {
    /// Creates a new empty dictionary
    pub fn new() -> Self {
        ArrayDictionary { pairs: Vec::new() }
    }

    /// Returns the number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the dictionary holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.pairs.iter().map(|(k, v)| (k, v))
    }

    pub(crate) fn pairs(&self) -> &[(K, V)] {
        &self.pairs
    }

    /// Consumes the dictionary, yielding owned pairs
    pub(crate) fn into_pairs(self) -> std::vec::IntoIter<(K, V)> {
        self.pairs.into_iter()
    }
}

impl<K, V> ArrayDictionary<K, V>
where
    K: Eq,
{
    fn index_of(&self, key: &K) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }

    /// Returns the value paired with `key`
    pub fn get(&self, key: &K) -> Result<&V> {
        self.index_of(key)
            .map(|index| &self.pairs[index].1)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns the stored key and value matching `key`
    pub fn get_key_value(&self, key: &K) -> Result<(&K, &V)> {
        self.index_of(key)
            .map(|index| {
                let (k, v) = &self.pairs[index];
                (k, v)
            })
            .ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value paired with `key`
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.index_of(key) {
            Some(index) => Ok(&mut self.pairs[index].1),
            None => Err(Error::KeyNotFound),
        }
    }

    /// Inserts a pair, replacing and returning the previous value for `key`
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.index_of(&key) {
            Some(index) => Some(std::mem::replace(&mut self.pairs[index].1, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    /// Removes `key` and returns its value
    pub fn remove(&mut self, key: &K) -> Result<V> {
        let index = self.index_of(key).ok_or(Error::KeyNotFound)?;
        Ok(self.pairs.swap_remove(index).1)
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }
}

impl<K, V> Default for ArrayDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
