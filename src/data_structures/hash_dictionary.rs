use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use crate::data_structures::ArrayDictionary;
use crate::{Error, Result};

/// Number of buckets in a freshly created table
const INITIAL_TABLE_LEN: usize = 10;

/// Hasher used when none is supplied. It carries no per-instance random state,
/// so identical operation sequences always produce identical bucket layouts.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// A separate-chaining hash dictionary
///
/// Each bucket holds an optional [`ArrayDictionary`] chain. The table doubles
/// once half of its buckets are populated, which keeps the expected chain
/// length constant and `get`/`put`/`remove` amortized O(1).
#[derive(Debug, Clone)]
pub struct HashDictionary<K, V, S = DefaultHashBuilder> {
    /// Bucket table; `None` marks a bucket that has never held a pair or was emptied
    chains: Vec<Option<ArrayDictionary<K, V>>>,

    /// Number of stored pairs
    len: usize,

    /// Number of buckets holding a chain
    populated: usize,

    hash_builder: S,
}

fn empty_table<K, V>(table_len: usize) -> Vec<Option<ArrayDictionary<K, V>>> {
    let mut chains = Vec::with_capacity(table_len);
    chains.resize_with(table_len, || None);
    chains
}

impl<K, V> HashDictionary<K, V, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    /// Creates a new empty dictionary
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a new dictionary sized so that `capacity` well-spread keys
    /// fit without a resize
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> HashDictionary<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a new empty dictionary using `hash_builder` to hash keys
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    /// Creates a new dictionary with a capacity hint and a custom hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let table_len = INITIAL_TABLE_LEN.max(capacity.saturating_mul(2).saturating_add(1));
        HashDictionary {
            chains: empty_table(table_len),
            len: 0,
            populated: 0,
            hash_builder,
        }
    }

    fn bucket_of(&self, key: &K) -> usize {
        let hash = self.hash_builder.hash_one(key);
        // The remainder is below the table length, so it always fits a usize
        (hash % self.chains.len() as u64) as usize
    }

    /// Returns the value paired with `key`
    pub fn get(&self, key: &K) -> Result<&V> {
        match &self.chains[self.bucket_of(key)] {
            Some(chain) => chain.get(key),
            None => Err(Error::KeyNotFound),
        }
    }

    /// Returns the stored key and value matching `key`
    pub fn get_key_value(&self, key: &K) -> Result<(&K, &V)> {
        match &self.chains[self.bucket_of(key)] {
            Some(chain) => chain.get_key_value(key),
            None => Err(Error::KeyNotFound),
        }
    }

    /// Returns a mutable reference to the value paired with `key`
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        let bucket = self.bucket_of(key);
        match &mut self.chains[bucket] {
            Some(chain) => chain.get_mut(key),
            None => Err(Error::KeyNotFound),
        }
    }

    /// Inserts a pair, replacing and returning the previous value for `key`
    ///
    /// The table is doubled and rehashed before the insertion once half of
    /// the buckets are populated.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.populated >= self.chains.len() / 2 {
            self.grow();
        }

        let previous = self.insert_into_bucket(key, value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    fn insert_into_bucket(&mut self, key: K, value: V) -> Option<V> {
        let bucket = self.bucket_of(&key);
        let slot = &mut self.chains[bucket];
        match slot {
            Some(chain) => chain.put(key, value),
            None => {
                let mut chain = ArrayDictionary::new();
                chain.put(key, value);
                *slot = Some(chain);
                self.populated += 1;
                None
            }
        }
    }

    fn grow(&mut self) {
        let table_len = self.chains.len() * 2;
        let old_chains = std::mem::replace(&mut self.chains, empty_table(table_len));
        self.populated = 0;

        for chain in old_chains.into_iter().flatten() {
            for (key, value) in chain.into_pairs() {
                self.insert_into_bucket(key, value);
            }
        }
    }

    /// Removes `key` and returns its value
    pub fn remove(&mut self, key: &K) -> Result<V> {
        let bucket = self.bucket_of(key);
        let chain = self.chains[bucket].as_mut().ok_or(Error::KeyNotFound)?;
        let value = chain.remove(key)?;

        if chain.is_empty() {
            self.chains[bucket] = None;
            self.populated -= 1;
        }
        self.len -= 1;
        Ok(value)
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &K) -> bool {
        match &self.chains[self.bucket_of(key)] {
            Some(chain) => chain.contains_key(key),
            None => false,
        }
    }
}

impl<K, V, S> HashDictionary<K, V, S> {
    /// Returns the number of pairs
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the dictionary holds no pairs
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets
    pub fn table_len(&self) -> usize {
        self.chains.len()
    }

    /// Iterates over the pairs bucket by bucket, then in chain order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            chains: self.chains.iter(),
            current: (&[]).iter(),
            remaining: self.len,
        }
    }

    /// Iterates over the keys in the same order as [`iter`](Self::iter)
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in the same order as [`iter`](Self::iter)
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V> Default for HashDictionary<K, V, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Extend<(K, V)> for HashDictionary<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashDictionary<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::with_hasher(S::default());
        dictionary.extend(iter);
        dictionary
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashDictionary<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the pairs of a [`HashDictionary`]
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    chains: std::slice::Iter<'a, Option<ArrayDictionary<K, V>>>,
    current: std::slice::Iter<'a, (K, V)>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.current.next() {
                self.remaining -= 1;
                return Some((key, value));
            }
            match self.chains.next()? {
                Some(chain) => self.current = chain.pairs().iter(),
                None => continue,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
