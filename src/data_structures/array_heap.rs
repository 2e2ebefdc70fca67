use crate::{Error, Result};

/// Fan-out of every heap node
const NUM_CHILDREN: usize = 4;

/// A 4-ary min-heap stored in a single growable array
///
/// The live elements occupy `heap[..len]`, with the minimum at index 0. Node
/// `i` has parent `(i - 1) / 4` and children `4i + 1 ..= 4i + 4`.
///
/// There is no decrease-key: callers that need to lower a priority insert a
/// fresh entry and skip the stale one when it surfaces.
#[derive(Debug, Clone)]
pub struct ArrayHeap<T> {
    heap: Vec<T>,
}

impl<T: Ord> ArrayHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        ArrayHeap { heap: Vec::new() }
    }

    /// Creates a new empty heap that can hold `capacity` items before growing
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayHeap {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts an item, sifting it up to its place
    pub fn insert(&mut self, item: T) {
        if self.heap.len() == self.heap.capacity() {
            let grown = self.heap.capacity() * NUM_CHILDREN + NUM_CHILDREN;
            self.heap.reserve_exact(grown - self.heap.len());
        }
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Returns the minimum item without removing it
    pub fn peek_min(&self) -> Result<&T> {
        self.heap.first().ok_or(Error::EmptyContainer)
    }

    /// Removes and returns the minimum item
    pub fn remove_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyContainer);
        }

        // swap_remove moves the last live element into the root slot
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Replaces the minimum item with `item` and returns the old minimum
    ///
    /// Equivalent to `remove_min` followed by `insert`, with a single sift.
    pub fn replace_min(&mut self, item: T) -> Result<T> {
        let root = self.heap.first_mut().ok_or(Error::EmptyContainer)?;
        let min = std::mem::replace(root, item);
        self.sift_down(0);
        Ok(min)
    }

    /// Inserts `item` and removes the minimum in one step, returning the smaller
    /// of `item` and the old minimum
    ///
    /// An empty heap hands `item` straight back.
    pub fn push_pop(&mut self, item: T) -> T {
        match self.heap.first_mut() {
            Some(root) if *root < item => {
                let min = std::mem::replace(root, item);
                self.sift_down(0);
                min
            }
            _ => item,
        }
    }

    /// Drains the heap into a vector sorted in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Ok(item) = self.remove_min() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / NUM_CHILDREN;
            if self.heap[parent] <= self.heap[index] {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let first_child = index * NUM_CHILDREN + 1;
            if first_child >= len {
                break;
            }

            let last_child = (first_child + NUM_CHILDREN).min(len);
            let mut smallest = first_child;
            for child in first_child + 1..last_child {
                if self.heap[child] < self.heap[smallest] {
                    smallest = child;
                }
            }

            if self.heap[smallest] >= self.heap[index] {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for ArrayHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for ArrayHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for ArrayHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
