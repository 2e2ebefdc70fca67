pub mod array_dictionary;
pub mod array_heap;
pub mod disjoint_set;
pub mod hash_dictionary;
pub mod hash_set;

pub use array_dictionary::ArrayDictionary;
pub use array_heap::ArrayHeap;
pub use disjoint_set::DisjointSet;
pub use hash_dictionary::HashDictionary;
pub use hash_set::ChainedHashSet;
