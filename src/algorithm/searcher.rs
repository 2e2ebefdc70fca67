use crate::data_structures::ArrayHeap;

/// Returns the `k` largest elements of `input` in ascending order
///
/// The first element of the output is the smallest of the selected ones and
/// the last is the largest element of `input`. If `input` holds fewer than `k`
/// elements, all of them are returned sorted. `input` is left untouched.
///
/// Runs in O(n log k) by keeping at most `k` candidates in a min-heap whose
/// root is the weakest candidate retained so far.
pub fn top_k_sort<T>(k: usize, input: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if k == 0 {
        return Vec::new();
    }

    let mut retained = ArrayHeap::with_capacity(k.min(input.len()));
    let (head, tail) = input.split_at(k.min(input.len()));
    retained.extend(head.iter().cloned());

    for item in tail {
        // The smaller of `item` and the retained minimum falls out
        retained.push_pop(item.clone());
    }

    retained.into_sorted_vec()
}
