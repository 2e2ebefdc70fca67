use graphkit::top_k_sort;
use proptest::prelude::*;

#[test]
fn test_simple_usage() {
    let list: Vec<i32> = (0..100).collect();

    let top = top_k_sort(10, &list);
    assert_eq!(top, (90..100).collect::<Vec<_>>());
}

#[test]
fn test_selects_largest_in_ascending_order() {
    assert_eq!(top_k_sort(3, &[5, 4, 7, 9, 3]), vec![5, 7, 9]);
}

#[test]
fn test_fewer_elements_than_k() {
    let list = vec![5, 4, 7, 9, 3];

    let top = top_k_sort(7, &list);
    assert_eq!(top, vec![3, 4, 5, 7, 9]);
}

#[test]
fn test_multiple_same_element() {
    let list = vec![5; 100];

    let top = top_k_sort(10, &list);
    assert_eq!(top, vec![5; 10]);
}

#[test]
fn test_zero_k_is_empty() {
    let list: Vec<i32> = (0..20).collect();
    assert!(top_k_sort(0, &list).is_empty());
    assert!(top_k_sort::<i32>(0, &[]).is_empty());
}

#[test]
fn test_empty_input() {
    let list: Vec<i32> = Vec::new();
    assert!(top_k_sort(5, &list).is_empty());
}

#[test]
fn test_k_equal_to_len() {
    let list: Vec<i32> = (0..100).rev().collect();

    let top = top_k_sort(100, &list);
    assert_eq!(top, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_input_is_not_mutated() {
    let list = vec![8, 1, 6, 3, 9, 2];
    let before = list.clone();

    let _ = top_k_sort(3, &list);
    assert_eq!(list, before);
}

#[test]
fn test_strings() {
    let words = ["wall", "room", "maze", "edge", "heap"].map(String::from);
    assert_eq!(top_k_sort(2, &words), vec!["room".to_string(), "wall".to_string()]);
}

proptest! {
    #[test]
    fn prop_matches_sorted_tail(
        list in prop::collection::vec(any::<i16>(), 0..200),
        k in 0usize..250,
    ) {
        let top = top_k_sort(k, &list);

        let mut sorted = list.clone();
        sorted.sort_unstable();
        let expected = sorted[sorted.len() - k.min(sorted.len())..].to_vec();

        prop_assert_eq!(top.len(), k.min(list.len()));
        prop_assert_eq!(top, expected);
    }
}
