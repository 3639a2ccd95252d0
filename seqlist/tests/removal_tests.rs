use seqlist::{SeqList, SeqListError};

#[test]
fn test_remove_at_shifts_left() {
    let mut list: SeqList<i32> = (0..10).collect();

    assert_eq!(list.remove_at(3), Ok(3));

    assert_eq!(list.len(), 9);
    assert_eq!(list.get(3), Ok(&4));
    assert_eq!(list.to_vec(), vec![0, 1, 2, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_remove_at_first_and_last() {
    let mut list: SeqList<i32> = (0..5).collect();

    assert_eq!(list.remove_at(4), Ok(4));
    assert_eq!(list.remove_at(0), Ok(0));
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_remove_at_out_of_range() {
    let mut list: SeqList<i32> = (0..3).collect();

    assert_eq!(
        list.remove_at(3),
        Err(SeqListError::OutOfRange {
            index: 3,
            length: 3
        })
    );
    assert_eq!(list.len(), 3);

    let mut empty: SeqList<i32> = SeqList::new();
    assert!(empty.remove_at(0).is_err());
}

#[test]
fn test_remove_at_keeps_capacity() {
    let mut list: SeqList<i32> = (0..300).collect();
    let capacity = list.capacity();

    while !list.is_empty() {
        list.remove_at(0).unwrap();
    }

    assert_eq!(list.capacity(), capacity);
}

#[test]
fn test_remove_value() {
    let mut list: SeqList<&str> = ["a", "b", "c", "b"].into_iter().collect();

    assert!(list.remove_value(&"b"));
    assert_eq!(list.to_vec(), vec!["a", "c", "b"]);

    assert!(!list.remove_value(&"z"));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_remove_all_elements_of_another_collection() {
    let mut list: SeqList<i32> = (0..1000).collect();
    let evens: Vec<i32> = (0..1000).filter(|i| i % 2 == 0).collect();
    let odds: Vec<i32> = (0..1000).filter(|i| i % 2 == 1).collect();

    assert_eq!(list.remove_all(&evens), 500);
    assert_eq!(list.to_vec(), odds);
}

#[test]
fn test_retain_all_elements_of_another_collection() {
    let mut list: SeqList<i32> = (0..1000).collect();
    let evens: Vec<i32> = (0..1000).filter(|i| i % 2 == 0).collect();

    assert_eq!(list.retain_all(&evens), 500);
    assert_eq!(list.to_vec(), evens);
}

#[test]
fn test_remove_all_and_retain_all_accept_another_list() {
    let mut list: SeqList<i32> = (0..10).collect();
    let mut kept: SeqList<i32> = (0..10).collect();
    let small: SeqList<i32> = vec![1, 3, 5, 99].into();

    assert_eq!(list.remove_all(&small), 3);
    assert_eq!(list.to_vec(), vec![0, 2, 4, 6, 7, 8, 9]);
    assert_eq!(kept.retain_all(&small), 7);
    assert_eq!(kept.to_vec(), vec![1, 3, 5]);
    assert_eq!(kept.remove_all(&[3]), 1);
    assert_eq!(kept.to_vec(), vec![1, 5]);
}

#[test]
fn test_remove_matching_adjacent_matches() {
    // every match sits right after another one
    let mut list: SeqList<i32> = vec![1, 1, 1, 2, 1, 1, 3, 1].into();

    assert_eq!(list.remove_matching(|v| *v == 1), 6);
    assert_eq!(list.to_vec(), vec![2, 3]);
}

#[test]
fn test_remove_matching_nothing_or_everything() {
    let mut list: SeqList<i32> = (0..10).collect();

    assert_eq!(list.remove_matching(|_| false), 0);
    assert_eq!(list.len(), 10);

    assert_eq!(list.remove_matching(|_| true), 10);
    assert!(list.is_empty());
    assert_eq!(list.iter().count(), 0);
}

#[test]
fn test_retain_matching_keeps_order() {
    let mut list: SeqList<String> = ["pear", "fig", "plum", "kiwi", "peach"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let removed = list.retain_matching(|s| s.starts_with('p'));

    assert_eq!(removed, 2);
    assert_eq!(list.to_string(), "[pear, plum, peach]");
}

#[test]
fn test_remove_then_append_reuses_slots() {
    let mut list: SeqList<i32> = (0..10).collect();
    list.retain_matching(|v| *v < 3);

    list.append(42);
    assert_eq!(list.to_vec(), vec![0, 1, 2, 42]);
}

#[test]
fn test_pop_until_empty() {
    let mut list: SeqList<i32> = (0..3).collect();
    assert_eq!(list.pop(), Some(2));
    assert_eq!(list.pop(), Some(1));
    assert_eq!(list.pop(), Some(0));
    assert_eq!(list.pop(), None);
}
