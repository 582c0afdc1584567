use probe_core::containers::{SortedContainer, SortedVecMap};
use probe_core::domain::{KeyValueGenerator, Person, RosterGenerator, Student};

fn sample_pairs(n: usize) -> Vec<(Person, Student)> {
    let generator = RosterGenerator::default();
    (0..n).map(|i| generator.generate(i)).collect()
}

fn assert_non_decreasing(keys: &[Person]) {
    for pair in keys.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "keys out of order: {} before {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn both_structures_iterate_in_non_decreasing_key_order() {
    let pairs = sample_pairs(20);
    let sorted = SortedContainer::from_pairs(&pairs);

    let array_keys: Vec<Person> = sorted.array_keys().cloned().collect();
    let tree_keys: Vec<Person> = sorted.tree_keys().cloned().collect();

    assert_non_decreasing(&array_keys);
    assert_non_decreasing(&tree_keys);
    assert_eq!(array_keys, tree_keys);
}

#[test]
fn insertion_order_does_not_affect_iteration_order() {
    let mut pairs = sample_pairs(15);
    let sorted_forward = SortedContainer::from_pairs(&pairs);

    pairs.reverse();
    let sorted_reversed = SortedContainer::from_pairs(&pairs);

    let forward: Vec<Person> = sorted_forward.array_keys().cloned().collect();
    let reversed: Vec<Person> = sorted_reversed.array_keys().cloned().collect();
    assert_eq!(forward, reversed);
}

#[test]
fn array_and_tree_agree_on_membership() {
    let pairs = sample_pairs(11);
    let sorted = SortedContainer::from_pairs(&pairs);

    for (key, _) in &pairs {
        assert!(sorted.contains_in_array(key));
        assert!(sorted.contains_in_tree(key));
    }
    assert_eq!(sorted.len(), 11);
}

#[test]
fn sorted_vec_map_replaces_on_equal_key() {
    let mut map = SortedVecMap::new();
    map.insert("k", 1);
    map.insert("k", 2);

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&"k"), Some(&2));
}

#[test]
fn sorted_vec_map_orders_arbitrary_insertions() {
    let mut map = SortedVecMap::new();
    for n in [5, 1, 4, 2, 3] {
        map.insert(n, n * 10);
    }

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    assert!(map.contains_key(&3));
    assert!(!map.contains_key(&6));
}
