//! Extensions Collections Tests
//!
//! These tests exercise bulk removal and conditional insertion across every
//! provided container and every removal strategy.

use collection_extensions::collections::*;
use collection_extensions::{remove_values, EqualityComparer, KeyEquality, NaturalEquality, RemovalOptions};
use indexmap::IndexSet;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

#[cfg(test)]
mod tests {
    use super::*;

    /// Caller-defined container offering only the required methods.
    struct Bag<T> {
        items: Vec<T>,
        remove_calls: usize,
    }

    impl<T> Bag<T> {
        fn new(items: Vec<T>) -> Self {
            Self {
                items,
                remove_calls: 0,
            }
        }
    }

    impl<T> RemovalTarget<T> for Bag<T> {
        fn len(&self) -> usize {
            self.items.len()
        }

        fn remove_equal(&mut self, value: &T, comparer: &dyn EqualityComparer<T>) -> usize {
            self.remove_calls += 1;
            let before = self.items.len();
            self.items.retain(|item| !comparer.equals(item, value));
            before - self.items.len()
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("collections=trace")
            .with_test_writer()
            .try_init();
    }

    /// Test the reference scenario on every container (both occurrences of 2
    /// removed, 4 removed, 5 ignored)
    #[test]
    fn test_reference_scenario_on_every_container() {
        init_tracing();
        let to_remove = [2, 4, 5];

        let mut vec = vec![1, 2, 2, 3, 4];
        vec.remove_all_of(&to_remove);
        assert_eq!(vec, vec![1, 3]);

        let mut deque: VecDeque<i32> = [1, 2, 2, 3, 4].into_iter().collect();
        deque.remove_all_of(&to_remove);
        assert_eq!(deque, VecDeque::from(vec![1, 3]));

        let mut list: LinkedList<i32> = [1, 2, 2, 3, 4].into_iter().collect();
        list.remove_all_of(&to_remove);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 3]);

        let mut btree: BTreeSet<i32> = [1, 2, 3, 4].into_iter().collect();
        btree.remove_all_of(&to_remove);
        assert_eq!(btree.into_iter().collect::<Vec<_>>(), vec![1, 3]);

        let mut hash: HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
        hash.remove_all_of(&to_remove);
        assert_eq!(hash, HashSet::from([1, 3]));

        let mut brown: hashbrown::HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
        brown.remove_all_of(&to_remove);
        assert_eq!(brown.len(), 2);
        assert!(brown.contains(&1) && brown.contains(&3));

        let mut index: IndexSet<i32> = [4, 1, 2, 3].into_iter().collect();
        index.remove_all_of(&to_remove);
        assert_eq!(index.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    /// Test that every removal source shape gives the same result
    #[test]
    fn test_every_source_shape_agrees() {
        let expected = vec![1, 3, 6];
        let base = vec![1, 2, 2, 3, 4, 6, 2];

        let slice = [2, 4, 5];
        let vec_source = vec![2, 4, 5, 4];
        let deque_source: VecDeque<i32> = [5, 4, 2].into_iter().collect();
        let btree_source: BTreeSet<i32> = [2, 4, 5].into_iter().collect();
        let hash_source: HashSet<i32> = [2, 4, 5].into_iter().collect();
        let brown_source: hashbrown::HashSet<i32> = [2, 4, 5].into_iter().collect();
        let index_source: IndexSet<i32> = [2, 4, 5].into_iter().collect();

        let sources: Vec<Removal<'_, i32>> = vec![
            Removal::from(&slice),
            Removal::from(&vec_source),
            Removal::from(&deque_source),
            Removal::from(&btree_source),
            Removal::from(&hash_source),
            Removal::from(&brown_source),
            Removal::from(&index_source),
            Removal::stream(&vec_source),
            Removal::values(vec_source.iter().filter(|v| **v != 0)),
            Removal::owned(vec_source.iter().copied()),
            Removal::owned((2..=5).filter(|v| v % 2 == 0)),
            Removal::owned(vec![2, 4]),
        ];

        for source in sources {
            let description = format!("{source:?}");
            let mut target = base.clone();
            remove_all(Some(&mut target), Some(source));
            assert_eq!(target, expected, "source {description}");
        }
    }

    /// Test order and multiplicity of untouched elements
    #[test]
    fn test_non_matching_elements_keep_order_and_count() {
        let mut vec = vec![9, 1, 9, 2, 8, 1, 7, 2];
        vec.remove_values(&[1, 2]);
        assert_eq!(vec, vec![9, 9, 8, 7]);

        let mut list: LinkedList<char> = "abracadabra".chars().collect();
        list.remove_values(&['a']);
        assert_eq!(list.into_iter().collect::<String>(), "brcdbr");
    }

    /// Test absent and empty arguments (all silent no-ops)
    #[test]
    fn test_absent_and_empty_arguments_are_no_ops() {
        let mut vec = vec![1, 2, 3];

        remove_all(Some(&mut vec), None);
        assert_eq!(vec, vec![1, 2, 3]);

        remove_all(Some(&mut vec), Some(Removal::from(&Vec::<i32>::new())));
        assert_eq!(vec, vec![1, 2, 3]);

        remove_all::<i32, Vec<i32>>(None, Some(Removal::from(&[1])));

        let mut empty: Vec<i32> = Vec::new();
        remove_all(Some(&mut empty), Some(Removal::from(&[1, 2])));
        assert!(empty.is_empty());

        remove_values!(vec);
        assert_eq!(vec, vec![1, 2, 3]);
    }

    /// Test values absent from the target
    #[test]
    fn test_absent_values_leave_target_unchanged() {
        let mut vec = vec![1, 2, 3];
        let report = BulkRemover::default().remove(Some(&mut vec), Some(Removal::from(&[7, 8, 9])));
        assert_eq!(vec, vec![1, 2, 3]);
        assert_eq!(report.removed, 0);

        let mut set: HashSet<&str> = ["neo"].into_iter().collect();
        remove_values!(set, "gas");
        assert_eq!(set.len(), 1);
    }

    /// Test a custom comparer is used for both dedup and matching
    #[test]
    fn test_custom_comparer_on_every_strategy() {
        let ignore_case = KeyEquality::new(|s: &String| s.to_lowercase());
        let names = |values: &[&str]| values.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let to_remove = names(&["NEO", "neo", "Bft"]);

        // Bulk retain
        let mut vec = names(&["Neo", "Gas", "bft", "neo"]);
        vec.remove_all_of_by(&to_remove, &ignore_case);
        assert_eq!(vec, names(&["Gas"]));

        // Direct small
        let mut bag = Bag::new(names(&["Neo", "Gas", "bft", "neo"]));
        let report = BulkRemover::default().remove_by(
            Some(&mut bag),
            Some(Removal::from(&to_remove)),
            &ignore_case,
        );
        assert_eq!(bag.items, names(&["Gas"]));
        assert_eq!(report.strategy, RemovalStrategy::DirectSmall);
        assert_eq!(report.removed, 3);

        // Dedup then remove
        let mut bag = Bag::new(names(&["Neo", "Gas", "bft", "neo"]));
        let report = BulkRemover::default().remove_by(
            Some(&mut bag),
            Some(Removal::stream(&to_remove)),
            &ignore_case,
        );
        assert_eq!(bag.items, names(&["Gas"]));
        assert_eq!(report.strategy, RemovalStrategy::DedupThenRemove);
        // "NEO" and "neo" collapse into one removal.
        assert_eq!(bag.remove_calls, 2);
    }

    /// Test the strategy picked for each input shape
    #[test]
    fn test_strategy_selection() {
        let remover = BulkRemover::default();
        let set: HashSet<i32> = [2].into_iter().collect();
        let large: Vec<i32> = (100..200).collect();

        let mut hash: HashSet<i32> = [1, 2].into_iter().collect();
        let report = remover.remove(Some(&mut hash), Some(Removal::from(&set)));
        assert_eq!(report.strategy, RemovalStrategy::SetDifference);

        let mut vec = vec![1, 2];
        let report = remover.remove(Some(&mut vec), Some(Removal::from(&set)));
        assert_eq!(report.strategy, RemovalStrategy::BulkRetain);

        let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
        let report = remover.remove(Some(&mut list), Some(Removal::from(&large)));
        assert_eq!(report.strategy, RemovalStrategy::BulkRetain);

        let mut bag = Bag::new(vec![1, 2]);
        let report = remover.remove(Some(&mut bag), Some(Removal::from(&set)));
        assert_eq!(report.strategy, RemovalStrategy::DirectFromSet);

        let mut bag = Bag::new(vec![1, 2]);
        let report = remover.remove(Some(&mut bag), Some(Removal::from(&[2])));
        assert_eq!(report.strategy, RemovalStrategy::DirectSmall);

        let mut bag = Bag::new(vec![1, 150]);
        let report = remover.remove(Some(&mut bag), Some(Removal::from(&large)));
        assert_eq!(report.strategy, RemovalStrategy::DedupThenRemove);
        assert_eq!(bag.items, vec![1]);
    }

    /// Test a remover configured from TOML
    #[test]
    fn test_remover_from_toml_options() {
        let options = RemovalOptions::from_toml_str("small_set_threshold = 0").unwrap();
        let remover = BulkRemover::new(options);
        assert_eq!(remover.options().small_set_threshold, 0);

        let mut bag = Bag::new(vec![1, 2]);
        let report = remover.remove(Some(&mut bag), Some(Removal::from(&[2])));
        assert_eq!(report.strategy, RemovalStrategy::DedupThenRemove);
        assert_eq!(bag.items, vec![1]);
    }

    /// Test a caller-defined container with only the required methods
    #[test]
    fn test_custom_target_uses_per_value_removal() {
        let mut bag = Bag::new(vec![1u8, 2, 3, 2, 1]);
        let values: Vec<u8> = std::iter::repeat([1u8, 2]).take(50).flatten().collect();
        remove_all(Some(&mut bag), Some(Removal::from(&values)));

        assert_eq!(bag.items, vec![3]);
        // 100 values deduplicate down to two removal calls.
        assert_eq!(bag.remove_calls, 2);
    }

    /// Test owned and lazily computed removal values
    #[test]
    fn test_owned_removal_values() {
        struct Record {
            id: u32,
        }
        let records: Vec<Record> = [3, 5, 3, 9].into_iter().map(|id| Record { id }).collect();

        let mut vec: Vec<u32> = (1..=10).collect();
        vec.remove_all_of(Removal::owned(records.iter().map(|record| record.id)));
        assert_eq!(vec, vec![1, 2, 4, 6, 7, 8, 10]);

        let mut list: LinkedList<u32> = (1..=10).collect();
        let report = BulkRemover::default().remove(
            Some(&mut list),
            Some(Removal::owned(records.iter().map(|record| record.id + 1))),
        );
        assert_eq!(report.strategy, RemovalStrategy::BulkRetain);
        assert_eq!(report.removed, 3);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 5, 7, 8, 9]);

        let mut vec: Vec<u32> = (1..=10).collect();
        vec.remove_all_of(Removal::owned((0..).map(|i| i * 3).take_while(|i| *i < 10)));
        assert_eq!(vec, vec![1, 2, 4, 5, 7, 8, 10]);
    }

    /// Test conditional insertion
    #[test]
    fn test_add_if_present() {
        let mut vec = vec![1];
        vec.add_if_present(None);
        assert_eq!(vec.len(), 1);
        vec.add_if_present(Some(5));
        assert_eq!(vec.len(), 2);
        assert!(vec.contains(&5));

        let mut set: HashSet<i32> = HashSet::new();
        add_if_present(&mut set, Some(3));
        add_if_present(&mut set, None::<i32>);
        assert_eq!(set, HashSet::from([3]));

        let mut list: LinkedList<&str> = LinkedList::new();
        list.add_if_present(Some("neo"));
        assert_eq!(list.back(), Some(&"neo"));
    }

    /// Test that the removal source is never mutated
    #[test]
    fn test_source_is_untouched() {
        let source = vec![3, 3, 1];
        let mut target = vec![1, 2, 3];
        target.remove_all_of(&source);
        assert_eq!(source, vec![3, 3, 1]);
        assert_eq!(target, vec![2]);

        let comparer = NaturalEquality;
        let mut target: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        target.remove_all_of_by(Removal::stream(&source), &comparer);
        assert_eq!(source, vec![3, 3, 1]);
        assert_eq!(target.into_iter().collect::<Vec<_>>(), vec![2]);
    }
}
