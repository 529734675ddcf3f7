//! Model-based checks of the HashSet against `BTreeSet`.

use std::collections::BTreeSet;

use proptest::prelude::*;

use runset::hashset::{HashSet, Key};

#[derive(Clone, Debug)]
enum Operation {
    Insert(Key),
    Erase(Key),
    EraseFirst,
    SetMaxLoadFactor(f32),
}

//  Keys are drawn from a narrow range, to exercise duplicates and collisions,
//  and from the full range, to exercise extremes.
fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => -64..64i32,
        1 => any::<i32>(),
        1 => Just(Key::MIN),
    ]
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        8 => key().prop_map(Operation::Insert),
        4 => key().prop_map(Operation::Erase),
        1 => Just(Operation::EraseFirst),
        1 => prop_oneof![Just(0.5f32), Just(0.75f32), Just(1.0f32), Just(2.0f32)]
            .prop_map(Operation::SetMaxLoadFactor),
    ]
}

//  Checks that the elements of each bucket are contiguous in iteration order,
//  and that `bucket_size` counts all of them: were the run head not the first
//  element of the bucket, the bounded scan would miss some.
fn check_contiguity(set: &HashSet) -> Result<(), TestCaseError> {
    let buckets: Vec<usize> = set.iter().map(|key| set.bucket(key)).collect();

    let mut closed = BTreeSet::new();

    for (index, &bucket) in buckets.iter().enumerate() {
        let continues = index > 0 && buckets[index - 1] == bucket;

        if !continues {
            prop_assert!(closed.insert(bucket), "bucket {} split in {:?}", bucket, set);
        }
    }

    for bucket in 0..set.bucket_count() {
        let expected = buckets.iter().filter(|&&b| b == bucket).count();
        prop_assert_eq!(expected, set.bucket_size(bucket));
    }

    Ok(())
}

fn check_against(set: &HashSet, model: &BTreeSet<Key>) -> Result<(), TestCaseError> {
    prop_assert_eq!(model.len(), set.len());
    prop_assert_eq!(model.is_empty(), set.is_empty());

    let mut keys: Vec<Key> = set.iter().collect();
    keys.sort_unstable();
    prop_assert_eq!(model.iter().copied().collect::<Vec<_>>(), keys);

    for &key in model {
        prop_assert!(set.contains(key));
        prop_assert_eq!(Some(key), set.get(set.find(key)));
    }

    prop_assert_eq!(set.len() as f32 / set.bucket_count() as f32, set.load_factor());

    check_contiguity(set)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

    #[test]
    fn matches_model(operations in prop::collection::vec(operation(), 0..200)) {
        let mut set = HashSet::new();
        let mut model = BTreeSet::new();
        let mut bucket_count = set.bucket_count();

        for operation in operations {
            match operation {
                Operation::Insert(key) => {
                    prop_assert_eq!(model.insert(key), set.insert(key));
                    prop_assert!(set.contains(key));

                    //  With a maximum load factor of 1, or more, the bound is
                    //  exact since it is reached one element at a time. Below
                    //  it, a single insertion may overshoot by one element.
                    if set.max_load_factor() >= 1.0 {
                        prop_assert!(set.load_factor() <= set.max_load_factor());
                    } else {
                        let slack = 1.0 / set.bucket_count() as f32;
                        prop_assert!(set.load_factor() <= set.max_load_factor() + slack);
                    }
                },
                Operation::Erase(key) => {
                    prop_assert_eq!(model.remove(&key), set.erase(key));
                    prop_assert!(!set.contains(key));
                },
                Operation::EraseFirst => {
                    let first = set.begin();

                    if let Some(key) = set.get(first) {
                        let next = set.erase_at(first);

                        prop_assert!(model.remove(&key));
                        prop_assert_eq!(set.begin(), next);
                    } else {
                        prop_assert!(model.is_empty());
                    }
                },
                Operation::SetMaxLoadFactor(max) => {
                    set.set_max_load_factor(max);
                    prop_assert!(set.load_factor() < set.max_load_factor());
                },
            }

            prop_assert!(set.bucket_count() >= bucket_count);
            bucket_count = set.bucket_count();

            check_against(&set, &model)?;
        }
    }

    #[test]
    fn duplicates_do_not_matter(keys in prop::collection::vec(key(), 0..100)) {
        let mut once = HashSet::new();
        let mut twice = HashSet::new();

        for &key in &keys {
            once.insert(key);
            twice.insert(key);
            twice.insert(key);
        }

        prop_assert_eq!(&once, &twice);
        check_against(&once, &keys.iter().copied().collect())?;
    }

    #[test]
    fn copies_are_independent(
        keys in prop::collection::vec(key(), 1..64),
        extra in key(),
    ) {
        let original: HashSet = keys.iter().copied().collect();
        let model: BTreeSet<Key> = keys.iter().copied().collect();

        let mut copy = original.clone();
        check_against(&copy, &model)?;

        copy.erase(keys[0]);
        copy.insert(extra);

        check_against(&original, &model)?;

        let mut assigned = HashSet::new();
        assigned.insert(extra);
        assigned.clone_from(&original);

        prop_assert_eq!(&original, &assigned);
        check_against(&assigned, &model)?;
    }
}
