//! Internal testing utilities

use crate::root::vec::Vec;

use crate::hashcore::buckets::Buckets;
use crate::hashcore::capacity::BucketIndex;
use crate::hashcore::key::Key;

//  Checks all structural invariants of `buckets`, panicking on violation:
//
//  -   Links are consistent in both directions, and the length matches.
//  -   Each key appears at most once.
//  -   The elements of a bucket are contiguous, starting at its head.
//  -   A bucket without elements has no head.
pub fn check_invariants(buckets: &Buckets) {
    let sequence = buckets.sequence();

    //  Links.
    let slots: Vec<_> = sequence.iter().collect();
    assert_eq!(sequence.len(), slots.len());
    assert_eq!(slots.first().copied(), sequence.front());
    assert_eq!(slots.last().copied(), sequence.back());

    for window in slots.windows(2) {
        assert_eq!(Some(window[0]), sequence.prev(window[1]));
    }

    //  Uniqueness.
    let mut keys: Vec<Key> = slots.iter().map(|&slot| sequence.key(slot)).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(slots.len(), keys.len(), "Duplicate keys");

    //  Contiguity.
    for bucket in 0..buckets.number_buckets().0 {
        let bucket = BucketIndex(bucket);

        let members: Vec<_> = slots.iter()
            .enumerate()
            .filter(|&(_, &slot)| buckets.bucket_of(sequence.key(slot)) == bucket)
            .collect();

        let (first, &head) = match members.first() {
            Some(&member) => member,
            None => {
                assert_eq!(None, buckets.head(bucket), "Head of empty {:?}", bucket);
                continue;
            },
        };

        assert_eq!(Some(head), buckets.head(bucket), "Head of {:?}", bucket);

        for (offset, &(index, _)) in members.iter().enumerate() {
            assert_eq!(first + offset, index, "Run of {:?} is not contiguous", bucket);
        }

        assert_eq!(members.len(), buckets.run(bucket).count());
    }
}
