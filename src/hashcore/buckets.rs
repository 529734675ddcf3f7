//! The buckets underlying the HashSet.
//!
//! All elements live in a single `Sequence`, and the elements of a given
//! bucket are kept contiguous within it: a run. The bucket table only records
//! the first element of each run, its head.
//!
//! Maintaining contiguity is what allows bounding any look-up to the run of
//! its bucket: the scan stops at the first element of another bucket.

use super::root::{iter, vec::Vec};

use super::capacity::{BucketIndex, Capacity, NumberBuckets};
use super::element::Slot;
use super::key::Key;
use super::sequence::Sequence;

//  The storage.
pub struct Buckets {
    capacity: Capacity,
    //  The head of the run of each bucket, if any; one entry per bucket.
    heads: Vec<Option<Slot>>,
    sequence: Sequence,
}

impl Buckets {
    //  Creates an empty instance, with the initial capacity of the schedule.
    pub fn new() -> Self { Self::with_capacity(Capacity::initial()) }

    //  Creates an empty instance, with the given capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self { capacity, heads: empty_table(capacity), sequence: Sequence::new() }
    }

    //  Returns the current capacity.
    pub fn capacity(&self) -> Capacity { self.capacity }

    //  Returns the number of buckets.
    pub fn number_buckets(&self) -> NumberBuckets { self.capacity.number_buckets() }

    //  Returns the number of elements.
    pub fn len(&self) -> usize { self.sequence.len() }

    //  Returns the underlying sequence.
    pub fn sequence(&self) -> &Sequence { &self.sequence }

    //  Returns the bucket of `key`, under the current capacity.
    pub fn bucket_of(&self, key: Key) -> BucketIndex { self.capacity.bucket_of(key) }

    //  Returns the head of the run of `bucket`, if any.
    //
    //  #   Panics
    //
    //  Panics if `bucket` is out of bounds.
    pub fn head(&self, bucket: BucketIndex) -> Option<Slot> { self.heads[bucket.0] }

    //  Returns an iterator over the run of `bucket`.
    //
    //  #   Panics
    //
    //  Panics if `bucket` is out of bounds.
    pub fn run(&self, bucket: BucketIndex) -> Run<'_> {
        Run { buckets: self, bucket, cursor: self.head(bucket) }
    }

    //  Finds the element matching `key`, if any.
    pub fn find(&self, key: Key) -> Option<Slot> {
        let bucket = self.bucket_of(key);

        self.run(bucket).find(|&slot| self.sequence.key(slot) == key)
    }

    //  Inserts `key`, unless already present.
    //
    //  Returns whether `key` was inserted. The capacity is left unchanged.
    pub fn insert(&mut self, key: Key) -> bool {
        let bucket = self.bucket_of(key);

        match self.heads[bucket.0] {
            Some(head) => {
                if self.run(bucket).any(|slot| self.sequence.key(slot) == key) {
                    return false;
                }

                //  Second of the run, so the head needs no update.
                self.sequence.insert_after(head, key);
            },
            None => {
                let slot = self.sequence.push_back(key);
                self.heads[bucket.0] = Some(slot);
            },
        }

        true
    }

    //  Removes the element in `slot`, returning its key.
    //
    //  If the element is the head of its run, the next element of the run, if
    //  any, becomes the head.
    pub fn remove(&mut self, slot: Slot) -> Key {
        let key = self.sequence.key(slot);
        let bucket = self.bucket_of(key);

        if self.heads[bucket.0] == Some(slot) {
            let next = self.sequence.next(slot)
                .filter(|&next| self.bucket_of(self.sequence.key(next)) == bucket);

            self.heads[bucket.0] = next;
        }

        self.sequence.remove(slot)
    }

    //  Redistributes all elements into the buckets of `capacity`.
    //
    //  Elements are relinked, never re-created: their slots, and thus the
    //  handles to them, remain valid.
    pub fn rehash(&mut self, capacity: Capacity) {
        tracing::debug!(
            from = self.number_buckets().0,
            to = capacity.number_buckets().0,
            step = capacity.step(),
            elements = self.len(),
            "rehashing"
        );

        self.capacity = capacity;
        self.heads = empty_table(capacity);

        //  The prefix of the sequence preceeding `cursor` is laid out in runs;
        //  moving the current element within the prefix maintains this.
        let mut cursor = self.sequence.front();

        while let Some(slot) = cursor {
            cursor = self.sequence.next(slot);

            let bucket = capacity.bucket_of(self.sequence.key(slot));

            match self.heads[bucket.0] {
                Some(head) => self.sequence.move_after(head, slot),
                None => self.heads[bucket.0] = Some(slot),
            }
        }
    }

    //  Removes all elements, retaining the capacity.
    pub fn clear(&mut self) {
        self.sequence.clear();

        for head in self.heads.iter_mut() {
            *head = None;
        }
    }

    //  Consumes the instance, returning its sequence.
    pub fn into_sequence(self) -> Sequence { self.sequence }
}

impl Clone for Buckets {
    //  Copies the elements in order, into a fresh sequence, then rebuilds the
    //  table in a single scan: the first element of each bucket is its head.
    fn clone(&self) -> Self {
        let mut sequence = Sequence::with_capacity(self.len());

        for slot in self.sequence.iter() {
            sequence.push_back(self.sequence.key(slot));
        }

        let mut heads = empty_table(self.capacity);

        for slot in sequence.iter() {
            let head = &mut heads[self.capacity.bucket_of(sequence.key(slot)).0];

            if head.is_none() {
                *head = Some(slot);
            }
        }

        Self { capacity: self.capacity, heads, sequence }
    }
}

impl Default for Buckets {
    fn default() -> Self { Self::new() }
}

//  Iterator over the run of a bucket.
pub struct Run<'a> {
    buckets: &'a Buckets,
    bucket: BucketIndex,
    cursor: Option<Slot>,
}

impl<'a> iter::Iterator for Run<'a> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let slot = self.cursor?;
        let sequence = &self.buckets.sequence;

        if self.buckets.bucket_of(sequence.key(slot)) != self.bucket {
            self.cursor = None;
            return None;
        }

        self.cursor = sequence.next(slot);

        Some(slot)
    }
}

impl<'a> iter::FusedIterator for Run<'a> {}

//
//  Implementation Details
//

fn empty_table(capacity: Capacity) -> Vec<Option<Slot>> {
    let mut table = Vec::new();
    table.resize(capacity.number_buckets().0, None);
    table
}
