//! The capacity of the bucket table.
//!
//! The number of buckets follows a fixed schedule, known at compile-time, and
//! only ever moves forward along it.

use super::failure::{Failure, Result};
use super::key::Key;

//  Number of buckets of the first entry of the schedule.
const INITIAL_BUCKETS: usize = 8;

//  Number of entries of the schedule; the last one has 2^29 buckets.
const SCHEDULE_LENGTH: usize = 27;

//  The capacity schedule: each entry doubles the previous one.
static SCHEDULE: [usize; SCHEDULE_LENGTH] = schedule();

//  Capacity.
//
//  A position along the capacity schedule, and the computations which depend
//  on it.
//
//  The schedule may be cut short, in which case `last` is the index of its
//  final entry.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Capacity {
    step: u8,
    last: u8,
}

impl Capacity {
    //  Returns the first capacity of the schedule.
    pub fn initial() -> Self { Self { step: 0, last: (SCHEDULE_LENGTH - 1) as u8 } }

    //  Returns the first capacity of a schedule cut short after `last`.
    //
    //  Exhausting the full schedule requires a table of 2^29 buckets, which is
    //  more than tests can afford.
    #[cfg(test)]
    pub fn truncated(last: usize) -> Self {
        assert!(last < SCHEDULE_LENGTH, "{} is beyond the schedule", last);

        Self { step: 0, last: last as u8 }
    }

    //  Returns the index of this capacity within the schedule.
    pub fn step(self) -> usize { self.step as usize }

    //  Returns the number of buckets.
    pub fn number_buckets(self) -> NumberBuckets {
        NumberBuckets(SCHEDULE[self.step()])
    }

    //  Returns the next capacity of the schedule.
    //
    //  #   Errors
    //
    //  Returns `OutOfBuckets` if this is the last capacity of the schedule.
    pub fn next(self) -> Result<Self> {
        if self.step < self.last {
            Ok(Self { step: self.step + 1, ..self })
        } else {
            Err(Failure::OutOfBuckets)
        }
    }

    //  Returns the smallest capacity, no smaller than `self`, at which `size`
    //  elements are loaded strictly below `max_load`.
    //
    //  #   Errors
    //
    //  Returns `OutOfBuckets` if no capacity of the schedule is large enough.
    pub fn fitting(self, size: Size, max_load: f32) -> Result<Self> {
        let mut candidate = self;

        while candidate.load(size) >= max_load {
            candidate = candidate.next()?;
        }

        Ok(candidate)
    }

    //  Returns the load of `size` elements.
    pub fn load(self, size: Size) -> f32 {
        size.0 as f32 / self.number_buckets().0 as f32
    }

    //  Returns the bucket of `key`.
    //
    //  The magnitude of the remainder is taken, so that `-3` and `3` share a
    //  bucket. Computing it on the unsigned magnitude of the key cannot
    //  overflow, not even for `Key::MIN`.
    pub fn bucket_of(self, key: Key) -> BucketIndex {
        let number_buckets = self.number_buckets().0 as u64;
        let magnitude = key.unsigned_abs() as u64;

        BucketIndex((magnitude % number_buckets) as usize)
    }
}

/// The index of a Bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BucketIndex(pub usize);

/// The number of Buckets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NumberBuckets(pub usize);

/// The number of elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size(pub usize);

//
//  Implementation Details
//

const fn schedule() -> [usize; SCHEDULE_LENGTH] {
    let mut result = [0; SCHEDULE_LENGTH];

    let mut index = 0;
    while index < SCHEDULE_LENGTH {
        result[index] = INITIAL_BUCKETS << index;
        index += 1;
    }

    result
}
