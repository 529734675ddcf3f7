//! The Failure and Result types of this library.
//!
//! Few operations of the `HashSet` can fail, and when they do the cause is represented as a `Failure`. A failed
//! operation leaves the `HashSet` exactly as it was before the call.
//!
//! All faillible methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.

use super::root::{error, fmt, result};

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The bucket index is greater than or equal to the number of buckets.
    BucketOutOfBounds,
    /// The position refers to no element: either the end, or an erased element.
    InvalidPosition,
    /// The maximum load factor is not a finite, strictly positive, number.
    InvalidLoadFactor,
    /// The capacity schedule is exhausted, no further growth is possible.
    OutOfBuckets,
}

impl error::Error for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;
