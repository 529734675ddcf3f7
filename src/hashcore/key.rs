//! The key of the HashSet.

/// The key stored in the `HashSet`: a fixed-width signed integer, hashed by
/// identity.
pub type Key = i32;
