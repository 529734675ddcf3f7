#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Runset Library
//!
//! A hash set of integer keys, chained through a single shared sequence.
//!
//! All elements live in one sequence, which doubles as the iteration order,
//! and the elements of each bucket are kept contiguous within it. The bucket
//! table only records where the run of each bucket starts.
//!
//! The number of buckets grows along a fixed schedule, relinking elements
//! rather than re-creating them, and never shrinks.

#[cfg(not(feature = "with-std"))]
extern crate alloc;

pub mod failure;
pub mod hashset;

mod hashcore;
mod utils;

use self::utils::root;
