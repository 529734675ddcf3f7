//! #   The HashSet.
//!
//! The `HashSet` is a set of `i32` keys, hashed by identity: the bucket of a
//! key is the magnitude of its remainder by the number of buckets.
//!
//! ##  Under the covers.
//!
//! Under the covers the `HashSet` is a single sequence of elements, and a table
//! of buckets each recording the first element of its run: the elements of a
//! bucket are contiguous in the sequence.
//!
//! The main consequences are:
//!
//! -   Iterating over the `HashSet` yields the elements of a bucket
//!     consecutively.
//! -   A look-up only scans the run of its bucket.
//! -   Growing the number of buckets relinks the elements, without moving or
//!     re-creating them, so that positions remain valid across growth.
//!
//! #   Example: basic
//!
//! ```
//! use runset::hashset::HashSet;
//!
//! let mut set = HashSet::new();
//! set.insert(1);
//! set.insert(2);
//!
//! assert_eq!(2, set.len());
//! assert!(set.contains(1));
//!
//! set.extend([3, 4, 5]);
//!
//! assert_eq!(5, set.len());
//! assert!(set.erase(4));
//! assert!(!set.contains(4));
//!
//! for e in &set {
//!     println!("{}", e);
//! }
//! ```
//!
//! #   Example: managing buckets
//!
//! The number of buckets starts at 8 and doubles whenever an insertion finds
//! the load factor at or above the maximum load factor, 1 by default.
//!
//! ```
//! use runset::hashset::HashSet;
//!
//! let mut set = HashSet::new();
//! set.extend(0..8);
//!
//! assert_eq!(8, set.bucket_count());
//! assert_eq!(1.0, set.load_factor());
//!
//! set.insert(8);
//! assert_eq!(16, set.bucket_count());
//!
//! //  Lowering the maximum load factor grows the number of buckets as needed.
//! set.set_max_load_factor(0.25);
//! assert_eq!(64, set.bucket_count());
//! ```
//!
//! #   Example: positions
//!
//! Positions allow erasing elements while traversing the `HashSet`.
//!
//! ```
//! use runset::hashset::HashSet;
//!
//! let mut set: HashSet = (0..10).collect();
//!
//! let mut position = set.begin();
//!
//! while position != set.end() {
//!     match set.get(position) {
//!         Some(key) if key >= 5 => position = set.erase_at(position),
//!         _ => position = set.advance(position),
//!     }
//! }
//!
//! assert_eq!(5, set.len());
//! ```

pub mod iterator;

mod hashset;
mod position;

pub use super::hashcore::key::Key;
pub use self::hashset::HashSet;
pub use self::iterator::{IntoIter, Iter};
pub use self::position::Position;

use super::failure;
use super::hashcore;
use super::root;
