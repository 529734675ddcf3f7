//! Internal definition of the HashSet buckets.

pub mod buckets;
pub mod capacity;
pub mod element;
pub mod key;
pub mod sequence;

use super::failure;
use super::root;
use super::utils;
