//! Atomics with a pre-established memory ordering.
//!
//! Mixing orderings on a single atomic makes auditing harder, hence each type
//! here comes with its ordering baked in.

use super::root::sync::atomic::{AtomicUsize, Ordering};

macro_rules! atomic {
    ($name:ident, $underlying:ident, $raw:ident, $ordering:expr) => {
        pub struct $name($underlying);

        impl $name {
            pub const fn new(v: $raw) -> Self { Self($underlying::new(v)) }

            //  Adds `v`, wrapping around on overflow, and returns the previous
            //  value.
            pub fn fetch_add(&self, v: $raw) -> $raw { self.0.fetch_add(v, $ordering) }
        }
    }
}

atomic!{ RelaxedUsize, AtomicUsize, usize, Ordering::Relaxed }
