//! Re-export core/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{fmt, hint, iter, mem, result, sync};

#[cfg(not(feature = "with-std"))]
pub use alloc::vec;

#[cfg(feature = "with-std")]
pub use std::{fmt, hint, iter, mem, result, sync, vec};

#[cfg(feature = "with-std")]
pub use std::error;

#[cfg(not(feature = "with-std"))]
pub mod error {

pub trait Error : super::fmt::Debug + super::fmt::Display {}

}
