//! Positions within the HashSet.

use super::hashcore::element::Handle;

/// `Position`
///
/// An opaque, non-owning, reference to the location of an element within a
/// `HashSet`, as returned by `find`, `begin`, `advance` and `erase_at`.
///
/// The end position, returned by `end`, refers to no element: it is returned
/// by an unsuccessful `find`, and marks the end of a traversal.
///
/// A position does not borrow the `HashSet`, and is meant to be used before
/// the next insertion or erasure. A position to an erased element is detected
/// as such, and no longer refers to any element.
///
/// A position only ever refers to an element of the `HashSet` it was obtained
/// from: used with any other `HashSet`, including a copy, or the same `HashSet`
/// after it was assigned to with `clone_from`, it refers to no element.
///
/// #   Example
///
/// ```
/// #   use runset::hashset::HashSet;
/// let mut set = HashSet::new();
/// set.insert(3);
///
/// let position = set.find(3);
/// assert!(!position.is_end());
/// assert_eq!(Some(3), set.get(position));
///
/// assert!(set.find(4).is_end());
/// assert_eq!(set.end(), set.find(4));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position(pub(crate) Option<Handle>);

impl Position {
    /// Returns the end position.
    pub fn end() -> Self { Self(None) }

    /// Returns whether this is the end position, or not.
    pub fn is_end(&self) -> bool { self.0.is_none() }
}

impl Default for Position {
    fn default() -> Self { Self::end() }
}
