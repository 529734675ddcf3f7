//! Iterators over HashSet.
//!
//! Both iterators yield the elements in storage order: the elements of a
//! given bucket are always yielded consecutively.

use super::root::iter;

use super::hashcore::key::Key;
use super::hashcore::sequence::{Sequence, Slots};

/// An iterator over the elements of a `HashSet`.
///
/// Created by `HashSet::iter`; the `HashSet` cannot be modified while it is
/// alive.
pub struct Iter<'a> {
    slots: Slots<'a>,
}

impl<'a> Iter<'a> {
    //  Creates a new instance.
    pub(crate) fn new(sequence: &'a Sequence) -> Self { Self { slots: sequence.iter() } }
}

impl<'a> Clone for Iter<'a> {
    fn clone(&self) -> Self { Self { slots: self.slots.clone() } }
}

impl<'a> iter::Iterator for Iter<'a> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let slot = self.slots.next()?;
        Some(self.slots.sequence().key(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.slots.size_hint() }
}

impl<'a> iter::ExactSizeIterator for Iter<'a> {}

impl<'a> iter::FusedIterator for Iter<'a> {}

/// An owning iterator over the elements of a `HashSet`.
///
/// Created by `HashSet::into_iter`.
pub struct IntoIter {
    sequence: Sequence,
}

impl IntoIter {
    //  Creates a new instance.
    pub(crate) fn new(sequence: Sequence) -> Self { Self { sequence } }
}

impl iter::Iterator for IntoIter {
    type Item = Key;

    fn next(&mut self) -> Option<Key> { self.sequence.pop_front() }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.len(), Some(self.sequence.len()))
    }
}

impl iter::ExactSizeIterator for IntoIter {}

impl iter::FusedIterator for IntoIter {}

#[cfg(test)]
mod tests {

use super::*;

fn sequence() -> Sequence {
    let mut sequence = Sequence::new();

    for key in [3, 1, 4] {
        sequence.push_back(key);
    }

    sequence
}

#[test]
fn iter() {
    let sequence = sequence();
    let iter = Iter::new(&sequence);

    assert_eq!(3, iter.len());
    assert_eq!(vec![3, 1, 4], iter.clone().collect::<Vec<_>>());

    //  Restartable: a fresh iterator starts from the beginning.
    assert_eq!(vec![3, 1, 4], Iter::new(&sequence).collect::<Vec<_>>());
}

#[test]
fn into_iter() {
    let mut iter = IntoIter::new(sequence());

    assert_eq!(3, iter.len());
    assert_eq!(Some(3), iter.next());
    assert_eq!(2, iter.len());
    assert_eq!(vec![1, 4], iter.collect::<Vec<_>>());
}

}
