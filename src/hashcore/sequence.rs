//! The sequence of elements shared by all buckets.
//!
//! The sequence is a doubly-linked list whose nodes live in an arena: a node
//! never moves in memory once created, and relinking it elsewhere in the list
//! is a constant-time operation which leaves all other nodes untouched.
//!
//! Slots of erased elements are recycled through a free list.

use super::root::{iter, vec::Vec};
use super::utils::atomic::RelaxedUsize;

use super::element::{Element, Handle, SequenceId, Slot};
use super::key::Key;

//  Source of the identities of sequences.
static IDENTITIES: RelaxedUsize = RelaxedUsize::new(0);

//  Sequence.
pub struct Sequence {
    id: SequenceId,
    elements: Vec<Element>,
    head: Option<Slot>,
    tail: Option<Slot>,
    //  First vacant slot, if any.
    free: Option<Slot>,
    len: usize,
}

impl Sequence {
    //  Creates a new, empty, instance.
    pub fn new() -> Self { Self::with_capacity(0) }

    //  Creates a new, empty, instance with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: SequenceId(IDENTITIES.fetch_add(1)),
            elements: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    //  Returns whether the sequence contains any element, or not.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    //  Returns the number of elements.
    pub fn len(&self) -> usize { self.len }

    //  Returns the first element, if any.
    pub fn front(&self) -> Option<Slot> { self.head }

    //  Returns the last element, if any.
    #[cfg(test)]
    pub fn back(&self) -> Option<Slot> { self.tail }

    //  Returns the key stored in `slot`.
    //
    //  #   Panics
    //
    //  Panics if `slot` is out of bounds.
    pub fn key(&self, slot: Slot) -> Key { self.elements[slot.0].key() }

    //  Returns the element following `slot`, if any.
    pub fn next(&self, slot: Slot) -> Option<Slot> {
        debug_assert!(self.elements[slot.0].is_occupied());

        self.elements[slot.0].next
    }

    //  Returns the element preceeding `slot`, if any.
    #[cfg(test)]
    pub fn prev(&self, slot: Slot) -> Option<Slot> {
        debug_assert!(self.elements[slot.0].is_occupied());

        self.elements[slot.0].prev
    }

    //  Returns a handle to the element in `slot`.
    pub fn handle(&self, slot: Slot) -> Handle {
        Handle { sequence: self.id, slot, generation: self.elements[slot.0].generation() }
    }

    //  Returns the slot designated by `handle`, if it was issued by this very
    //  sequence and its element is still live.
    pub fn resolve(&self, handle: Handle) -> Option<Slot> {
        if handle.sequence != self.id {
            return None;
        }

        let element = self.elements.get(handle.slot.0)?;

        if element.is_current(handle.generation) {
            Some(handle.slot)
        } else {
            None
        }
    }

    //  Appends `key` at the end of the sequence.
    pub fn push_back(&mut self, key: Key) -> Slot {
        let slot = self.allocate(key);
        self.link_after(self.tail, slot);
        slot
    }

    //  Inserts `key` immediately after `anchor`.
    pub fn insert_after(&mut self, anchor: Slot, key: Key) -> Slot {
        debug_assert!(self.elements[anchor.0].is_occupied());

        let slot = self.allocate(key);
        self.link_after(Some(anchor), slot);
        slot
    }

    //  Moves the element in `slot` immediately after `anchor`.
    //
    //  The element keeps its slot, and its generation.
    pub fn move_after(&mut self, anchor: Slot, slot: Slot) {
        debug_assert!(self.elements[anchor.0].is_occupied());
        debug_assert!(self.elements[slot.0].is_occupied());

        if anchor == slot || self.elements[anchor.0].next == Some(slot) {
            return;
        }

        self.unlink(slot);
        self.link_after(Some(anchor), slot);
    }

    //  Removes the element in `slot`, returning its key.
    pub fn remove(&mut self, slot: Slot) -> Key {
        self.unlink(slot);
        self.release(slot)
    }

    //  Removes the first element, returning its key.
    pub fn pop_front(&mut self) -> Option<Key> {
        let slot = self.head?;
        Some(self.remove(slot))
    }

    //  Removes all elements.
    //
    //  Slots are retained, and vacated so that handles to the removed elements
    //  no longer resolve.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}

        debug_assert!(self.head.is_none() && self.tail.is_none());
    }

    //  Returns an iterator over the slots, in sequence order.
    pub fn iter(&self) -> Slots<'_> {
        Slots { sequence: self, cursor: self.head, remaining: self.len }
    }

    //  Stores `key` in a vacant slot, unlinked.
    fn allocate(&mut self, key: Key) -> Slot {
        if let Some(slot) = self.free {
            let element = &mut self.elements[slot.0];
            self.free = element.next;
            element.occupy(key);
            slot
        } else {
            self.elements.push(Element::new(key));
            Slot(self.elements.len() - 1)
        }
    }

    //  Vacates an unlinked `slot`, pushing it onto the free list.
    fn release(&mut self, slot: Slot) -> Key {
        let element = &mut self.elements[slot.0];
        let key = element.vacate();

        element.next = self.free;
        self.free = Some(slot);

        key
    }

    //  Links an unlinked `slot` after `anchor`, or at the front if none.
    fn link_after(&mut self, anchor: Option<Slot>, slot: Slot) {
        let next = match anchor {
            Some(anchor) => self.elements[anchor.0].next,
            None => self.head,
        };

        {
            let element = &mut self.elements[slot.0];
            element.prev = anchor;
            element.next = next;
        }

        match anchor {
            Some(anchor) => self.elements[anchor.0].next = Some(slot),
            None => self.head = Some(slot),
        }

        match next {
            Some(next) => self.elements[next.0].prev = Some(slot),
            None => self.tail = Some(slot),
        }

        self.len += 1;
    }

    //  Unlinks `slot` from its neighbours.
    fn unlink(&mut self, slot: Slot) {
        let (prev, next) = {
            let element = &mut self.elements[slot.0];
            let links = (element.prev, element.next);
            element.prev = None;
            element.next = None;
            links
        };

        match prev {
            Some(prev) => self.elements[prev.0].next = next,
            None => self.head = next,
        }

        match next {
            Some(next) => self.elements[next.0].prev = prev,
            None => self.tail = prev,
        }

        self.len -= 1;
    }
}

impl Default for Sequence {
    fn default() -> Self { Self::new() }
}

//  Iterator over the slots of a Sequence, in order.
pub struct Slots<'a> {
    sequence: &'a Sequence,
    cursor: Option<Slot>,
    remaining: usize,
}

impl<'a> Slots<'a> {
    //  Returns the underlying sequence.
    pub fn sequence(&self) -> &'a Sequence { self.sequence }
}

impl<'a> Clone for Slots<'a> {
    fn clone(&self) -> Self {
        Slots { sequence: self.sequence, cursor: self.cursor, remaining: self.remaining }
    }
}

impl<'a> iter::Iterator for Slots<'a> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let slot = self.cursor?;

        self.cursor = self.sequence.next(slot);
        self.remaining -= 1;

        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> iter::ExactSizeIterator for Slots<'a> {}

impl<'a> iter::FusedIterator for Slots<'a> {}
