//! Internal element of the sequence.

use super::key::Key;

//  The generation of a slot.
//
//  Bumped whenever the element occupying the slot is erased, so that handles
//  to the erased element no longer resolve once the slot is reused.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Generation(pub u32);

//  The index of a slot within the arena of elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Slot(pub usize);

//  The identity of a sequence.
//
//  Unique to each sequence created, copies included, so that a handle cannot
//  resolve within any sequence but the one which issued it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SequenceId(pub usize);

//  A non-owning reference to an element: its slot, at a given generation,
//  within a given sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Handle {
    pub sequence: SequenceId,
    pub slot: Slot,
    pub generation: Generation,
}

//  The element stored internally.
//
//  While occupied, `prev` and `next` link the element within the sequence;
//  while vacant, `next` links the slot within the free list.
pub struct Element {
    key: Key,
    generation: Generation,
    occupied: bool,
    pub prev: Option<Slot>,
    pub next: Option<Slot>,
}

impl Element {
    //  Creates a new, occupied, unlinked, instance.
    pub fn new(key: Key) -> Self {
        Element { key, generation: Generation(0), occupied: true, prev: None, next: None }
    }

    //  Checks whether the element is occupied, or not.
    pub fn is_occupied(&self) -> bool { self.occupied }

    //  Returns the current generation.
    pub fn generation(&self) -> Generation { self.generation }

    //  Returns the key.
    pub fn key(&self) -> Key {
        debug_assert!(self.occupied);
        self.key
    }

    //  Checks whether `generation` designates the current occupant.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.occupied && self.generation == generation
    }

    //  Stores a key in a vacant element, leaving it unlinked.
    pub fn occupy(&mut self, key: Key) {
        debug_assert!(!self.occupied);

        self.key = key;
        self.occupied = true;
        self.prev = None;
        self.next = None;
    }

    //  Vacates the element, returning its key.
    //
    //  The links are left untouched; they are the caller's responsibility.
    pub fn vacate(&mut self) -> Key {
        debug_assert!(self.occupied);

        self.occupied = false;
        self.generation = Generation(self.generation.0.wrapping_add(1));
        self.key
    }
}
