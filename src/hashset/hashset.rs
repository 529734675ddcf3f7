//! The HashSet

use super::root::{fmt, hint, iter, mem};

use super::{IntoIter, Iter, Key, Position};

use super::failure::{Failure, Result};
use super::hashcore::buckets::Buckets;
use super::hashcore::capacity::{BucketIndex, Size};
use super::hashcore::element::Slot;

//
//  Public Interface
//

/// `HashSet`
///
/// A set of integer keys, hashed by identity, whose elements are all stored in
/// a single sequence in which the elements of each bucket are contiguous.
pub struct HashSet {
    buckets: Buckets,
    //  Always equal to `len() / bucket_count()`.
    load_factor: f32,
    max_load_factor: f32,
}

impl HashSet {
    /// Creates a new, empty, instance with a maximum load factor of 1.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let set = HashSet::new();
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(8, set.bucket_count());
    /// assert_eq!(0.0, set.load_factor());
    /// assert_eq!(1.0, set.max_load_factor());
    /// ```
    pub fn new() -> Self {
        Self { buckets: Buckets::new(), load_factor: 0.0, max_load_factor: DEFAULT_MAX_LOAD_FACTOR }
    }

    /// Creates a new, empty, instance with the given maximum load factor.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidLoadFactor` if `max_load_factor` is not a finite,
    /// strictly positive, number.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::failure::Failure;
    /// #   use runset::hashset::HashSet;
    /// let set = HashSet::try_with_max_load_factor(0.75).unwrap();
    /// assert_eq!(0.75, set.max_load_factor());
    ///
    /// assert!(HashSet::try_with_max_load_factor(0.0).is_err());
    /// assert_eq!(
    ///     Some(Failure::InvalidLoadFactor),
    ///     HashSet::try_with_max_load_factor(f32::NAN).err()
    /// );
    /// ```
    pub fn try_with_max_load_factor(max_load_factor: f32) -> Result<Self> {
        check_load_factor(max_load_factor)?;

        Ok(Self { max_load_factor, ..Self::new() })
    }

    /// Creates a new, empty, instance with the given maximum load factor.
    ///
    /// Calling this method is equivalent to calling `try_with_max_load_factor`
    /// and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `max_load_factor` is not a finite, strictly positive, number.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let set = HashSet::with_max_load_factor(0.5);
    /// assert_eq!(0.5, set.max_load_factor());
    /// ```
    pub fn with_max_load_factor(max_load_factor: f32) -> Self {
        Self::try_with_max_load_factor(max_load_factor).unwrap_or_else(|failure| {
            panic_from_failure(failure);
            //  Safety:
            //  -   As the name of the above function implies...
            unsafe { hint::unreachable_unchecked() }
        })
    }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// assert_eq!(0, set.len());
    ///
    /// set.insert(1);
    /// set.insert(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.buckets.len() }

    /// Returns the number of buckets.
    ///
    /// The number of buckets follows a fixed schedule, starting at 8, and never
    /// decreases.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// assert_eq!(8, set.bucket_count());
    ///
    /// set.extend(0..9);
    /// assert_eq!(16, set.bucket_count());
    /// ```
    pub fn bucket_count(&self) -> usize { self.buckets.number_buckets().0 }

    /// Returns the bucket of `key`, under the current number of buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let set = HashSet::new();
    ///
    /// assert_eq!(3, set.bucket(11));
    /// assert_eq!(3, set.bucket(-3));
    /// ```
    pub fn bucket(&self, key: Key) -> usize { self.buckets.bucket_of(key).0 }

    /// Returns the number of elements in `bucket`.
    ///
    /// #   Errors
    ///
    /// Returns `BucketOutOfBounds` if `bucket` is greater than or equal to
    /// `bucket_count`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::failure::Failure;
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.extend([3, 11, 4]);
    ///
    /// assert_eq!(Ok(2), set.try_bucket_size(3));
    /// assert_eq!(Ok(0), set.try_bucket_size(5));
    /// assert_eq!(Err(Failure::BucketOutOfBounds), set.try_bucket_size(8));
    /// ```
    pub fn try_bucket_size(&self, bucket: usize) -> Result<usize> {
        if bucket >= self.bucket_count() {
            return Err(Failure::BucketOutOfBounds);
        }

        Ok(self.buckets.run(BucketIndex(bucket)).count())
    }

    /// Returns the number of elements in `bucket`.
    ///
    /// Calling this method is equivalent to calling `try_bucket_size` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `bucket` is greater than or equal to `bucket_count`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.extend([3, 11, 4]);
    ///
    /// assert_eq!(2, set.bucket_size(3));
    /// assert_eq!(1, set.bucket_size(4));
    /// ```
    pub fn bucket_size(&self, bucket: usize) -> usize {
        match self.try_bucket_size(bucket) {
            Ok(size) => size,
            Err(failure) => {
                panic_from_failure(failure);
                //  Safety:
                //  -   As the name of the above function implies...
                unsafe { hint::unreachable_unchecked() }
            },
        }
    }

    /// Returns the load factor: the number of elements per bucket.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.extend([1, 2]);
    ///
    /// assert_eq!(0.25, set.load_factor());
    /// ```
    pub fn load_factor(&self) -> f32 { self.load_factor }

    /// Returns the maximum load factor.
    ///
    /// An insertion first grows the number of buckets if the load factor is
    /// greater than or equal to the maximum load factor.
    pub fn max_load_factor(&self) -> f32 { self.max_load_factor }

    /// Sets the maximum load factor.
    ///
    /// If the current load factor is greater than or equal to the new maximum
    /// load factor, the number of buckets grows until it no longer is.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidLoadFactor` if `max_load_factor` is not a finite,
    /// strictly positive, number, and `OutOfBuckets` if no number of buckets is
    /// large enough. In either case, the instance is left unmodified.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::failure::Failure;
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.extend(0..8);
    /// assert_eq!(8, set.bucket_count());
    ///
    /// assert_eq!(Ok(()), set.try_set_max_load_factor(0.25));
    /// assert_eq!(64, set.bucket_count());
    /// assert_eq!(0.125, set.load_factor());
    ///
    /// assert_eq!(Err(Failure::OutOfBuckets), set.try_set_max_load_factor(1e-9));
    /// assert_eq!(0.25, set.max_load_factor());
    /// assert_eq!(64, set.bucket_count());
    /// ```
    pub fn try_set_max_load_factor(&mut self, max_load_factor: f32) -> Result<()> {
        check_load_factor(max_load_factor)?;

        let current = self.buckets.capacity();
        let target = current.fitting(Size(self.len()), max_load_factor)
            .inspect_err(|failure| {
                tracing::warn!(
                    max_load_factor,
                    elements = self.len(),
                    "cannot satisfy maximum load factor: {}", failure
                );
            })?;

        self.max_load_factor = max_load_factor;

        if target != current {
            self.buckets.rehash(target);
            self.update_load_factor();
        }

        Ok(())
    }

    /// Sets the maximum load factor.
    ///
    /// Calling this method is equivalent to calling `try_set_max_load_factor`
    /// and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `max_load_factor` is not a finite, strictly positive, number,
    /// or if no number of buckets is large enough.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.extend(0..4);
    ///
    /// set.set_max_load_factor(0.5);
    /// assert_eq!(16, set.bucket_count());
    /// ```
    pub fn set_max_load_factor(&mut self, max_load_factor: f32) {
        self.try_set_max_load_factor(max_load_factor).unwrap_or_else(panic_from_failure);
    }

    /// Returns `true` if the set contains the key.
    ///
    /// Only the run of the bucket of `key` is scanned.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.insert(1);
    ///
    /// assert!(set.contains(1));
    /// assert!(!set.contains(9));
    /// ```
    pub fn contains(&self, key: Key) -> bool { self.buckets.find(key).is_some() }

    /// Returns the position of `key`, or the end position if absent.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.extend([3, 11]);
    ///
    /// assert_eq!(Some(11), set.get(set.find(11)));
    /// assert_eq!(set.end(), set.find(19));
    /// ```
    pub fn find(&self, key: Key) -> Position { self.position(self.buckets.find(key)) }

    /// Returns the key at `position`, if any.
    ///
    /// Returns `None` for the end position, and for the position of an erased
    /// element.
    pub fn get(&self, position: Position) -> Option<Key> {
        let slot = self.resolve(position)?;
        Some(self.buckets.sequence().key(slot))
    }

    /// Returns the position of the first element, or the end position if
    /// empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// assert_eq!(set.end(), set.begin());
    ///
    /// set.extend([3, 11, 4]);
    ///
    /// let mut keys = Vec::new();
    /// let mut position = set.begin();
    ///
    /// while position != set.end() {
    ///     keys.push(set.get(position).unwrap());
    ///     position = set.advance(position);
    /// }
    ///
    /// assert_eq!(vec![3, 11, 4], keys);
    /// ```
    pub fn begin(&self) -> Position { self.position(self.buckets.sequence().front()) }

    /// Returns the end position.
    pub fn end(&self) -> Position { Position::end() }

    /// Returns the position following `position`.
    ///
    /// Returns the end position if `position` is the last element, the end
    /// position, or the position of an erased element.
    pub fn advance(&self, position: Position) -> Position {
        let next = self.resolve(position)
            .and_then(|slot| self.buckets.sequence().next(slot));

        self.position(next)
    }

    /// Returns an iterator over the elements, in storage order.
    ///
    /// Elements of the same bucket are yielded consecutively.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.extend([3, 1, 11]);
    ///
    /// let keys: Vec<_> = set.iter().collect();
    /// assert_eq!(vec![3, 11, 1], keys);
    /// ```
    pub fn iter(&self) -> Iter<'_> { Iter::new(self.buckets.sequence()) }

    /// Inserts a key into the set.
    ///
    /// If the load factor is greater than or equal to the maximum load factor,
    /// the number of buckets first grows to the next entry of the schedule.
    ///
    /// Returns whether the key was inserted, that is whether it was absent.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfBuckets` if growth is required but the schedule is
    /// exhausted, in which case the instance is left unmodified.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    ///
    /// assert_eq!(Ok(true), set.try_insert(3));
    /// assert_eq!(Ok(false), set.try_insert(3));
    ///
    /// assert!(set.contains(3));
    /// ```
    pub fn try_insert(&mut self, key: Key) -> Result<bool> {
        if self.load_factor >= self.max_load_factor {
            self.grow(key)?;
        }

        let inserted = self.buckets.insert(key);

        if inserted {
            self.update_load_factor();
        }

        Ok(inserted)
    }

    /// Inserts a key into the set.
    ///
    /// Calling this method is equivalent to calling `try_insert` and panicking
    /// on error.
    ///
    /// #   Panics
    ///
    /// Panics if growth is required but the schedule is exhausted.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    ///
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3));
    /// assert_eq!(1, set.len());
    /// ```
    pub fn insert(&mut self, key: Key) -> bool {
        match self.try_insert(key) {
            Ok(result) => result,
            Err(error) => {
                panic_from_failure(error);
                //  Safety:
                //  -   As the name of the above function implies...
                unsafe { hint::unreachable_unchecked() }
            },
        }
    }

    /// Erases a key from the set.
    ///
    /// Returns whether the key was erased, that is whether it was present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.extend([3, 11]);
    ///
    /// assert!(set.erase(3));
    /// assert!(!set.erase(3));
    ///
    /// assert_eq!(1, set.len());
    /// assert_eq!(1, set.bucket_size(3));
    /// ```
    pub fn erase(&mut self, key: Key) -> bool {
        match self.buckets.find(key) {
            Some(slot) => {
                self.remove(slot);
                true
            },
            None => false,
        }
    }

    /// Erases the element at `position`.
    ///
    /// Returns the position of the element which followed it, or the end
    /// position if it was the last, allowing to erase while traversing.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidPosition` if `position` is the end position, or the
    /// position of an already erased element.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::failure::Failure;
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.extend(0..6);
    ///
    /// let mut position = set.begin();
    ///
    /// while !position.is_end() {
    ///     if set.get(position).unwrap() % 2 == 0 {
    ///         position = set.try_erase_at(position).unwrap();
    ///     } else {
    ///         position = set.advance(position);
    ///     }
    /// }
    ///
    /// assert_eq!(vec![1, 3, 5], set.iter().collect::<Vec<_>>());
    /// assert_eq!(Err(Failure::InvalidPosition), set.try_erase_at(set.end()));
    /// ```
    pub fn try_erase_at(&mut self, position: Position) -> Result<Position> {
        let slot = self.resolve(position).ok_or(Failure::InvalidPosition)?;

        //  Erasure leaves the handles to other elements valid.
        let next = self.position(self.buckets.sequence().next(slot));

        self.remove(slot);

        Ok(next)
    }

    /// Erases the element at `position`.
    ///
    /// Calling this method is equivalent to calling `try_erase_at` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `position` is the end position, or the position of an already
    /// erased element.
    pub fn erase_at(&mut self, position: Position) -> Position {
        match self.try_erase_at(position) {
            Ok(result) => result,
            Err(error) => {
                panic_from_failure(error);
                //  Safety:
                //  -   As the name of the above function implies...
                unsafe { hint::unreachable_unchecked() }
            },
        }
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains its number of buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use runset::hashset::HashSet;
    /// let mut set = HashSet::new();
    /// set.extend(0..9);
    ///
    /// set.clear();
    /// assert_eq!(0, set.len());
    /// assert_eq!(16, set.bucket_count());
    /// ```
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.update_load_factor();
    }

    //  Grows to the next capacity of the schedule.
    //
    //  The instance is left unmodified on failure.
    fn grow(&mut self, key: Key) -> Result<()> {
        let capacity = self.buckets.capacity().next().inspect_err(|failure| {
            tracing::warn!(
                key,
                bucket_count = self.bucket_count(),
                elements = self.len(),
                "cannot grow: {}", failure
            );
        })?;

        self.buckets.rehash(capacity);
        self.update_load_factor();

        Ok(())
    }

    //  Removes the element in `slot`.
    fn remove(&mut self, slot: Slot) {
        self.buckets.remove(slot);
        self.update_load_factor();
    }

    //  Recomputes the load factor.
    fn update_load_factor(&mut self) {
        self.load_factor = self.buckets.capacity().load(Size(self.len()));
    }

    //  Returns the slot of `position`, if it refers to a live element.
    fn resolve(&self, position: Position) -> Option<Slot> {
        self.buckets.sequence().resolve(position.0?)
    }

    //  Returns the position of `slot`, or the end position if none.
    fn position(&self, slot: Option<Slot>) -> Position {
        Position(slot.map(|slot| self.buckets.sequence().handle(slot)))
    }
}

/// A copy is independent of its source: its elements are stored anew, in the
/// same order, and its bucket table rebuilt from them.
///
/// #   Example
///
/// ```
/// #   use runset::hashset::HashSet;
/// let mut original = HashSet::new();
/// original.extend([1, 2, 3]);
///
/// let mut copy = original.clone();
/// copy.insert(4);
/// original.erase(1);
///
/// assert_eq!(vec![2, 3], original.iter().collect::<Vec<_>>());
/// assert_eq!(vec![1, 2, 3, 4], copy.iter().collect::<Vec<_>>());
/// ```
impl Clone for HashSet {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            load_factor: self.load_factor,
            max_load_factor: self.max_load_factor,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        //  Copy, then swap: `self` is only modified once the copy is complete.
        let mut copy = source.clone();
        mem::swap(self, &mut copy);
    }
}

impl Default for HashSet {
    fn default() -> Self { Self::new() }
}

impl fmt::Debug for HashSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HashSet {{ bucket_count: {}, length: {}, elements: [",
            self.bucket_count(), self.len())?;

        for (index, key) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ",")?;
            }

            write!(f, " {} @ {}", key, self.bucket(key))?;
        }

        write!(f, " ] }}")
    }
}

/// Two sets are equal if they contain the same keys, regardless of their order
/// or number of buckets.
///
/// #   Example
///
/// ```
/// #   use runset::hashset::HashSet;
/// let left: HashSet = [1, 2, 3].into_iter().collect();
/// let mut right: HashSet = [3, 2, 1].into_iter().collect();
///
/// assert_eq!(left, right);
///
/// right.erase(2);
/// assert_ne!(left, right);
/// ```
impl PartialEq for HashSet {
    fn eq(&self, other: &HashSet) -> bool {
        self.len() == other.len() && self.iter().all(|key| other.contains(key))
    }
}

impl Eq for HashSet {}

impl iter::Extend<Key> for HashSet {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = Key>
    {
        for key in collection {
            self.insert(key);
        }
    }
}

impl iter::FromIterator<Key> for HashSet {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = Key>
    {
        let mut result = HashSet::new();
        result.extend(collection);
        result
    }
}

impl<'a> iter::IntoIterator for &'a HashSet {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> { self.iter() }
}

impl iter::IntoIterator for HashSet {
    type Item = Key;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter { IntoIter::new(self.buckets.into_sequence()) }
}

//
//  Implementation Details
//

const DEFAULT_MAX_LOAD_FACTOR: f32 = 1.0;

fn check_load_factor(max_load_factor: f32) -> Result<()> {
    if max_load_factor.is_finite() && max_load_factor > 0.0 {
        Ok(())
    } else {
        Err(Failure::InvalidLoadFactor)
    }
}

#[cold]
#[inline(never)]
fn panic_from_failure(failure: Failure) {
    panic!("{}", failure);
}

//  mod tests
