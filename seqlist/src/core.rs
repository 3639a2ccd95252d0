use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::cursor::CursorMut;
use crate::error::{Result, SeqListError};
use crate::iter::{SeqListIter, SeqListIterMut, SeqListRevIter};

/// Number of slots allocated by [`SeqList::new`].
pub const DEFAULT_CAPACITY: usize = 256;

/// A growable, indexable sequence backed by a contiguous buffer of slots
///
/// Slots `[0, len)` hold live elements in positional order, slots
/// `[len, capacity)` hold the empty marker (`None`).
pub struct SeqList<T> {
    storage: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

fn occurs_in<'b, I, T>(other: I, value: &T) -> bool
where
    I: IntoIterator<Item = &'b T>,
    T: PartialEq + 'b,
{
    other.into_iter().any(|item| item == value)
}

/// Capacity to reallocate to when `required` slots do not fit in `capacity`.
///
/// Grows by half plus one, or straight to `required` when a bulk insertion
/// needs more than that.
pub(crate) fn grown_capacity(capacity: usize, required: usize) -> usize {
    let geometric = capacity.saturating_add(capacity / 2).saturating_add(1);
    let additional = required.saturating_sub(capacity);
    geometric.max(capacity.saturating_add(additional))
}

impl<T> SeqList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: empty_slots(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Creates an empty list with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::InvalidCapacity` if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SeqListError::InvalidCapacity { capacity });
        }
        Ok(Self {
            storage: empty_slots(capacity),
            len: 0,
        })
    }

    /// Empty list sized for a bulk copy of `source_len` elements.
    pub(crate) fn for_source(source_len: usize) -> Self {
        Self {
            storage: empty_slots(source_len.max(DEFAULT_CAPACITY)),
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, live or empty.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Live slots, `[0, len)`.
    pub(crate) fn live(&self) -> &[Option<T>] {
        &self.storage[..self.len]
    }

    pub(crate) fn live_mut(&mut self) -> &mut [Option<T>] {
        &mut self.storage[..self.len]
    }

    fn out_of_range(&self, index: usize) -> SeqListError {
        SeqListError::OutOfRange {
            index,
            length: self.len,
        }
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.len {
            Err(self.out_of_range(index))
        } else {
            Ok(())
        }
    }

    fn check_insert_position(&self, index: usize) -> Result<()> {
        if index > self.len {
            Err(self.out_of_range(index))
        } else {
            Ok(())
        }
    }

    /// Makes sure at least `required` slots are allocated.
    ///
    /// Live elements keep their positions; new slots are empty.
    pub fn ensure_capacity(&mut self, required: usize) {
        let capacity = self.capacity();
        if required > capacity {
            self.reallocate(grown_capacity(capacity, required));
        }
    }

    /// Drops every empty slot so that `capacity() == len()`.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() != self.len {
            self.reallocate(self.len);
        }
    }

    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        log::trace!(
            "SeqList reallocating: capacity {} -> {}, {} live elements",
            self.capacity(),
            new_capacity,
            self.len
        );

        let mut storage = empty_slots(new_capacity);
        for (dst, src) in storage.iter_mut().zip(self.storage[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.storage = storage;
    }

    /// Gets the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::OutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_bounds(index)?;
        self.storage[index]
            .as_ref()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::OutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_bounds(index)?;
        let length = self.len;
        self.storage[index]
            .as_mut()
            .ok_or(SeqListError::OutOfRange { index, length })
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::OutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index).ok())
    }

    /// Adds an element to the end of the list. Amortized O(1).
    pub fn append(&mut self, value: T) {
        self.ensure_capacity(self.len + 1);
        self.storage[self.len] = Some(value);
        self.len += 1;
    }

    /// Pushes an element onto the end of the list, same as [`SeqList::append`].
    pub fn push(&mut self, value: T) {
        self.append(value);
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.storage[self.len].take()
    }

    /// Inserts an element at `index`, shifting everything after it to the right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::OutOfRange` if `index > len()`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        self.check_insert_position(index)?;
        self.shift_in(index, value);
        Ok(())
    }

    /// Insertion without the position check; `index <= len` must hold.
    pub(crate) fn shift_in(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        self.ensure_capacity(self.len + 1);
        // slot `len` is empty, rotating moves it down to `index`
        self.storage[index..=self.len].rotate_right(1);
        self.storage[index] = Some(value);
        self.len += 1;
    }

    /// Adds every element of `source` to the end of the list.
    ///
    /// Capacity for the whole source is reserved before the first element is
    /// copied. A source whose size hint is not exact is buffered first so its
    /// length is known. Returns the number of elements added.
    pub fn append_all<I>(&mut self, source: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let iter = source.into_iter();
        match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => self.append_counted(lower, iter),
            _ => {
                let buffered: Vec<T> = iter.collect();
                self.append_counted(buffered.len(), buffered)
            }
        }
    }

    fn append_counted<I>(&mut self, count: usize, source: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.len;
        self.ensure_capacity(self.len.saturating_add(count));
        for value in source {
            self.append(value);
        }
        self.len - start
    }

    /// Inserts every element of `source` at `index`, in source order.
    ///
    /// Elements previously at `index..` follow the inserted block.
    /// Returns the number of elements inserted.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::OutOfRange` if `index > len()`. The list is
    /// not modified in that case.
    pub fn insert_all_at<I>(&mut self, index: usize, source: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insert_position(index)?;
        let added = self.append_all(source);
        self.storage[index..self.len].rotate_right(added);
        Ok(added)
    }

    /// Removes the element at `index`, shifting everything after it to the left.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::OutOfRange` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_bounds(index)?;
        let removed = self.storage[index]
            .take()
            .ok_or_else(|| self.out_of_range(index))?;
        // the vacated slot travels to the end of the live range
        self.storage[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` if there is no such element.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Removes every element for which `predicate` returns `true`.
    ///
    /// Survivors keep their relative order. Returns the number removed.
    pub fn remove_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.compact(|value| !predicate(value))
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Survivors keep their relative order. Returns the number removed.
    pub fn retain_matching<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.compact(predicate)
    }

    /// Removes every element that also occurs in `other`.
    ///
    /// `other` can be a slice, a `Vec` or another `SeqList` by reference.
    pub fn remove_all<'b, I>(&mut self, other: I) -> usize
    where
        I: IntoIterator<Item = &'b T> + Clone,
        T: PartialEq + 'b,
    {
        self.remove_matching(|value| occurs_in(other.clone(), value))
    }

    /// Removes every element that does not occur in `other`.
    pub fn retain_all<'b, I>(&mut self, other: I) -> usize
    where
        I: IntoIterator<Item = &'b T> + Clone,
        T: PartialEq + 'b,
    {
        self.retain_matching(|value| occurs_in(other.clone(), value))
    }

    /// Single forward pass: survivors are moved down over the gaps left by
    /// dropped elements, then the tail slots are left empty.
    fn compact<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut kept = 0;
        for read in 0..self.len {
            let Some(value) = self.storage[read].take() else {
                continue;
            };
            if keep(&value) {
                self.storage[kept] = Some(value);
                kept += 1;
            }
        }

        let removed = self.len - kept;
        self.len = kept;
        if removed > 0 {
            log::debug!("SeqList compaction removed {removed} elements, {kept} left");
        }
        removed
    }

    /// Removes all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.storage[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Position of the first element equal to `value`. O(n).
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.live()
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    /// Position of the last element equal to `value`. O(n).
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.live()
            .iter()
            .rposition(|slot| slot.as_ref() == Some(value))
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns `true` if every element of `source` is contained in the list.
    pub fn contains_all<'b, I>(&self, source: I) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        T: PartialEq + 'b,
    {
        source.into_iter().all(|value| self.contains(value))
    }

    /// Copies the live elements into a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the live elements into `target` if it is large enough.
    ///
    /// When `target` has room to spare, the slot right after the copied
    /// elements is set to `None`; the rest of `target` is left as is.
    /// Otherwise a new vector of exactly `len()` slots is returned.
    #[must_use]
    pub fn to_array_in(&self, mut target: Vec<Option<T>>) -> Vec<Option<T>>
    where
        T: Clone,
    {
        if target.len() < self.len {
            return self.live().to_vec();
        }
        target[..self.len].clone_from_slice(self.live());
        if let Some(slot) = target.get_mut(self.len) {
            *slot = None;
        }
        target
    }

    /// Copies the elements in `[from, to)` into a new list.
    ///
    /// Reversed bounds are swapped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::OutOfRange` if the upper bound exceeds `len()`.
    pub fn subsequence(&self, from: usize, to: usize) -> Result<Self>
    where
        T: Clone,
    {
        let (start, end) = if from > to { (to, from) } else { (from, to) };
        if end > self.len {
            return Err(self.out_of_range(end));
        }
        let mut list = Self::new();
        list.append_all(self.storage[start..end].iter().flatten().cloned());
        Ok(list)
    }

    /// Deep copy with the default growth policy.
    #[must_use]
    pub fn duplicate(&self) -> Self
    where
        T: Clone,
    {
        let mut list = Self::for_source(self.len);
        list.append_all(self.iter().cloned());
        list
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> SeqListIter<'_, T> {
        SeqListIter::new(self.live())
    }

    /// Returns a reverse iterator over the elements.
    #[must_use]
    pub fn iter_rev(&self) -> SeqListRevIter<'_, T> {
        SeqListRevIter::new(self.live())
    }

    /// Returns an iterator that allows modifying each element in place.
    pub fn iter_mut(&mut self) -> SeqListIterMut<'_, T> {
        SeqListIterMut::new(self.live_mut())
    }

    /// Returns a cursor resting on the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Returns a cursor resting on the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::OutOfRange` if `index > len()`.
    pub fn cursor_mut_at(&mut self, index: usize) -> Result<CursorMut<'_, T>> {
        self.check_insert_position(index)?;
        Ok(CursorMut::new(self, index))
    }

    pub(crate) fn into_slots(self) -> Vec<Option<T>> {
        let mut slots = Vec::from(self.storage);
        slots.truncate(self.len);
        slots
    }
}

impl<T> Default for SeqList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SeqList<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T: PartialEq> PartialEq for SeqList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl<T: Eq> Eq for SeqList<T> {}

impl<T> Index<usize> for SeqList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for SeqList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> From<Vec<T>> for SeqList<T> {
    fn from(source: Vec<T>) -> Self {
        let mut list = Self::for_source(source.len());
        list.append_all(source);
        list
    }
}

impl<T: Clone> From<&[T]> for SeqList<T> {
    fn from(source: &[T]) -> Self {
        let mut list = Self::for_source(source.len());
        list.append_all(source.iter().cloned());
        list
    }
}
