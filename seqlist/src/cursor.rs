use crate::core::SeqList;
use crate::error::Result;

/// A bidirectional cursor over a `SeqList` that can edit the list in place
///
/// The cursor rests on a position. `next()` and `previous()` move it by one
/// and return the element they land on; `set()`, `remove()` and `add()`
/// work relative to the resting position. Every edit goes through the
/// list's own insertion and removal, so slot invariants always hold.
///
/// ```
/// # use seqlist::SeqList;
/// let mut list: SeqList<i32> = (0..5).collect();
/// let mut cursor = list.cursor_mut_at(2).unwrap();
///
/// assert_eq!(cursor.current(), Some(&2));
/// assert_eq!(cursor.next(), Some(&3));
/// cursor.add(30);
/// assert_eq!(cursor.next(), Some(&30));
/// assert_eq!(cursor.remove(), Ok(30));
/// assert_eq!(cursor.current(), Some(&4));
///
/// assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
/// ```
pub struct CursorMut<'a, T> {
    list: &'a mut SeqList<T>,
    position: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut SeqList<T>, position: usize) -> Self {
        Self { list, position }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position + 1 < self.list.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.position > 0 && self.position <= self.list.len()
    }

    /// Moves one position forward and returns the element there.
    ///
    /// Returns `None`, without moving, when already on the last element.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        self.position += 1;
        self.list.get(self.position).ok()
    }

    /// Moves one position back and returns the element there.
    ///
    /// Returns `None`, without moving, when already on the first element.
    pub fn previous(&mut self) -> Option<&T> {
        if !self.has_previous() {
            return None;
        }
        self.position -= 1;
        self.list.get(self.position).ok()
    }

    #[must_use]
    pub fn next_index(&self) -> usize {
        self.position + 1
    }

    /// `None` when the cursor rests on the first position.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.list.get(self.position).ok()
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.list.get_mut(self.position).ok()
    }

    /// Replaces the current element and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::OutOfRange` if the cursor rests past the end.
    pub fn set(&mut self, value: T) -> Result<T> {
        self.list.set(self.position, value)
    }

    /// Removes the current element, shifting the rest of the list left.
    ///
    /// The cursor stays where it is and so rests on the removed element's
    /// successor afterwards.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::OutOfRange` if the cursor rests past the end.
    pub fn remove(&mut self) -> Result<T> {
        self.list.remove_at(self.position)
    }

    /// Inserts `value` right after the current element.
    ///
    /// Past the end (an empty list, or after removing the last element) the
    /// value is inserted at the cursor's own position instead, and the cursor
    /// then rests on it.
    pub fn add(&mut self, value: T) {
        let index = (self.position + 1).min(self.list.len());
        self.list.shift_in(index, value);
    }
}
