use alloc::vec;

use crate::core::SeqList;

/// Iterator over the elements of a `SeqList`
///
/// Stops at the end of the live range, or earlier at the first empty slot.
pub struct SeqListIter<'a, T> {
    slots: &'a [Option<T>],
    current: usize,
}

impl<'a, T> SeqListIter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self { slots, current: 0 }
    }

    /// Returns `true` while the next slot holds an element.
    #[must_use]
    pub fn has_next(&self) -> bool {
        matches!(self.slots.get(self.current), Some(Some(_)))
    }
}

impl<T> Clone for SeqListIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for SeqListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.slots.get(self.current)? {
            Some(item) => {
                self.current += 1;
                Some(item)
            }
            None => {
                self.current = self.slots.len();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for SeqListIter<'_, T> {}

impl<'a, T> IntoIterator for &'a SeqList<T> {
    type Item = &'a T;
    type IntoIter = SeqListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reverse iterator over the elements of a `SeqList`
pub struct SeqListRevIter<'a, T> {
    slots: &'a [Option<T>],
    current: usize,
}

impl<'a, T> SeqListRevIter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self {
            slots,
            current: slots.len(),
        }
    }
}

impl<T> Clone for SeqListRevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for SeqListRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == 0 {
            return None;
        }
        match self.slots.get(self.current - 1)? {
            Some(item) => {
                self.current -= 1;
                Some(item)
            }
            None => {
                self.current = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.current, Some(self.current))
    }
}

impl<T> ExactSizeIterator for SeqListRevIter<'_, T> {}

/// Iterator over mutable references to the elements of a `SeqList`
pub struct SeqListIterMut<'a, T> {
    slots: core::slice::IterMut<'a, Option<T>>,
}

impl<'a, T> SeqListIterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Option<T>]) -> Self {
        Self {
            slots: slots.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for SeqListIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.slots.next()? {
            Some(item) => Some(item),
            None => {
                self.slots = Default::default();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for SeqListIterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a mut SeqList<T> {
    type Item = &'a mut T;
    type IntoIter = SeqListIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Owning iterator over the elements of a `SeqList`
pub struct SeqListIntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for SeqListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.slots.next()? {
            Some(item) => Some(item),
            None => {
                self.slots = Default::default();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for SeqListIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.slots.next_back()? {
            Some(item) => Some(item),
            None => {
                self.slots = Default::default();
                None
            }
        }
    }
}

impl<T> ExactSizeIterator for SeqListIntoIter<T> {}

impl<T> IntoIterator for SeqList<T> {
    type Item = T;
    type IntoIter = SeqListIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SeqListIntoIter {
            slots: self.into_slots().into_iter(),
        }
    }
}

impl<T> FromIterator<T> for SeqList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(source: I) -> Self {
        let iter = source.into_iter();
        let (lower, _) = iter.size_hint();
        let mut list = Self::for_source(lower);
        list.append_all(iter);
        list
    }
}

impl<T> Extend<T> for SeqList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, source: I) {
        self.append_all(source);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SeqList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, source: I) {
        self.append_all(source.into_iter().copied());
    }
}
