use core::fmt;

use crate::core::SeqList;

/// Renders `[e1, e2, ..., en]`. An empty slot inside the live range is
/// rendered as `null`.
impl<T: fmt::Display> fmt::Display for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.live().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(value) => fmt::Display::fmt(value, f)?,
                None => f.write_str("null")?,
            }
        }
        f.write_str("]")
    }
}

struct Elements<'a, T>(&'a [Option<T>]);

impl<T: fmt::Debug> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().flatten()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqList")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("elements", &Elements(self.live()))
            .finish()
    }
}
