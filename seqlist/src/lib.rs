#![no_std]

//! `SeqList`: a growable, indexable sequence with explicit capacity control.
//!
//! `SeqList<T>` keeps its elements in one contiguous buffer of slots. The
//! first `len()` slots hold elements in order, the remaining slots up to
//! `capacity()` are empty. Capacity only grows on its own; it shrinks only
//! through [`SeqList::shrink_to_fit`].
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `append()`, `push()`: amortized O(1)
//! - `get()`, `set()`, indexing: O(1)
//! - `insert_at()`, `remove_at()`: O(n) - the tail is shifted by one slot
//! - `insert_all_at()`: O(n + m) - the tail is shifted once by the whole block
//! - `remove_matching()`, `retain_matching()`: O(n) - one compaction pass
//! - `index_of()`, `last_index_of()`, `contains()`: O(n)
//! - `sort()`, `sort_by()`: O(n log n) expected, O(n²) worst case, not stable
//!
//! ## Growth
//! When an operation needs more slots than are allocated, the buffer is
//! reallocated to `max(capacity + capacity / 2 + 1, required)` slots, so a
//! run of appends grows geometrically and a bulk insertion grows once.
//!
//! ## `no_std` Compatibility
//!
//! This crate only needs `core` and `alloc`. Enable the optional `std`
//! feature to forward `std` support to the error and logging dependencies:
//! ```toml
//! [dependencies]
//! seqlist = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Vector Interface
//!
//! ```
//! # use seqlist::{SeqList, SeqListError};
//! let mut list = SeqList::new();
//!
//! list.append(10);
//! list.append(30);
//! list.insert_at(1, 20).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Ok(&20));
//! assert_eq!(list.set(2, 35), Ok(30));
//! assert_eq!(list.remove_at(0), Ok(10));
//! assert_eq!(list.to_vec(), vec![20, 35]);
//!
//! // Misuse is reported, not silently ignored
//! assert_eq!(
//!     list.get(5),
//!     Err(SeqListError::OutOfRange { index: 5, length: 2 })
//! );
//! assert!(SeqList::<i32>::with_capacity(0).is_err());
//! ```
//!
//! # Bulk Operations
//!
//! ```
//! # use seqlist::SeqList;
//! let mut list: SeqList<i32> = (0..10).collect();
//!
//! list.insert_all_at(2, vec![100, 101]).unwrap();
//! assert_eq!(list.to_vec(), vec![0, 1, 100, 101, 2, 3, 4, 5, 6, 7, 8, 9]);
//!
//! // Removal keeps the survivors in order
//! let removed = list.remove_matching(|v| v % 2 == 1);
//! assert_eq!(removed, 6);
//! assert_eq!(list.to_vec(), vec![0, 100, 2, 4, 6, 8]);
//!
//! list.retain_all(&[0, 2, 8]);
//! assert_eq!(list.to_string(), "[0, 2, 8]");
//! ```
//!
//! # Search
//!
//! ```
//! # use seqlist::SeqList;
//! let list: SeqList<i32> = (-10..=10).map(i32::abs).collect();
//!
//! assert_eq!(list.index_of(&5), Some(5));
//! assert_eq!(list.last_index_of(&5), Some(15));
//! assert_eq!(list.index_of(&12), None);
//! assert!(list.contains_all(&[0, 1, 10]));
//! ```
//!
//! # Sorting
//!
//! ```
//! # use seqlist::{SeqList, SeqListError};
//! let mut words: SeqList<&str> = ["pear", "fig", "apple"].into_iter().collect();
//! words.sort();
//! assert_eq!(words.to_vec(), vec!["apple", "fig", "pear"]);
//!
//! words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
//! assert_eq!(words.to_vec(), vec!["apple", "pear", "fig"]);
//!
//! let mut floats: SeqList<f64> = vec![2.5, f64::NAN, 1.0].into();
//! assert_eq!(floats.try_sort(), Err(SeqListError::IncomparableElements));
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use seqlist::SeqList;
//! let mut list: SeqList<i32> = (1..=3).collect();
//!
//! for value in &mut list {
//!     *value *= 10;
//! }
//!
//! let forward: Vec<_> = list.iter().copied().collect();
//! let reverse: Vec<_> = list.iter_rev().copied().collect();
//! assert_eq!(forward, vec![10, 20, 30]);
//! assert_eq!(reverse, vec![30, 20, 10]);
//! ```

extern crate alloc;

mod core;
mod cursor;
mod error;
mod fmt;
mod iter;
mod sort;

// Re-export public types and traits
pub use crate::core::{SeqList, DEFAULT_CAPACITY};
pub use crate::cursor::CursorMut;
pub use crate::error::{Result, SeqListError};
pub use crate::iter::{SeqListIntoIter, SeqListIter, SeqListIterMut, SeqListRevIter};
