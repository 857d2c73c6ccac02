// domain ordering utilities
use std::cmp::Ordering;

use crate::model::{DirectoryNode, FileEntry};

/// Anything listed by name in the outline.
pub trait Named {
    fn name_bytes(&self) -> &[u8];
}

impl Named for FileEntry {
    fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }
}

impl Named for DirectoryNode {
    fn name_bytes(&self) -> &[u8] {
        self.name().as_bytes()
    }
}

/// Byte-wise ascending comparison of raw names.
#[inline]
pub fn by_name<T: Named + ?Sized>(a: &T, b: &T) -> Ordering {
    a.name_bytes().cmp(b.name_bytes())
}

/// Borrowed view of `items` in display order; the slice itself is untouched.
pub fn sorted_by_name<T: Named>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| by_name(*a, *b));
    sorted
}
