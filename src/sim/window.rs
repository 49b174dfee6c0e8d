//! Fixed-size sliding window of procedurally generated elements
//!
//! Elements are kept in scroll order. Recycling drops the head once it has
//! scrolled far enough past the left edge and appends a fresh tail, so the
//! length never changes after the window is filled.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Anything with a horizontal world position
pub trait Positioned {
    fn x(&self) -> f32;
}

/// FIFO window over a pre-sized ring buffer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Window<T> {
    items: VecDeque<T>,
}

impl<T: Positioned> Window<T> {
    /// Fill a window with `len` elements, each generated from the current tail
    pub fn filled(len: usize, next: impl FnMut(Option<&T>) -> T) -> Self {
        let mut window = Self {
            items: VecDeque::with_capacity(len),
        };
        window.extend_to(len, next);
        window
    }

    /// Append generated elements until the window holds `len` of them.
    ///
    /// Never shrinks. Returns how many elements were added.
    pub fn extend_to(&mut self, len: usize, mut next: impl FnMut(Option<&T>) -> T) -> usize {
        let added = len.saturating_sub(self.items.len());
        for _ in 0..added {
            let item = next(self.items.back());
            self.items.push_back(item);
        }
        added
    }

    /// Replace the head if it fell more than `margin` behind `left_edge`.
    ///
    /// At most one element is replaced per call. Returns true if the window
    /// was recycled.
    pub fn recycle(
        &mut self,
        left_edge: f32,
        margin: f32,
        next: impl FnOnce(Option<&T>) -> T,
    ) -> bool {
        let Some(head) = self.items.front() else {
            return false;
        };
        if head.x() - left_edge >= -margin {
            return false;
        }

        // Generate from the tail before popping so a single-element window
        // still continues the sequence instead of restarting it
        let item = next(self.items.back());
        self.items.pop_front();
        self.items.push_back(item);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Smallest x in the window (the head, since elements are in scroll order)
    pub fn min_x(&self) -> Option<f32> {
        self.front().map(|item| item.x())
    }
}

impl<'a, T: Positioned> IntoIterator for &'a Window<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
