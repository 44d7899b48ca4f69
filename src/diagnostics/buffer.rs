// SPDX-License-Identifier: MPL-2.0
//! Circular buffer for diagnostic event storage.
//!
//! A memory-bounded ring buffer that evicts the oldest entries when
//! capacity is reached.

use std::collections::VecDeque;

/// Valid bounds for the event buffer capacity.
pub mod capacity_bounds {
    /// Smallest allowed capacity.
    pub const MIN: usize = 16;
    /// Largest allowed capacity.
    pub const MAX: usize = 10_000;
    /// Capacity used when none is configured.
    pub const DEFAULT: usize = 512;
}

/// Validated buffer capacity, clamped to [`capacity_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping out-of-range values.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(capacity_bounds::MIN, capacity_bounds::MAX))
    }

    /// The clamped capacity value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(capacity_bounds::DEFAULT)
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer with the given validated capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Iterates over elements oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum number of elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all elements; capacity is unchanged.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_clamps_to_valid_range() {
        assert_eq!(BufferCapacity::new(0).value(), capacity_bounds::MIN);
        assert_eq!(BufferCapacity::new(1_000_000).value(), capacity_bounds::MAX);
        assert_eq!(BufferCapacity::new(100).value(), 100);
    }

    #[test]
    fn default_capacity_matches_bounds() {
        assert_eq!(BufferCapacity::default().value(), capacity_bounds::DEFAULT);
    }

    #[test]
    fn push_and_retrieve_in_order() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::new(16));

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::new(16));

        for value in 0..20 {
            buffer.push(value);
        }

        assert_eq!(buffer.len(), 16);
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items.first(), Some(&4));
        assert_eq!(items.last(), Some(&19));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::new(32));
        buffer.push(1);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 32);
    }
}
