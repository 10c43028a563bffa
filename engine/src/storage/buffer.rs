use std::ops::Index;

use crate::error::{Error, Result};

pub const DEFAULT_CAPACITY: usize = 10;

/// Append-only sequence that doubles its backing store when full.
///
/// `capacity` is tracked here rather than read from the `Vec`, so growth
/// follows the doubling policy exactly regardless of allocator rounding.
#[derive(Debug, Clone)]
pub struct GrowableBuffer<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> GrowableBuffer<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A zero capacity is raised to 1 so that doubling always makes room.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, value: T) {
        if self.items.len() >= self.capacity {
            self.grow();
        }
        self.items.push(value);
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        let mut items = Vec::with_capacity(new_capacity);
        items.append(&mut self.items);
        self.items = items;
        self.capacity = new_capacity;
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for GrowableBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
