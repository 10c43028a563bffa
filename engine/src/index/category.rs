use crate::storage::GrowableBuffer;
use crate::storage::buffer::DEFAULT_CAPACITY;

#[derive(Debug)]
struct CategoryNode<T> {
    name: String,
    records: GrowableBuffer<T>,
}

/// Association list from category name to the records filed under it.
///
/// Categories are few compared to records, so lookups scan linearly. Nodes
/// are kept in the order their category was first seen.
#[derive(Debug)]
pub struct CategoryIndex<T> {
    nodes: Vec<CategoryNode<T>>,
    initial_capacity: usize,
}

impl<T> CategoryIndex<T> {
    pub fn new() -> Self {
        Self::with_initial_capacity(DEFAULT_CAPACITY)
    }

    /// `initial_capacity` sizes the buffer created for each new category.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            initial_capacity,
        }
    }

    pub fn add_record(&mut self, category: &str, record: T) {
        self.ensure_category(category).append(record);
    }

    /// Returns the buffer for `category`, creating an empty one at the end
    /// of the list if the category has not been seen yet.
    pub fn ensure_category(&mut self, category: &str) -> &mut GrowableBuffer<T> {
        let slot = match self.position(category) {
            Some(slot) => slot,
            None => {
                self.nodes.push(CategoryNode {
                    name: category.to_string(),
                    records: GrowableBuffer::with_capacity(self.initial_capacity),
                });
                self.nodes.len() - 1
            }
        };
        &mut self.nodes[slot].records
    }

    pub fn lookup(&self, category: &str) -> Option<&GrowableBuffer<T>> {
        self.position(category).map(|slot| &self.nodes[slot].records)
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Categories in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &GrowableBuffer<T>)> + '_ {
        self.nodes
            .iter()
            .map(|node| (node.name.as_str(), &node.records))
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.name == category)
    }
}

impl<T> Default for CategoryIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
