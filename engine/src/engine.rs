use crate::config::EngineConfig;
use crate::index::{CategoryIndex, PrimaryIndex};
use crate::query::{Command, QueryResult};
use crate::storage::{GrowableBuffer, Record};

/// Owns both indexes. Ingestion is the only writer; after loading, every
/// method used by the query surface takes `&self`.
#[derive(Debug)]
pub struct Inventory {
    by_id: PrimaryIndex<Record>,
    by_category: CategoryIndex<Record>,
}

impl Inventory {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            by_id: PrimaryIndex::new(config.bucket_count),
            by_category: CategoryIndex::with_initial_capacity(config.initial_category_capacity),
        }
    }

    /// File a record under its id and its category. Each index keeps its own
    /// copy. A repeated id replaces the earlier record in the id index, while
    /// both copies stay listed under their categories.
    pub fn insert(&mut self, record: Record) {
        self.by_id.insert(record.id.clone(), record.clone());
        let category = record.category.clone();
        self.by_category.add_record(&category, record);
    }

    pub fn find(&self, id: &str) -> Option<&Record> {
        self.by_id.lookup(id)
    }

    pub fn list_category(&self, category: &str) -> Option<&GrowableBuffer<Record>> {
        self.by_category.lookup(category)
    }

    /// Distinct product ids.
    pub fn len(&self) -> usize {
        self.by_id.size()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    /// Longest primary index chain, reported after a load to judge the
    /// configured bucket count.
    pub fn longest_chain(&self) -> usize {
        self.by_id.longest_chain()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &GrowableBuffer<Record>)> + '_ {
        self.by_category.categories()
    }

    pub fn execute(&self, command: &Command) -> QueryResult<'_> {
        match command {
            Command::Help => QueryResult::Help,
            Command::Quit => QueryResult::Quit,
            Command::Find { id } => match self.find(id) {
                Some(record) => QueryResult::Product(record),
                None => QueryResult::ProductNotFound(id.clone()),
            },
            Command::ListInventory { category } => match self.list_category(category) {
                Some(records) => QueryResult::Category {
                    name: category.clone(),
                    records,
                },
                None => QueryResult::InvalidCategory(category.clone()),
            },
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
