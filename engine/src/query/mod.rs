pub mod parser;

use crate::storage::{GrowableBuffer, Record};

pub const FIND_USAGE: &str = "find <inventoryid>";
pub const LIST_USAGE: &str = "listInventory <category_string>";

pub const HELP_TEXT: &str = "Supported list of commands:
 1. find <inventoryid> - Finds if the inventory exists. If exists, prints details. If not, prints 'Inventory not found'.
 2. listInventory <category_string> - Lists just the id and name of all inventory belonging to the specified category. If the category doesn't exists, prints 'Invalid Category'.

 Use :quit to quit the REPL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Find { id: String },
    ListInventory { category: String },
}

/// Outcome of running a command. Misses are ordinary results, not errors.
#[derive(Debug)]
pub enum QueryResult<'a> {
    Help,
    Quit,
    Product(&'a Record),
    ProductNotFound(String),
    /// The category exists; `records` may still be empty.
    Category {
        name: String,
        records: &'a GrowableBuffer<Record>,
    },
    InvalidCategory(String),
}
