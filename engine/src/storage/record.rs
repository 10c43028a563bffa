use serde::{Deserialize, Serialize};

/// Placeholder stored when a row leaves its category column blank.
pub const MISSING_CATEGORY: &str = "NA";

/// One inventory row. Every field is kept as text, price included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price: price.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_validity() {
        assert!(Record::new("A1", "Widget", "Tools", "9.99").is_valid());
        assert!(!Record::new("", "Widget", "Tools", "9.99").is_valid());
    }
}
