use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::DEFAULT_BUCKET_COUNT;
use crate::storage::buffer::DEFAULT_CAPACITY;

pub const DEFAULT_DATASET: &str = "amazon-product-dataset-2020.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub dataset_path: PathBuf,
    /// Primary index bucket count, fixed for the life of the inventory.
    pub bucket_count: usize,
    /// Starting capacity of each category's record buffer.
    pub initial_category_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            bucket_count: DEFAULT_BUCKET_COUNT,
            initial_category_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file. Keys left out keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(Error::Config("bucket_count must be at least 1".to_string()));
        }
        if self.dataset_path.as_os_str().is_empty() {
            return Err(Error::Config("dataset_path must not be empty".to_string()));
        }
        Ok(())
    }
}
