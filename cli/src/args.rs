use std::path::PathBuf;

use clap::Parser;
use engine::{EngineConfig, Result};

/// Query an inventory CSV by product id or category.
#[derive(Debug, Parser)]
#[command(name = "inventory", version)]
pub struct Args {
    /// CSV dataset loaded at startup
    #[arg(short = 'd', long, env = "INVENTORY_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Bucket count of the product id index
    #[arg(short = 'b', long)]
    pub buckets: Option<usize>,

    /// JSON config file; flags given on the command line take precedence
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Print query results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::default(),
        };

        if let Some(dataset) = &self.dataset {
            config.dataset_path = dataset.clone();
        }
        if let Some(buckets) = self.buckets {
            config.bucket_count = buckets;
        }

        config.validate()?;
        Ok(config)
    }
}
