//! In-memory inventory store: a chained hash index by product id and an
//! ordered category index, filled once from a CSV dataset and then queried.

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod ingest;
pub mod query;
pub mod storage;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;
pub use engine::Inventory;
pub use error::{Error, Result};
