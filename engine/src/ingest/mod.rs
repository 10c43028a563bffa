pub mod csv;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::engine::Inventory;
use crate::error::Result;
use crate::ingest::csv::{CsvOptions, parse_csv_line};
use crate::storage::{MISSING_CATEGORY, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Why a data row was left out of the inventory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowRejected {
    #[error("expected at least 4 fields, found {0}")]
    TooFewFields(usize),
    #[error("record has an empty id")]
    MissingId,
}

/// Turn one data line into a record. A blank category becomes `NA`.
pub fn parse_record(line: &str, opts: &CsvOptions) -> std::result::Result<Record, RowRejected> {
    let mut fields = parse_csv_line(line, opts).into_iter();
    let count = fields.len();

    let (Some(id), Some(name), Some(category), Some(price)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(RowRejected::TooFewFields(count));
    };

    let category = if category.is_empty() {
        MISSING_CATEGORY.to_string()
    } else {
        category
    };

    let record = Record {
        id,
        name,
        category,
        price,
    };
    if !record.is_valid() {
        return Err(RowRejected::MissingId);
    }
    Ok(record)
}

/// Load a dataset file into `inventory`.
///
/// Failing to open the file is returned to the caller, who decides whether
/// to carry on with an empty inventory. A read error once the file is open
/// ends the load early; rows read before it stay loaded.
pub fn load_path(path: impl AsRef<Path>, inventory: &mut Inventory) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!(path = %path.display(), "opened dataset");
    load_reader(BufReader::new(file), &CsvOptions::default(), inventory)
}

pub fn load_reader<R: BufRead>(
    reader: R,
    opts: &CsvOptions,
    inventory: &mut Inventory,
) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (line_idx, raw) in reader.split(b'\n').enumerate() {
        let raw = match raw {
            Ok(raw) => raw,
            Err(e) => {
                warn!(line = line_idx + 1, error = %e, "stopping load at unreadable line");
                break;
            }
        };
        if line_idx == 0 && opts.header {
            continue;
        }

        // Datasets are not guaranteed to be clean UTF-8.
        let decoded = String::from_utf8_lossy(&raw);
        let line = decoded.strip_suffix('\r').unwrap_or(&decoded);
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line, opts) {
            Ok(record) => {
                inventory.insert(record);
                report.loaded += 1;
            }
            Err(reason) => {
                debug!(line = line_idx + 1, %reason, "skipping row");
                report.skipped += 1;
            }
        }
    }

    info!(
        loaded = report.loaded,
        skipped = report.skipped,
        products = inventory.len(),
        categories = inventory.category_count(),
        longest_chain = inventory.longest_chain(),
        "dataset loaded"
    );
    for (category, records) in inventory.categories() {
        debug!(category, products = records.len(), "category loaded");
    }
    Ok(report)
}
