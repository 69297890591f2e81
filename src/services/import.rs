//! CSV loading
//!
//! Reads headered CSV files with the columns `date, description, category,
//! type, amount` into raw records for the normalizer. Header names are
//! matched case-insensitively and extra columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{CashflowError, CashflowResult};
use crate::models::RawTransaction;

/// Columns every input file must provide
pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "type", "amount"];

/// Load raw transaction records from a CSV file
pub fn load_csv(path: &Path) -> CashflowResult<Vec<RawTransaction>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(CashflowError::Import(format!(
            "Only CSV files are supported: {}",
            path.display()
        )));
    }

    let file = File::open(path).map_err(|e| {
        CashflowError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let records = read_csv(file)?;
    debug!(path = %path.display(), records = records.len(), "loaded CSV");
    Ok(records)
}

/// Read raw transaction records from any CSV source
pub fn read_csv<R: Read>(source: R) -> CashflowResult<Vec<RawTransaction>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .flexible(false)
        .from_reader(source);

    let headers = normalize_headers(reader.headers()?);
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CashflowError::Import(format!(
                "Missing required column '{}' (found: {})",
                column,
                headers.iter().collect::<Vec<_>>().join(", ")
            )));
        }
    }
    reader.set_headers(headers);

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<RawTransaction>().enumerate() {
        let record = result.map_err(|e| {
            CashflowError::Import(format!("Error reading CSV record {}: {}", idx, e))
        })?;
        records.push(record);
    }

    Ok(records)
}

fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect()
}
