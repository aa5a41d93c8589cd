use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{BenchError, Result};

pub const DEFAULT_COLUMN: &str = "salary";

/// Sum the integer cells of `column`, located by exact header match.
///
/// Rows are numbered from 1 (first data row) in error reports. A header with
/// no data rows sums to 0.
pub fn sum_column(data: &[u8], column: &str) -> Result<i64> {
    let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(data);

    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(BenchError::EmptyInput);
    }
    let idx = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| BenchError::MissingColumn {
            column: column.to_string(),
        })?;
    debug!(column, idx, "located column");

    let mut record = StringRecord::new();
    let mut total: i64 = 0;
    let mut row = 0usize;
    while reader.read_record(&mut record)? {
        row += 1;
        let cell = record.get(idx).ok_or_else(|| BenchError::MissingCell {
            row,
            column: column.to_string(),
        })?;
        let value: i64 = cell
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .parse()
            .map_err(|_| BenchError::InvalidInteger {
                row,
                value: cell.to_string(),
            })?;
        total = total.checked_add(value).ok_or(BenchError::Overflow { row })?;
    }
    debug!(rows = row, "summed csv column");
    Ok(total)
}
