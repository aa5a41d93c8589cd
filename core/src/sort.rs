//! Fixed-width record decoding and sorting.
//!
//! Input is a flat blob of 4-byte little-endian two's-complement integers with
//! no header or padding. The run decodes every full record, sorts ascending
//! and reports the first and last element.

use std::fmt;

use tracing::debug;

use crate::error::{BenchError, Result};

/// Width of one encoded record in bytes.
pub const RECORD_WIDTH: usize = 4;

/// Options that influence decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Reject inputs whose length is not a multiple of [`RECORD_WIDTH`]
    /// instead of dropping the remainder.
    pub strict_length: bool,
}

impl DecodeOptions {
    pub const fn strict() -> Self {
        Self { strict_length: true }
    }
}

/// Smallest and largest value of a sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes {
    pub min: i32,
    pub max: i32,
}

impl fmt::Display for Extremes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

/// Decode `bytes.len() / 4` records in input order.
pub fn decode_le_i32(bytes: &[u8], opts: DecodeOptions) -> Result<Vec<i32>> {
    let remainder = bytes.len() % RECORD_WIDTH;
    if remainder != 0 {
        if opts.strict_length {
            return Err(BenchError::TrailingBytes {
                len: bytes.len(),
                remainder,
            });
        }
        debug!(len = bytes.len(), remainder, "ignoring trailing bytes");
    }

    let values: Vec<i32> = bytes
        .chunks_exact(RECORD_WIDTH)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    debug!(records = values.len(), "decoded records");
    Ok(values)
}

/// Ascending by signed value.
pub fn sort_records(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

/// Sort and project the first and last element.
pub fn sorted_extremes(values: Vec<i32>) -> Result<Extremes> {
    let values = sort_records(values);
    match (values.first(), values.last()) {
        (Some(&min), Some(&max)) => Ok(Extremes { min, max }),
        _ => Err(BenchError::EmptyInput),
    }
}

/// read → decode → sort → project.
pub fn run(bytes: &[u8], opts: DecodeOptions) -> Result<Extremes> {
    let values = decode_le_i32(bytes, opts)?;
    sorted_extremes(values)
}
