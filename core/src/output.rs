//! Result formatting. Every workload prints plain decimal text, one value or
//! record per line, so external tooling can parse stdout directly.

use std::io::{self, Write};

use crate::json_sum::JsonTotal;
use crate::sort::Extremes;

pub fn write_count<W: Write>(out: &mut W, n: usize) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    out.write_all(buf.format(n).as_bytes())?;
    out.write_all(b"\n")
}

pub fn write_total<W: Write>(out: &mut W, total: i64) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    out.write_all(buf.format(total).as_bytes())?;
    out.write_all(b"\n")
}

pub fn write_json_total<W: Write>(out: &mut W, total: JsonTotal) -> io::Result<()> {
    match total {
        JsonTotal::Int(v) => write_total(out, v),
        JsonTotal::Float(_) => writeln!(out, "{}", total),
    }
}

/// `min,max`
pub fn write_extremes<W: Write>(out: &mut W, extremes: Extremes) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    out.write_all(buf.format(extremes.min).as_bytes())?;
    out.write_all(b",")?;
    out.write_all(buf.format(extremes.max).as_bytes())?;
    out.write_all(b"\n")
}

/// One `word\tcount` line per entry.
pub fn write_tally<W: Write>(out: &mut W, entries: &[(&str, u64)]) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    for (word, count) in entries {
        out.write_all(word.as_bytes())?;
        out.write_all(b"\t")?;
        out.write_all(buf.format(*count).as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
