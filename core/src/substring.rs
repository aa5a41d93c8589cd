use memchr::memmem::Finder;
use tracing::debug;

use crate::error::{BenchError, Result};

/// Count occurrences of `needle` in `haystack`.
///
/// After a match at `p` the search resumes at `p + 1`, so overlapping
/// occurrences are all counted: `"aa"` occurs three times in `"aaaa"`.
pub fn count_occurrences(haystack: &[u8], needle: &[u8]) -> Result<usize> {
    if needle.is_empty() {
        return Err(BenchError::EmptyPattern);
    }

    let finder = Finder::new(needle);
    let mut count = 0usize;
    let mut start = 0usize;
    while let Some(pos) = finder.find(&haystack[start..]) {
        count += 1;
        start += pos + 1;
    }
    debug!(haystack = haystack.len(), needle = needle.len(), count, "counted substring");
    Ok(count)
}
