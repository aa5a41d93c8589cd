use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{BenchError, Result};

/// Lowercase words ending in "ing" with at least one letter before the suffix.
pub const DEFAULT_PATTERN: &str = r"\b[a-z]+ing\b";

// Constant pattern; only a typo in DEFAULT_PATTERN can make this panic.
static DEFAULT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_PATTERN).expect("default pattern is a valid regex"));

/// Compile `pattern`, reusing the cached default when it is requested.
pub fn compile(pattern: &str) -> Result<Cow<'static, Regex>> {
    if pattern == DEFAULT_PATTERN {
        return Ok(Cow::Borrowed(&*DEFAULT_REGEX));
    }
    Regex::new(pattern).map(Cow::Owned).map_err(BenchError::InvalidPattern)
}

/// Number of non-overlapping leftmost-first matches.
pub fn count_matches(text: &str, re: &Regex) -> usize {
    let count = re.find_iter(text).count();
    debug!(pattern = re.as_str(), count, "counted regex matches");
    count
}

pub fn run(text: &str, pattern: &str) -> Result<usize> {
    let re = compile(pattern)?;
    Ok(count_matches(text, &re))
}
