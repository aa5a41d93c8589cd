use std::fmt;

/// Failure of a single workload run.
#[derive(Debug)]
pub enum BenchError {
    /// Nothing to report: zero records, or no CSV header.
    EmptyInput,
    /// Binary input length is not a multiple of the record width (strict mode only).
    TrailingBytes { len: usize, remainder: usize },
    MissingColumn { column: String },
    MissingCell { row: usize, column: String },
    InvalidInteger { row: usize, value: String },
    Overflow { row: usize },
    ElementOverflow { index: usize },
    UnexpectedJson { found: &'static str },
    MissingField { index: usize, field: String },
    NonNumericField { index: usize, field: String },
    InvalidPattern(regex::Error),
    EmptyPattern,
    Csv(csv::Error),
    Json(serde_json::Error),
    Config(toml::de::Error),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::EmptyInput => write!(f, "EmptyInput: input contains no records"),
            BenchError::TrailingBytes { len, remainder } => write!(
                f,
                "TrailingBytes: input length {} is not a multiple of 4 ({} trailing bytes)",
                len, remainder
            ),
            BenchError::MissingColumn { column } => write!(f, "column '{}' not found in header", column),
            BenchError::MissingCell { row, column } => write!(f, "row {} has no '{}' cell", row, column),
            BenchError::InvalidInteger { row, value } => {
                write!(f, "row {}: '{}' is not a valid integer", row, value)
            }
            BenchError::Overflow { row } => write!(f, "sum overflowed at row {}", row),
            BenchError::ElementOverflow { index } => write!(f, "sum overflowed at element {}", index),
            BenchError::UnexpectedJson { found } => {
                write!(f, "expected a top-level JSON array, found {}", found)
            }
            BenchError::MissingField { index, field } => {
                write!(f, "element {} has no '{}' field", index, field)
            }
            BenchError::NonNumericField { index, field } => {
                write!(f, "element {}: '{}' is not a number", index, field)
            }
            BenchError::InvalidPattern(e) => write!(f, "invalid pattern: {}", e),
            BenchError::EmptyPattern => write!(f, "search pattern must not be empty"),
            BenchError::Csv(e) => write!(f, "CSV error: {}", e),
            BenchError::Json(e) => write!(f, "JSON error: {}", e),
            BenchError::Config(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::InvalidPattern(e) => Some(e),
            BenchError::Csv(e) => Some(e),
            BenchError::Json(e) => Some(e),
            BenchError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for BenchError {
    fn from(e: csv::Error) -> Self {
        BenchError::Csv(e)
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(e: serde_json::Error) -> Self {
        BenchError::Json(e)
    }
}

impl From<toml::de::Error> for BenchError {
    fn from(e: toml::de::Error) -> Self {
        BenchError::Config(e)
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
