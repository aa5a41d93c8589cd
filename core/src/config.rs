//! Optional TOML configuration. Every section and key may be omitted; command
//! line flags take precedence over anything loaded here.

use serde::Deserialize;

use crate::csv_sum::DEFAULT_COLUMN;
use crate::error::Result;
use crate::json_sum::DEFAULT_FIELD;
use crate::regex_count::DEFAULT_PATTERN;
use crate::sort::DecodeOptions;
use crate::wordcount::WordOrder;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sort: SortConfig,
    pub csv: CsvConfig,
    pub json: JsonConfig,
    pub regex: RegexConfig,
    pub wc: WordCountConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub strict_length: bool,
}

impl SortConfig {
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            strict_length: self.strict_length,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvConfig {
    pub column: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            column: DEFAULT_COLUMN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonConfig {
    pub field: String,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegexConfig {
    pub pattern: String,
}

impl Default for RegexConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordCountConfig {
    pub order: WordOrder,
}

impl Config {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }
}
