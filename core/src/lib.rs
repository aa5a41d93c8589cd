pub mod config;
pub mod csv_sum;
pub mod error;
pub mod json_sum;
pub mod output;
pub mod regex_count;
pub mod sort;
pub mod substring;
pub mod util;
pub mod wordcount;


pub use error::{BenchError, Result};
