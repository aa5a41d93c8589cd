use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;

static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "microbench_core=debug,microbench=debug";

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use microbench_core::{
    config::Config,
    csv_sum, json_sum, output, regex_count,
    sort::{self, DecodeOptions},
    substring,
    wordcount::{self, WordOrder},
};
use tracing::debug;


#[derive(Debug, Parser)]
#[command(
    name = "microbench",
    author,
    version,
    about = "Single-run data-processing workloads",
    long_about = None,
    after_help = "Set MICROBENCH_TRACE=1 (or a filter expression) to log to stderr."
)]
struct CliArgs {
    /// TOML file with per-workload defaults
    #[arg(long, global = true, value_name = "FILE", env = "MICROBENCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderCli {
    FirstSeen,
    Alpha,
    Count,
}

impl From<OrderCli> for WordOrder {
    fn from(value: OrderCli) -> Self {
        match value {
            OrderCli::FirstSeen => WordOrder::FirstSeen,
            OrderCli::Alpha => WordOrder::Alpha,
            OrderCli::Count => WordOrder::Count,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode little-endian i32 records, sort them and print `min,max`.
    Sort {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Fail when the file length is not a multiple of 4 instead of dropping the remainder
        #[arg(long)]
        strict_length: bool,
    },
    /// Sum an integer CSV column located by header name.
    Csv {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Header name of the column to sum [default: salary]
        #[arg(long)]
        column: Option<String>,
    },
    /// Sum a numeric field over a JSON array of objects.
    Json {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Object key to sum [default: value]
        #[arg(long)]
        field: Option<String>,
    },
    /// Count regex matches.
    Regex {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Pattern to count [default: \b[a-z]+ing\b]
        #[arg(long)]
        pattern: Option<String>,
    },
    /// Count occurrences of a literal substring, overlaps included.
    Strsearch {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },
    /// Print `word<TAB>count` for every whitespace-delimited token.
    Wc {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output order [default: first-seen]
        #[arg(long, value_enum)]
        order: Option<OrderCli>,
    },
}

fn read_file_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read file '{}'", path.display()))
}

fn read_file_content(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file '{}'", path.display()))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let src = read_file_content(path)?;
    let config =
        Config::from_toml_str(&src).with_context(|| format!("Failed to load config '{}'", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Install a stderr subscriber when `MICROBENCH_TRACE` is set. `0`/`false`/`off`
/// leave logging off, `1`/`true`/`on` use `RUST_LOG` or the per-crate debug
/// default, and any other value is parsed as an `EnvFilter` directive.
fn maybe_init_tracing() {
    let raw = match std::env::var("MICROBENCH_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        // stdout carries results only
        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

/// Execute one workload and write its result to `out`.
fn run<W: Write>(args: CliArgs, out: &mut W) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Commands::Sort { file, strict_length } => {
            let opts = DecodeOptions {
                strict_length: strict_length || config.sort.decode_options().strict_length,
            };
            let bytes = read_file_bytes(&file)?;
            debug!(file = %file.display(), len = bytes.len(), ?opts, "sort");
            let extremes = sort::run(&bytes, opts)?;
            output::write_extremes(out, extremes)?;
        }
        Commands::Csv { file, column } => {
            let column = column.unwrap_or(config.csv.column);
            let bytes = read_file_bytes(&file)?;
            let total = csv_sum::sum_column(&bytes, &column)?;
            output::write_total(out, total)?;
        }
        Commands::Json { file, field } => {
            let field = field.unwrap_or(config.json.field);
            let text = read_file_content(&file)?;
            let total = json_sum::sum_field(&text, &field)?;
            output::write_json_total(out, total)?;
        }
        Commands::Regex { file, pattern } => {
            let pattern = pattern.unwrap_or(config.regex.pattern);
            let re = regex_count::compile(&pattern)?;
            let text = read_file_content(&file)?;
            output::write_count(out, regex_count::count_matches(&text, &re))?;
        }
        Commands::Strsearch { file, pattern } => {
            let bytes = read_file_bytes(&file)?;
            let count = substring::count_occurrences(&bytes, pattern.as_bytes())?;
            output::write_count(out, count)?;
        }
        Commands::Wc { file, order } => {
            let order = order.map(WordOrder::from).unwrap_or(config.wc.order);
            let text = read_file_content(&file)?;
            let entries = wordcount::count_words(&text).into_ordered(order);
            output::write_tally(out, &entries)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(args, &mut out)
}
