use clap::Parser;

use crate::constants::{DEFAULT_CDX_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Output format options
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Text,
    Jsonl,
}

/// CLI arguments structure
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  wayrecon -u example.com
  wayrecon -u example.com --ext js php -v
  wayrecon -u example.com --text --ext zip -o zip_urls.txt
  wayrecon -u example.com -s 404 403
  wayrecon -u example.com --ext js --status 200 -o results.txt")]
pub struct Cli {
    // TARGET
    /// Domain name to query (e.g., example.com).
    #[arg(short = 'u', long = "url", help_heading = "TARGET")]
    pub domain: Option<String>,

    /// Only match the exact host, not its subdomains.
    #[arg(long, help_heading = "TARGET")]
    pub no_subdomains: bool,

    /// Collapse adjacent captures on a CDX field (e.g., "urlkey", "digest").
    #[arg(long, help_heading = "TARGET")]
    pub collapse: Option<String>,

    // NETWORK
    /// Timeout for the index request in seconds.
    #[arg(long, env = "WAYRECON_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, help_heading = "NETWORK")]
    pub timeout: u64,

    /// Use a proxy for requests (e.g., "http://127.0.0.1:8080").
    #[arg(long, env = "WAYRECON_PROXY", help_heading = "NETWORK")]
    pub proxy: Option<String>,

    /// CDX API endpoint to query.
    #[arg(long, env = "WAYRECON_CDX_ENDPOINT", default_value = DEFAULT_CDX_ENDPOINT, help_heading = "NETWORK")]
    pub endpoint: String,

    // OUTPUT
    /// Also save results to this file (overwritten on each run).
    #[arg(short, long, help_heading = "OUTPUT")]
    pub output: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, help_heading = "OUTPUT")]
    pub format: OutputFormat,

    /// Output plain text (only original URLs). Shorthand for --format text.
    #[arg(long, help_heading = "OUTPUT")]
    pub text: bool,

    /// Show diagnostics (request URL, HTTP status, record counts, timing) on stderr.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub verbose: bool,

    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,

    // FILTER
    /// One or more file extensions to keep (e.g., --ext js php zip).
    #[arg(long, num_args = 1.., value_delimiter = ',', help_heading = "FILTER")]
    pub ext: Vec<String>,

    /// One or more HTTP status codes to keep (e.g., -s 404 403 200).
    #[arg(short, long, num_args = 1.., value_delimiter = ',', help_heading = "FILTER")]
    pub status: Vec<String>,

    /// Keep only captures whose original URL matches this regex.
    #[arg(long, help_heading = "FILTER")]
    pub match_regex: Option<String>,
}

impl Cli {
    /// Render format after applying the --text shorthand.
    pub fn effective_format(&self) -> OutputFormat {
        if self.text {
            OutputFormat::Text
        } else {
            self.format
        }
    }
}
