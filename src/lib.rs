pub mod cdx;
pub mod constants;
pub mod error;
pub mod filter;
pub mod http;
pub mod logging;
pub mod output;
pub mod processor;
pub mod query;
pub mod types;

pub use error::{CdxError, Result};
pub use processor::{QueryOutcome, QuerySettings, process_query, run_query};
pub use types::{Cli, OutputFormat};
