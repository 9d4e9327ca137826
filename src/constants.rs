/// CDX API constants
pub const DEFAULT_CDX_ENDPOINT: &str = "https://web.archive.org/cdx/search/cdx";
pub const CDX_OUTPUT_FORMAT: &str = "json";

/// Field list requested from the CDX API. Column order of every response row follows it.
pub const CDX_FIELDS: [&str; 6] = [
    "timestamp",
    "original",
    "mimetype",
    "statuscode",
    "digest",
    "length",
];

/// First cells that mark a header row rather than a capture.
pub const HEADER_SENTINELS: [&str; 2] = ["timestamp", "urlkey"];

/// HTTP constants
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REDIRECT_LIMIT: usize = 10;
pub const USER_AGENT: &str = concat!("wayrecon/", env!("CARGO_PKG_VERSION"));

/// Output constants
pub const NO_RESULTS_MESSAGE: &str = "No results.";
pub const TABLE_COLUMN_SEPARATOR: &str = " | ";

/// Exit codes
pub const EXIT_INVALID_INPUT: i32 = 2;
pub const EXIT_NETWORK: i32 = 3;
pub const EXIT_PARSE: i32 = 4;
pub const EXIT_IO: i32 = 5;
pub const EXIT_INTERRUPTED: i32 = 130;
