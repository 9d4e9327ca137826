pub mod parser;
pub mod record;

pub use parser::parse_cdx_response;
pub use record::{CaptureRecord, ParsedCaptures};
