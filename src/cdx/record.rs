use serde::Serialize;

/// One capture row from the CDX index, kept exactly as the API returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureRecord {
    pub timestamp: String,
    #[serde(rename = "original")]
    pub original_url: String,
    #[serde(rename = "mimetype")]
    pub mime_type: String,
    #[serde(rename = "statuscode")]
    pub status_code: String,
    pub digest: String,
    pub length: String,
}

impl CaptureRecord {
    /// Field values in CDX column order.
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.timestamp,
            &self.original_url,
            &self.mime_type,
            &self.status_code,
            &self.digest,
            &self.length,
        ]
    }
}

/// Result of parsing a CDX response body.
#[derive(Debug, Default)]
pub struct ParsedCaptures {
    pub records: Vec<CaptureRecord>,
    /// Rows dropped because they were malformed.
    pub skipped: usize,
}
