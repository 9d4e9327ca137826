use serde_json::Value;
use tracing::warn;

use crate::cdx::record::{CaptureRecord, ParsedCaptures};
use crate::constants::{CDX_FIELDS, HEADER_SENTINELS};
use crate::error::{CdxError, Result};

/// Parse a CDX `output=json` body into capture records.
///
/// Columns are mapped by position in [`CDX_FIELDS`]. A leading header row is
/// dropped. Malformed rows are skipped and counted rather than failing the
/// whole response.
pub fn parse_cdx_response(body: &str) -> Result<ParsedCaptures> {
    if body.trim().is_empty() {
        return Ok(ParsedCaptures::default());
    }

    let value: Value = serde_json::from_str(body)?;
    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(CdxError::Parse(format!(
                "expected a JSON array of rows, got {}",
                json_kind(&other)
            )));
        }
    };

    let mut parsed = ParsedCaptures {
        records: Vec::with_capacity(rows.len()),
        skipped: 0,
    };

    for (index, row) in rows.iter().enumerate() {
        if index == 0 && is_header_row(row) {
            continue;
        }
        match parse_row(row) {
            Some(record) => parsed.records.push(record),
            None => {
                warn!(index, "skipping malformed CDX row: {}", row);
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

fn is_header_row(row: &Value) -> bool {
    row.get(0)
        .and_then(Value::as_str)
        .is_some_and(|cell| HEADER_SENTINELS.contains(&cell))
}

fn parse_row(row: &Value) -> Option<CaptureRecord> {
    let cells = row.as_array()?;
    if cells.len() < CDX_FIELDS.len() {
        return None;
    }
    let mut fields = cells
        .iter()
        .take(CDX_FIELDS.len())
        .map(|cell| cell.as_str().map(str::to_string));

    Some(CaptureRecord {
        timestamp: fields.next()??,
        original_url: fields.next()??,
        mime_type: fields.next()??,
        status_code: fields.next()??,
        digest: fields.next()??,
        length: fields.next()??,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
