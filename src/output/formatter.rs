use colored::*;

use crate::cdx::CaptureRecord;
use crate::constants::{CDX_FIELDS, NO_RESULTS_MESSAGE, TABLE_COLUMN_SEPARATOR};
use crate::error::{CdxError, Result};
use crate::types::OutputFormat;

/// Render captures in the requested format. Every line ends with `\n`.
pub fn render_records(
    records: &[CaptureRecord],
    format: OutputFormat,
    colored: bool,
) -> Result<String> {
    if records.is_empty() {
        return Ok(format!("{}\n", NO_RESULTS_MESSAGE));
    }

    match format {
        OutputFormat::Table => Ok(format_table_output(records, colored)),
        OutputFormat::Text => Ok(format_text_output(records)),
        OutputFormat::Jsonl => format_jsonl_output(records),
    }
}

/// Aligned columns with a header row and a dashed separator
pub fn format_table_output(records: &[CaptureRecord], colored: bool) -> String {
    let mut widths: Vec<usize> = CDX_FIELDS.iter().map(|h| h.chars().count()).collect();
    for record in records {
        for (width, field) in widths.iter_mut().zip(record.fields()) {
            *width = (*width).max(field.chars().count());
        }
    }

    let header_line = join_row(&CDX_FIELDS, &widths);
    let separator = "-".repeat(header_line.chars().count());

    let mut output = String::new();
    if colored {
        output.push_str(&format!("{}\n{}\n", header_line.bold(), separator.dimmed()));
    } else {
        output.push_str(&format!("{}\n{}\n", header_line, separator));
    }

    for record in records {
        output.push_str(&join_row(&record.fields(), &widths));
        output.push('\n');
    }
    output
}

fn join_row(cells: &[&str], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == last {
                cell.to_string()
            } else {
                format!("{:<width$}", cell, width = *width)
            }
        })
        .collect::<Vec<_>>()
        .join(TABLE_COLUMN_SEPARATOR)
}

/// Original URLs only, one per line
pub fn format_text_output(records: &[CaptureRecord]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&record.original_url);
        output.push('\n');
    }
    output
}

/// One JSON object per line
pub fn format_jsonl_output(records: &[CaptureRecord]) -> Result<String> {
    let mut output = String::new();
    for record in records {
        let line = serde_json::to_string(record).map_err(|e| {
            CdxError::Parse(format!(
                "failed to encode capture {}: {}",
                record.original_url, e
            ))
        })?;
        output.push_str(&line);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CaptureRecord> {
        vec![
            CaptureRecord {
                timestamp: "20200101000000".to_string(),
                original_url: "http://example.com/a.js".to_string(),
                mime_type: "text/javascript".to_string(),
                status_code: "200".to_string(),
                digest: "D1".to_string(),
                length: "100".to_string(),
            },
            CaptureRecord {
                timestamp: "20200102000000".to_string(),
                original_url: "http://example.com/b.png".to_string(),
                mime_type: "image/png".to_string(),
                status_code: "200".to_string(),
                digest: "D2".to_string(),
                length: "200".to_string(),
            },
        ]
    }

    #[test]
    fn test_text_output_one_url_per_line() {
        let output = render_records(&sample(), OutputFormat::Text, false).unwrap();
        assert_eq!(output, "http://example.com/a.js\nhttp://example.com/b.png\n");
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_table_output_layout() {
        let output = render_records(&sample(), OutputFormat::Table, false).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "timestamp      | original                 | mimetype        | statuscode | digest | length"
        );
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[1].len(), lines[0].len());
        assert_eq!(
            lines[2],
            "20200101000000 | http://example.com/a.js  | text/javascript | 200        | D1     | 100"
        );
    }

    #[test]
    fn test_jsonl_output_uses_cdx_field_names() {
        let output = render_records(&sample()[..1], OutputFormat::Jsonl, false).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["original"], "http://example.com/a.js");
        assert_eq!(value["statuscode"], "200");
        assert_eq!(value["mimetype"], "text/javascript");
        assert_eq!(value["length"], "100");
    }

    #[test]
    fn test_jsonl_output_one_object_per_record() {
        let output = format_jsonl_output(&sample()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| !line.is_empty()));
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["original"], "http://example.com/b.png");
    }

    #[test]
    fn test_empty_renders_no_results() {
        for format in [OutputFormat::Table, OutputFormat::Text, OutputFormat::Jsonl] {
            assert_eq!(render_records(&[], format, false).unwrap(), "No results.\n");
        }
    }
}
