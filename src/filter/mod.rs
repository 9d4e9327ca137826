use std::collections::HashSet;

use regex::Regex;
use reqwest::Url;

use crate::cdx::CaptureRecord;

/// Client-side predicates applied to parsed captures. Empty sets do not filter.
#[derive(Debug, Clone, Default)]
pub struct CaptureFilter {
    extensions: HashSet<String>,
    status_codes: HashSet<String>,
    url_regex: Option<Regex>,
}

impl CaptureFilter {
    pub fn new(extensions: &[String], status_codes: &[String], url_regex: Option<Regex>) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
            status_codes: status_codes
                .iter()
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty())
                .collect(),
            url_regex,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty() && self.status_codes.is_empty() && self.url_regex.is_none()
    }

    /// Check if a capture passes every active predicate
    pub fn matches(&self, record: &CaptureRecord) -> bool {
        // Filter by status codes
        if !self.status_codes.is_empty() && !self.status_codes.contains(&record.status_code) {
            return false;
        }

        // Filter by file extension of the URL path
        if !self.extensions.is_empty() {
            match url_extension(&record.original_url) {
                Some(ext) if self.extensions.contains(&ext) => {}
                _ => return false,
            }
        }

        // Filter by regex on the original URL
        if let Some(re) = &self.url_regex
            && !re.is_match(&record.original_url)
        {
            return false;
        }

        true
    }

    /// Keep matching captures, preserving their order.
    pub fn apply(&self, records: Vec<CaptureRecord>) -> Vec<CaptureRecord> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Lowercased extension of the last path segment, without query or fragment.
pub fn url_extension(url: &str) -> Option<String> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => raw_path(url).to_string(),
    };
    let segment = path.rsplit('/').next()?;
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Path component of a URL that `Url` refuses to parse (archived URLs are not always valid).
fn raw_path(url: &str) -> &str {
    let without_suffix = url.split(['?', '#']).next().unwrap_or_default();
    let after_scheme = without_suffix
        .split_once("://")
        .map_or(without_suffix, |(_, rest)| rest);
    after_scheme.find('/').map_or("", |idx| &after_scheme[idx..])
}
