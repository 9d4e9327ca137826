use regex::Regex;
use reqwest::{Client, Url};
use std::path::PathBuf;
use tracing::debug;

use crate::cdx::parse_cdx_response;
use crate::error::{CdxError, Result};
use crate::filter::CaptureFilter;
use crate::http::{build_http_client, fetch_cdx_body};
use crate::output::{render_records, write_output};
use crate::query::{CdxQuery, MatchMode, build_cdx_url, normalize_domain};
use crate::types::{Cli, OutputFormat};

/// Validated configuration for one run, derived from the CLI before any network call
#[derive(Debug, Clone)]
pub struct QuerySettings {
    pub request_url: Url,
    pub filter: CaptureFilter,
    pub format: OutputFormat,
    pub output_path: Option<PathBuf>,
    pub colored: bool,
}

impl QuerySettings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let domain = normalize_domain(cli.domain.as_deref().unwrap_or_default())?;
        debug!("normalized domain: {}", domain);

        let query = CdxQuery {
            domain,
            match_mode: if cli.no_subdomains {
                MatchMode::Prefix
            } else {
                MatchMode::Domain
            },
            collapse: cli.collapse.clone(),
        };
        let request_url = build_cdx_url(&cli.endpoint, &query)?;

        let url_regex = cli
            .match_regex
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|e| CdxError::InvalidInput(format!("invalid --match-regex: {}", e)))?;

        Ok(Self {
            request_url,
            filter: CaptureFilter::new(&cli.ext, &cli.status, url_regex),
            format: cli.effective_format(),
            output_path: cli.output.as_ref().map(PathBuf::from),
            colored: cli.output.is_none() && !cli.no_color,
        })
    }
}

/// Summary of a completed query
#[derive(Debug)]
pub struct QueryOutcome {
    pub rendered: String,
    pub parsed_count: usize,
    pub skipped_rows: usize,
    pub matched_count: usize,
}

/// Fetch, parse, filter and render captures for the configured query
pub async fn run_query(client: &Client, settings: &QuerySettings) -> Result<QueryOutcome> {
    let body = fetch_cdx_body(client, &settings.request_url).await?;

    let parsed = parse_cdx_response(&body)?;
    let parsed_count = parsed.records.len();
    debug!(
        "retrieved {} records ({} malformed rows skipped)",
        parsed_count, parsed.skipped
    );

    let records = settings.filter.apply(parsed.records);
    if !settings.filter.is_empty() {
        debug!("after filtering: {} of {} records", records.len(), parsed_count);
    }

    Ok(QueryOutcome {
        rendered: render_records(&records, settings.format, settings.colored)?,
        parsed_count,
        skipped_rows: parsed.skipped,
        matched_count: records.len(),
    })
}

/// Run the full pipeline for the parsed CLI and write the results
pub async fn process_query(cli: &Cli) -> Result<QueryOutcome> {
    let settings = QuerySettings::from_cli(cli)?;
    let client = build_http_client(cli)?;
    debug!("constructed CDX URL: {}", settings.request_url);

    let outcome = run_query(&client, &settings).await?;
    write_output(&outcome.rendered, settings.output_path.as_deref())?;
    Ok(outcome)
}
