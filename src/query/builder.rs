use reqwest::Url;

use crate::constants::{CDX_FIELDS, CDX_OUTPUT_FORMAT};
use crate::error::{CdxError, Result};

/// How captures are matched against the queried domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The host and all of its subdomains.
    #[default]
    Domain,
    /// Only URLs under the exact host.
    Prefix,
}

impl MatchMode {
    pub fn as_param(&self) -> &'static str {
        match self {
            MatchMode::Domain => "domain",
            MatchMode::Prefix => "prefix",
        }
    }
}

/// Parameters of a single CDX index query.
#[derive(Debug, Clone, Default)]
pub struct CdxQuery {
    pub domain: String,
    pub match_mode: MatchMode,
    pub collapse: Option<String>,
}

/// Build the CDX API request URL for a normalized domain.
pub fn build_cdx_url(endpoint: &str, query: &CdxQuery) -> Result<Url> {
    if query.domain.trim().is_empty() {
        return Err(CdxError::InvalidInput("domain must not be empty".to_string()));
    }

    let mut url = Url::parse(endpoint)
        .map_err(|e| CdxError::InvalidInput(format!("invalid endpoint '{}': {}", endpoint, e)))?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("url", &format!("{}/*", query.domain))
            .append_pair("output", CDX_OUTPUT_FORMAT)
            .append_pair("fl", &CDX_FIELDS.join(","))
            .append_pair("matchType", query.match_mode.as_param());
        if let Some(field) = query.collapse.as_deref().map(str::trim)
            && !field.is_empty()
        {
            pairs.append_pair("collapse", field);
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CDX_ENDPOINT;

    fn param(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_build_cdx_url_default_params() {
        let query = CdxQuery {
            domain: "example.com".to_string(),
            ..Default::default()
        };
        let url = build_cdx_url(DEFAULT_CDX_ENDPOINT, &query).unwrap();
        assert_eq!(url.host_str(), Some("web.archive.org"));
        assert_eq!(url.path(), "/cdx/search/cdx");
        assert_eq!(param(&url, "url").as_deref(), Some("example.com/*"));
        assert_eq!(param(&url, "output").as_deref(), Some("json"));
        assert_eq!(
            param(&url, "fl").as_deref(),
            Some("timestamp,original,mimetype,statuscode,digest,length")
        );
        assert_eq!(param(&url, "matchType").as_deref(), Some("domain"));
        assert_eq!(param(&url, "collapse"), None);
    }

    #[test]
    fn test_build_cdx_url_prefix_and_collapse() {
        let query = CdxQuery {
            domain: "example.com".to_string(),
            match_mode: MatchMode::Prefix,
            collapse: Some("urlkey".to_string()),
        };
        let url = build_cdx_url(DEFAULT_CDX_ENDPOINT, &query).unwrap();
        assert_eq!(param(&url, "matchType").as_deref(), Some("prefix"));
        assert_eq!(param(&url, "collapse").as_deref(), Some("urlkey"));
    }

    #[test]
    fn test_build_cdx_url_blank_collapse_is_ignored() {
        let query = CdxQuery {
            domain: "example.com".to_string(),
            collapse: Some("  ".to_string()),
            ..Default::default()
        };
        let url = build_cdx_url(DEFAULT_CDX_ENDPOINT, &query).unwrap();
        assert_eq!(param(&url, "collapse"), None);
    }

    #[test]
    fn test_build_cdx_url_rejects_empty_domain() {
        let query = CdxQuery::default();
        assert!(matches!(
            build_cdx_url(DEFAULT_CDX_ENDPOINT, &query),
            Err(CdxError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_build_cdx_url_rejects_bad_endpoint() {
        let query = CdxQuery {
            domain: "example.com".to_string(),
            ..Default::default()
        };
        assert!(build_cdx_url("not a url", &query).is_err());
    }
}
