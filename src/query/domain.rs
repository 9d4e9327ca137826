use reqwest::Url;

use crate::error::{CdxError, Result};

/// Normalize a user-supplied domain into the bare host the CDX API expects.
///
/// Strips an `http://`/`https://` scheme, anything after the host, and a
/// leading `www.`, then lowercases the result. Internationalized names are
/// returned in their punycode form.
pub fn normalize_domain(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CdxError::InvalidInput(
            "domain name is required (use -u or --url)".to_string(),
        ));
    }

    let lowered = trimmed.to_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);

    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    let host = host.trim_end_matches('.');

    if host.is_empty() {
        return Err(CdxError::InvalidInput(format!(
            "no host name found in '{}'",
            trimmed
        )));
    }

    let invalid = || CdxError::InvalidInput(format!("'{}' is not a valid domain name", trimmed));

    // Url applies IDNA, so internationalized names come back in punycode form
    let parsed = Url::parse(&format!("http://{}/", host)).map_err(|_| invalid())?;
    if !parsed.username().is_empty() || parsed.password().is_some() {
        return Err(invalid());
    }
    let ascii_host = parsed.host_str().ok_or_else(invalid)?;
    if ascii_host.starts_with('.') || ascii_host.contains("..") {
        return Err(invalid());
    }

    Ok(match parsed.port() {
        Some(port) => format!("{}:{}", ascii_host, port),
        None => ascii_host.to_string(),
    })
}
