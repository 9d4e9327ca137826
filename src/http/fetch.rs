use reqwest::{Client, StatusCode, Url};
use std::time::Instant;
use tracing::debug;

use crate::error::{CdxError, Result};

/// Send the index request and return the raw body of a 200 response.
///
/// A single attempt is made; connection failures, timeouts and any status
/// other than 200 are returned as [`CdxError::Network`].
pub async fn fetch_cdx_body(client: &Client, url: &Url) -> Result<String> {
    debug!("requesting {}", url);
    let start_time = Instant::now();

    let resp = client.get(url.clone()).send().await?;
    let status = resp.status();
    debug!("HTTP status: {}", status);

    if status != StatusCode::OK {
        return Err(CdxError::Network {
            status: Some(status.as_u16()),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
        });
    }

    let body = resp.text().await?;
    debug!(
        "received {} bytes in {:?}",
        body.len(),
        start_time.elapsed()
    );
    Ok(body)
}
