use reqwest::{Client, redirect::Policy};
use std::time::Duration;

use crate::constants::{DEFAULT_REDIRECT_LIMIT, USER_AGENT};
use crate::error::{CdxError, Result};
use crate::types::Cli;

/// Build HTTP client from CLI configuration
pub fn build_http_client(cli: &Cli) -> Result<Client> {
    if cli.timeout == 0 {
        return Err(CdxError::InvalidInput(
            "--timeout must be at least 1 second".to_string(),
        ));
    }

    let mut client_builder = Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .redirect(Policy::limited(DEFAULT_REDIRECT_LIMIT))
        .user_agent(USER_AGENT);

    if let Some(proxy_url) = &cli.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| CdxError::InvalidInput(format!("invalid proxy '{}': {}", proxy_url, e)))?;
        client_builder = client_builder.proxy(proxy);
    }

    client_builder.build().map_err(CdxError::from)
}
