pub mod client;
pub mod fetch;
#[cfg(test)]
pub(crate) mod test_server;

pub use client::build_http_client;
pub use fetch::fetch_cdx_body;
