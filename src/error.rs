//! Error taxonomy for the query pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{EXIT_INVALID_INPUT, EXIT_IO, EXIT_NETWORK, EXIT_PARSE};

#[derive(Error, Debug)]
pub enum CdxError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("network error: {}", format_network(.status, .message))]
    Network { status: Option<u16>, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CdxError {
    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => EXIT_INVALID_INPUT,
            Self::Network { .. } => EXIT_NETWORK,
            Self::Parse(_) => EXIT_PARSE,
            Self::Io { .. } => EXIT_IO,
        }
    }
}

fn format_network(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP {} ({})", code, message),
        None => message.to_string(),
    }
}

impl From<reqwest::Error> for CdxError {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("request timed out: {}", e)
        } else if e.is_connect() {
            format!("connection failed: {}", e)
        } else {
            e.to_string()
        };
        Self::Network {
            status: e.status().map(|s| s.as_u16()),
            message,
        }
    }
}

impl From<serde_json::Error> for CdxError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CdxError>;
