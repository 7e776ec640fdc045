//! Error types for the command-line and HTTP front ends.

use thiserror::Error;

/// Failure to obtain an article page.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("invalid url `{url}`: {reason}")]
	InvalidUrl { url: String, reason: String },

	#[error("unsupported url scheme `{0}`, expected http or https")]
	UnsupportedScheme(String),

	#[error("failed to build http client: {0}")]
	Client(#[source] reqwest::Error),

	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),

	#[error("{url} returned status {status}")]
	Status { url: String, status: reqwest::StatusCode },
}

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Fetch(#[from] FetchError),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("conversion task failed: {0}")]
	Task(#[from] tokio::task::JoinError),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
