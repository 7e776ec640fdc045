//! `wxmd serve`: run the HTTP API.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use crate::error::Result;
use crate::fetch::ArticleFetcher;
use crate::server::{AppState, router};

pub async fn execute(host: &str, port: u16, index: PathBuf, timeout: Duration) -> Result<()> {
	let state = AppState::new(ArticleFetcher::new(timeout)?, index);

	let addr = format!("{host}:{port}");
	let listener = tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
	info!(target = "wxmd", %addr, "listening");

	axum::serve(listener, router(state)).await.context("server stopped")?;
	Ok(())
}
