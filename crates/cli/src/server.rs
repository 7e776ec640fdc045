//! HTTP front end: `POST /api/convert` and the static index page.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use wxmd::ConversionResult;

use crate::error::FetchError;
use crate::fetch::{ArticleFetcher, is_platform_article, parse_article_url};

#[derive(Clone)]
pub struct AppState {
	fetcher: Arc<ArticleFetcher>,
	index_path: Arc<PathBuf>,
}

impl AppState {
	pub fn new(fetcher: ArticleFetcher, index_path: PathBuf) -> Self {
		Self {
			fetcher: Arc::new(fetcher),
			index_path: Arc::new(index_path),
		}
	}
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertRequest {
	pub url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("invalid url: {0}")]
	InvalidUrl(FetchError),
	#[error("unable to reach link: {0}")]
	Unreachable(FetchError),
	#[error("internal error: {0}")]
	Internal(String),
}

impl From<FetchError> for ApiError {
	fn from(err: FetchError) -> Self {
		match err {
			FetchError::InvalidUrl { .. } | FetchError::UnsupportedScheme(_) => ApiError::InvalidUrl(err),
			_ => ApiError::Unreachable(err),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = match &self {
			ApiError::InvalidUrl(_) => StatusCode::UNPROCESSABLE_ENTITY,
			ApiError::Unreachable(_) => StatusCode::BAD_REQUEST,
			ApiError::Internal(_) => {
				error!(target = "wxmd", error = %self, "conversion failed");
				StatusCode::INTERNAL_SERVER_ERROR
			}
		};

		(status, Json(json!({ "detail": self.to_string() }))).into_response()
	}
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(index))
		.route("/api/convert", post(convert))
		.layer(CorsLayer::permissive())
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

async fn convert(State(state): State<AppState>, Json(request): Json<ConvertRequest>) -> Result<Json<ConversionResult>, ApiError> {
	let url = parse_article_url(&request.url)?;
	if !is_platform_article(&url) {
		warn!(target = "wxmd", %url, "url does not look like an article link");
	}

	let html = state.fetcher.fetch(&url).await.inspect_err(|err| {
		warn!(target = "wxmd", %url, error = %err, "fetch failed");
	})?;

	let source = request.url;
	let result = tokio::task::spawn_blocking(move || wxmd::convert_article(&html, &source))
		.await
		.map_err(|err| ApiError::Internal(err.to_string()))?;

	for fallback in &result.fallbacks {
		warn!(target = "wxmd", %url, %fallback, "conversion degraded");
	}
	info!(target = "wxmd", %url, title = %result.title, "conversion finished");
	Ok(Json(result))
}

async fn index(State(state): State<AppState>) -> Response {
	match tokio::fs::read_to_string(state.index_path.as_path()).await {
		Ok(page) => Html(page).into_response(),
		Err(err) => {
			warn!(target = "wxmd", path = %state.index_path.display(), error = %err, "index page unavailable");
			Json(json!({ "error": "index.html not found; place the frontend next to the server" })).into_response()
		}
	}
}
