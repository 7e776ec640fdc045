//! Local page host standing in for the article platform.

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const ARTICLE_HTML: &str = include_str!("../fixtures/article.html");

pub struct TestServer {
	addr: std::net::SocketAddr,
	handle: JoinHandle<()>,
}

impl TestServer {
	/// Serves `/s/article`, a redirecting short link `/s/short`, a page
	/// without known layout at `/s/deleted` and a 404 at `/s/missing`.
	pub async fn start() -> Self {
		let app = Router::new()
			.route("/s/article", get(|| async { Html(ARTICLE_HTML) }))
			.route("/s/short", get(|| async { Redirect::temporary("/s/article") }))
			.route("/s/deleted", get(|| async { Html("<html><head><title>Deleted</title></head><body><p>gone</p></body></html>") }))
			.route("/s/missing", get(|| async { (StatusCode::NOT_FOUND, "no such article") }));

		Self::serve(app).await
	}

	pub async fn serve(app: Router) -> Self {
		let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind test server");
		let addr = listener.local_addr().expect("Failed to read test server address");
		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.expect("Test server failed");
		});

		Self { addr, handle }
	}

	pub fn url(&self) -> String {
		format!("http://{}", self.addr)
	}

	pub fn shutdown(self) {
		self.handle.abort();
	}
}
