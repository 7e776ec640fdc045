//! Article page download.

use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use tracing::{debug, info};
use url::Url;

use crate::error::FetchError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGES: &str = "zh-CN,zh;q=0.9,en;q=0.8";
const MAX_REDIRECTS: usize = 10;

const ARTICLE_HOST: &str = "mp.weixin.qq.com";

/// Parses `raw` as an absolute http(s) URL.
pub fn parse_article_url(raw: &str) -> Result<Url, FetchError> {
	let url = Url::parse(raw.trim()).map_err(|err| FetchError::InvalidUrl {
		url: raw.to_string(),
		reason: err.to_string(),
	})?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		other => Err(FetchError::UnsupportedScheme(other.to_string())),
	}
}

/// `true` for official-account article links such as
/// `https://mp.weixin.qq.com/s/AbCd` or `https://mp.weixin.qq.com/s?__biz=...`.
pub fn is_platform_article(url: &Url) -> bool {
	url.host_str() == Some(ARTICLE_HOST) && (url.path() == "/s" || url.path().starts_with("/s/"))
}

/// HTTP client configured like a desktop browser.
#[derive(Debug, Clone)]
pub struct ArticleFetcher {
	http: reqwest::Client,
}

impl ArticleFetcher {
	pub fn new(timeout: Duration) -> Result<Self, FetchError> {
		let mut headers = HeaderMap::new();
		headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
		headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGES));

		// Short links bounce through hosts whose certificates do not always validate.
		let http = reqwest::Client::builder()
			.user_agent(USER_AGENT)
			.default_headers(headers)
			.redirect(Policy::limited(MAX_REDIRECTS))
			.timeout(timeout)
			.danger_accept_invalid_certs(true)
			.build()
			.map_err(FetchError::Client)?;

		Ok(Self { http })
	}

	/// Downloads the page body after redirects. Non-2xx responses are errors.
	pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
		info!(target = "wxmd", %url, "fetching article");

		let response = self.http.get(url.clone()).send().await?;
		let status = response.status();
		let final_url = response.url().to_string();
		if !status.is_success() {
			return Err(FetchError::Status { url: final_url, status });
		}

		let body = response.text().await?;
		debug!(target = "wxmd", url = %final_url, bytes = body.len(), "article fetched");
		Ok(body)
	}
}
