//! Fragment fetching.
//!
//! The loader depends on the [`FragmentFetcher`] seam rather than a concrete
//! HTTP client. [`HttpFetcher`] is the production implementation; tests use
//! the scripted fetcher from [`crate::testing`].

use async_trait::async_trait;

use crate::error::FragmentError;

/// A fetched fragment: status and raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body as text.
	pub body: String,
}

impl FragmentResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Asynchronous source of fragment documents.
#[async_trait(?Send)]
pub trait FragmentFetcher {
	/// Fetches the resource at `path`.
	///
	/// Transport failures map to [`FragmentError::Load`]; a non-success
	/// status is returned as a normal response and judged by the caller.
	async fn fetch(&self, path: &str) -> Result<FragmentResponse, FragmentError>;
}

/// HTTP-backed fetcher.
///
/// `base` is prepended to every fragment path, so the same instance serves
/// the browser (empty base, same-origin paths) and native tests (a local
/// server's address).
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
	client: reqwest::Client,
	base: String,
}

impl HttpFetcher {
	/// Creates a fetcher resolving paths against the page origin.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a fetcher resolving paths against `base`.
	pub fn with_base(base: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			base: base.into(),
		}
	}
}

#[async_trait(?Send)]
impl FragmentFetcher for HttpFetcher {
	async fn fetch(&self, path: &str) -> Result<FragmentResponse, FragmentError> {
		let url = format!("{}{}", self.base, path);
		let response = self
			.client
			.get(&url)
			.send()
			.await
			.map_err(|err| FragmentError::Load {
				path: path.to_string(),
				reason: err.to_string(),
			})?;

		let status = response.status().as_u16();
		let body = response.text().await.map_err(|err| FragmentError::Load {
			path: path.to_string(),
			reason: err.to_string(),
		})?;

		Ok(FragmentResponse { status, body })
	}
}
