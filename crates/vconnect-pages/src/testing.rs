//! In-memory host implementations for exercising the router off-browser.
//!
//! Enabled by the `testing` feature (and within this crate's own tests).
//! Each fake records what was done to it so tests can assert on redirects,
//! highlighted links, and issued fetches.

use std::collections::HashMap;
use parking_lot::Mutex;

use async_trait::async_trait;

use crate::error::FragmentError;
use crate::fetch::{FragmentFetcher, FragmentResponse};
use crate::host::{MountPoint, Shell};
use crate::session::SessionStore;

/// In-memory [`Shell`]: a fake window with a path, a history stack, and a
/// record of redirects and link highlights.
#[derive(Debug)]
pub struct MemoryShell {
	path: Mutex<String>,
	history: Mutex<Vec<String>>,
	redirects: Mutex<Vec<String>>,
	highlighted: Mutex<Vec<String>>,
}

impl MemoryShell {
	/// Creates a shell currently located at `path`.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: Mutex::new(path.into()),
			history: Mutex::new(Vec::new()),
			redirects: Mutex::new(Vec::new()),
			highlighted: Mutex::new(Vec::new()),
		}
	}

	/// Moves the fake window to `path` without recording history, the way a
	/// popstate event changes the location.
	pub fn set_path(&self, path: impl Into<String>) {
		*self.path.lock() = path.into();
	}

	/// Paths pushed onto the history stack, oldest first.
	pub fn history(&self) -> Vec<String> {
		self.history.lock().clone()
	}

	/// Full redirects performed, oldest first.
	pub fn redirects(&self) -> Vec<String> {
		self.redirects.lock().clone()
	}

	/// Paths passed to `highlight_links`, oldest first.
	pub fn highlighted(&self) -> Vec<String> {
		self.highlighted.lock().clone()
	}
}

impl Shell for MemoryShell {
	fn current_path(&self) -> String {
		self.path.lock().clone()
	}

	fn push_history(&self, path: &str) {
		*self.path.lock() = path.to_string();
		self.history
			.lock()
			.push(path.to_string());
	}

	fn redirect(&self, path: &str) {
		self.redirects
			.lock()
			.push(path.to_string());
	}

	fn highlight_links(&self, path: &str) {
		self.highlighted
			.lock()
			.push(path.to_string());
	}
}

/// In-memory [`MountPoint`] holding the mounted markup in a string.
#[derive(Debug, Default)]
pub struct MemoryMount {
	html: Mutex<String>,
}

impl MemoryMount {
	/// Creates an empty mount point.
	pub fn new() -> Self {
		Self::default()
	}
}

impl MountPoint for MemoryMount {
	fn set_content(&self, html: &str) {
		*self.html.lock() = html.to_string();
	}

	fn content(&self) -> String {
		self.html.lock().clone()
	}
}

/// In-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemorySessionStore {
	value: Mutex<Option<String>>,
}

impl MemorySessionStore {
	/// Creates a store with no marker.
	pub fn new() -> Self {
		Self::default()
	}
}

impl SessionStore for MemorySessionStore {
	fn raw(&self) -> Option<String> {
		self.value.lock().clone()
	}

	fn set_raw(&self, value: &str) {
		*self.value.lock() = Some(value.to_string());
	}

	fn clear(&self) {
		*self.value.lock() = None;
	}
}

/// Scripted [`FragmentFetcher`] serving canned responses and recording every
/// fetch it is asked to perform. Unscripted paths answer 404.
#[derive(Debug, Default)]
pub struct StaticFetcher {
	responses: HashMap<String, FragmentResponse>,
	log: Mutex<Vec<String>>,
}

impl StaticFetcher {
	/// Creates a fetcher with no scripted responses.
	pub fn new() -> Self {
		Self::default()
	}

	/// Scripts a 200 response with `body` for `path`.
	pub fn page(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
		self.responses.insert(
			path.into(),
			FragmentResponse {
				status: 200,
				body: body.into(),
			},
		);
		self
	}

	/// Scripts an empty response with the given status for `path`.
	pub fn status(mut self, path: impl Into<String>, status: u16) -> Self {
		self.responses.insert(
			path.into(),
			FragmentResponse {
				status,
				body: String::new(),
			},
		);
		self
	}

	/// Paths fetched so far, oldest first.
	pub fn fetched(&self) -> Vec<String> {
		self.log.lock().clone()
	}
}

#[async_trait(?Send)]
impl FragmentFetcher for StaticFetcher {
	async fn fetch(&self, path: &str) -> Result<FragmentResponse, FragmentError> {
		self.log
			.lock()
			.push(path.to_string());

		Ok(self
			.responses
			.get(path)
			.cloned()
			.unwrap_or(FragmentResponse {
				status: 404,
				body: String::new(),
			}))
	}
}
