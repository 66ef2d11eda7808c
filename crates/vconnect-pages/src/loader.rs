//! Content loader: fetch, rewrite, extract, sanitize, mount.
//!
//! Failure never propagates past this module. A fetch or structure problem
//! is logged and turned into an inline error fragment mounted in place of
//! the intended content; the distinction between a network blip and a
//! missing file is deliberately not surfaced to the user.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::FragmentError;
use crate::error_log;
use crate::fetch::FragmentFetcher;
use crate::fragment::extract_main;
use crate::host::MountPoint;
use crate::info_log;
use crate::rewrite::PathRewriter;

/// Monotonic counter identifying the newest navigation.
///
/// `issue` hands out a [`NavigationToken`] capturing the counter value at
/// fetch start; once a newer navigation issues its own token, earlier tokens
/// go stale and their responses are discarded instead of mounted.
#[derive(Debug, Default)]
pub struct NavigationSequence {
	counter: Arc<AtomicU64>,
}

impl NavigationSequence {
	/// Creates a sequence starting at zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Advances the sequence and returns a token for the new navigation.
	pub fn issue(&self) -> NavigationToken {
		let seq = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
		NavigationToken {
			seq,
			counter: Arc::clone(&self.counter),
		}
	}
}

/// A claim on the mount point held by one navigation.
#[derive(Debug, Clone)]
pub struct NavigationToken {
	seq: u64,
	counter: Arc<AtomicU64>,
}

impl NavigationToken {
	/// Returns `true` while no newer navigation has been issued.
	pub fn is_current(&self) -> bool {
		self.counter.load(Ordering::SeqCst) == self.seq
	}
}

/// Fetches fragments and splices them into the mount point.
pub struct ContentLoader {
	fetcher: Arc<dyn FragmentFetcher>,
	rewriter: PathRewriter,
	mount: Arc<dyn MountPoint>,
}

impl ContentLoader {
	/// Creates a loader with the standard rewrite rules.
	pub fn new(fetcher: Arc<dyn FragmentFetcher>, mount: Arc<dyn MountPoint>) -> Self {
		Self {
			fetcher,
			rewriter: PathRewriter::standard(),
			mount,
		}
	}

	/// Replaces the rewrite rules.
	pub fn with_rewriter(mut self, rewriter: PathRewriter) -> Self {
		self.rewriter = rewriter;
		self
	}

	/// Loads `source` and mounts its sanitized main region.
	///
	/// On failure the inline error fragment is mounted instead. Either way,
	/// nothing is mounted once `token` has gone stale.
	pub async fn load(&self, source: &str, token: &NavigationToken) {
		info_log!("loading fragment {source}");

		match self.prepare(source).await {
			Ok(content) => {
				if token.is_current() {
					self.mount.set_content(&content);
				} else {
					info_log!("discarding stale response for {source}");
				}
			}
			Err(err) => {
				error_log!("{err}");
				if token.is_current() {
					self.mount.set_content(&error_fragment(err.path()));
				}
			}
		}
	}

	/// Writes markup straight to the mount point, honoring the token.
	///
	/// Used by the controller for its hard-coded not-found fallback.
	pub fn mount_raw(&self, html: &str, token: &NavigationToken) {
		if token.is_current() {
			self.mount.set_content(html);
		}
	}

	async fn prepare(&self, source: &str) -> Result<String, FragmentError> {
		let response = self.fetcher.fetch(source).await?;
		if !response.is_success() {
			return Err(FragmentError::Load {
				path: source.to_string(),
				reason: format!("HTTP status {}", response.status),
			});
		}

		let rewritten = self.rewriter.apply(&response.body);
		extract_main(&rewritten, source)
	}
}

impl std::fmt::Debug for ContentLoader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ContentLoader")
			.field("rewrite_rules", &self.rewriter.len())
			.finish()
	}
}

/// The inline fragment mounted when a load fails, naming the failed source.
pub fn error_fragment(source: &str) -> String {
	format!(
		r#"<div class="container text-center mt-5">
    <h1>Error Loading Content</h1>
    <p class="text-danger">Failed to load {source}</p>
    <p class="text-muted">Please try again later or contact support.</p>
</div>"#
	)
}
