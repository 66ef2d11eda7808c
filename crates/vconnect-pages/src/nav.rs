//! Navigation controller.
//!
//! The controller owns the navigation protocol: auth-gate the path, restyle
//! the active links, resolve the route, and hand the fragment source to the
//! content loader. Initial page load, link clicks, and popstate all funnel
//! into `handle_location`, so handling the same location twice must converge
//! to the same mounted fragment.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::auth::AuthGate;
use crate::fetch::FragmentFetcher;
use crate::host::{MountPoint, Shell};
use crate::info_log;
use crate::loader::{ContentLoader, NavigationSequence};
use crate::rewrite::PathRewriter;
use crate::routes::{NOT_FOUND_PATH, RouteTable};

/// Markup written to the mount point when not even a `/404` route exists.
pub const NOT_FOUND_HTML: &str = r#"<h1 class="text-center">404 - Page Not Found</h1>"#;

/// The controller's view of where it is and what it has mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
	/// The most recently handled path.
	pub path: String,
	/// The fragment source mounted for that path, when one resolved.
	pub fragment: Option<String>,
}

/// Intercepts navigation events and drives the content loader.
pub struct NavigationController {
	table: RouteTable,
	protected: Vec<String>,
	gate: AuthGate,
	shell: Arc<dyn Shell>,
	loader: ContentLoader,
	sequence: NavigationSequence,
	state: Mutex<NavigationState>,
}

impl NavigationController {
	/// Creates a controller over the given route table and host seams.
	pub fn new(
		table: RouteTable,
		shell: Arc<dyn Shell>,
		mount: Arc<dyn MountPoint>,
		fetcher: Arc<dyn FragmentFetcher>,
		gate: AuthGate,
	) -> Self {
		Self {
			table,
			protected: Vec::new(),
			gate,
			shell,
			loader: ContentLoader::new(fetcher, mount),
			sequence: NavigationSequence::new(),
			state: Mutex::new(NavigationState::default()),
		}
	}

	/// Marks `path` as requiring a session marker before its fragment loads.
	pub fn protect(mut self, path: impl Into<String>) -> Self {
		self.protected.push(path.into());
		self
	}

	/// Marks every path in `paths` as protected.
	pub fn protect_all<I, S>(mut self, paths: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.protected.extend(paths.into_iter().map(Into::into));
		self
	}

	/// Replaces the content loader's rewrite rules.
	pub fn with_rewriter(mut self, rewriter: PathRewriter) -> Self {
		self.loader = self.loader.with_rewriter(rewriter);
		self
	}

	/// Returns the route table.
	pub fn table(&self) -> &RouteTable {
		&self.table
	}

	/// Returns a snapshot of the navigation state.
	pub fn state(&self) -> NavigationState {
		self.state.lock().clone()
	}

	/// Pushes `path` into history without a reload, then handles it.
	pub async fn navigate(&self, path: &str) {
		self.shell.push_history(path);
		self.handle_location().await;
	}

	/// Handles the current location.
	///
	/// Consults the auth gate for protected paths, restyles active links,
	/// resolves the route, and delegates to the loader; unresolved paths
	/// fall back to the `/404` route and then to [`NOT_FOUND_HTML`].
	pub async fn handle_location(&self) {
		let path = self.shell.current_path();
		let token = self.sequence.issue();

		if self.is_protected(&path) && !self.gate.require(self.shell.as_ref()) {
			info_log!("blocked unauthenticated navigation to {path}");
			return;
		}

		self.shell.highlight_links(&path);

		let resolved = self
			.table
			.resolve(&path)
			.or_else(|| self.table.resolve(NOT_FOUND_PATH));

		match resolved {
			Some(route) => {
				self.loader.load(route.fragment(), &token).await;
				self.remember(&path, Some(route.fragment()));
			}
			None => {
				self.loader.mount_raw(NOT_FOUND_HTML, &token);
				self.remember(&path, None);
			}
		}
	}

	fn is_protected(&self, path: &str) -> bool {
		self.protected.iter().any(|p| p == path)
	}

	fn remember(&self, path: &str, fragment: Option<&str>) {
		let mut state = self.state.lock();
		state.path = path.to_string();
		state.fragment = fragment.map(str::to_string);
	}
}

impl std::fmt::Debug for NavigationController {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationController")
			.field("routes", &self.table.len())
			.field("protected", &self.protected)
			.finish()
	}
}
