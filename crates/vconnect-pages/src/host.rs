//! Host abstraction: the seams between the router and the page it runs in.
//!
//! The controller and loader never touch a browser API directly; they talk
//! to these traits. The wasm implementations live in [`crate::web`], the
//! in-memory ones used by tests behind the `testing` feature in
//! [`crate::testing`].

/// The window the router runs inside: history, full redirects, and
/// navigation-link styling.
pub trait Shell {
	/// Returns the current location path.
	fn current_path(&self) -> String;

	/// Pushes `path` onto the history stack without a reload.
	fn push_history(&self, path: &str);

	/// Performs a full redirect to `path`, abandoning the current page.
	fn redirect(&self, path: &str);

	/// Marks every in-page link whose href equals `path` as active, and
	/// clears the marker from all others.
	fn highlight_links(&self, path: &str);
}

/// The single element whose contents the router replaces on navigation.
///
/// At most one fragment is mounted at a time; `set_content` fully replaces
/// whatever was there before.
pub trait MountPoint {
	/// Replaces the mounted markup.
	fn set_content(&self, html: &str);

	/// Returns the currently mounted markup.
	fn content(&self) -> String;
}
