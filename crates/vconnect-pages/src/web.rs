//! Browser implementations of the host seams.
//!
//! Compiled only for `wasm32-unknown-unknown`. Browser API failures are not
//! recoverable from inside the router, so they are logged and swallowed;
//! navigation carries on with whatever the page still offers.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::error_log;
use crate::host::{MountPoint, Shell};
use crate::session::{SESSION_KEY, SessionStore};

/// [`Shell`] backed by the real `window`: History API, location redirects,
/// and anchor restyling.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowShell;

impl WindowShell {
	/// Creates the shell.
	pub fn new() -> Self {
		Self
	}
}

impl Shell for WindowShell {
	fn current_path(&self) -> String {
		web_sys::window()
			.and_then(|window| window.location().pathname().ok())
			.unwrap_or_else(|| "/".to_string())
	}

	fn push_history(&self, path: &str) {
		let Some(window) = web_sys::window() else {
			return;
		};
		match window.history() {
			Ok(history) => {
				if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
					error_log!("pushState failed for {path}: {err:?}");
				}
			}
			Err(err) => error_log!("history unavailable: {err:?}"),
		}
	}

	fn redirect(&self, path: &str) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Err(err) = window.location().set_href(path) {
			error_log!("redirect to {path} failed: {err:?}");
		}
	}

	fn highlight_links(&self, path: &str) {
		let Some(document) = web_sys::window().and_then(|window| window.document()) else {
			return;
		};
		let Ok(anchors) = document.query_selector_all("a") else {
			return;
		};

		for index in 0..anchors.length() {
			let Some(node) = anchors.item(index) else {
				continue;
			};
			let Ok(anchor) = node.dyn_into::<Element>() else {
				continue;
			};

			let class_list = anchor.class_list();
			if anchor.get_attribute("href").as_deref() == Some(path) {
				let _ = class_list.add_1("active");
			} else {
				let _ = class_list.remove_1("active");
			}
		}
	}
}

/// [`MountPoint`] over a live DOM element.
#[derive(Debug, Clone)]
pub struct DomMount {
	element: Element,
}

impl DomMount {
	/// Wraps an element.
	pub fn new(element: Element) -> Self {
		Self { element }
	}

	/// Looks the mount element up by id.
	pub fn by_id(id: &str) -> Option<Self> {
		web_sys::window()?
			.document()?
			.get_element_by_id(id)
			.map(Self::new)
	}
}

impl MountPoint for DomMount {
	fn set_content(&self, html: &str) {
		self.element.set_inner_html(html);
	}

	fn content(&self) -> String {
		self.element.inner_html()
	}
}

/// [`SessionStore`] over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
	/// Creates the store.
	pub fn new() -> Self {
		Self
	}

	fn storage() -> Option<web_sys::Storage> {
		web_sys::window().and_then(|window| window.local_storage().ok().flatten())
	}
}

impl SessionStore for LocalSessionStore {
	fn raw(&self) -> Option<String> {
		Self::storage().and_then(|storage| storage.get_item(SESSION_KEY).ok().flatten())
	}

	fn set_raw(&self, value: &str) {
		let Some(storage) = Self::storage() else {
			return;
		};
		if let Err(err) = storage.set_item(SESSION_KEY, value) {
			error_log!("failed to persist session marker: {err:?}");
		}
	}

	fn clear(&self) {
		let Some(storage) = Self::storage() else {
			return;
		};
		if let Err(err) = storage.remove_item(SESSION_KEY) {
			error_log!("failed to clear session marker: {err:?}");
		}
	}
}
