//! Auth gate: presence check on the session marker.
//!
//! This is a navigation convenience, not a security boundary. The gate only
//! decides whether a protected view is worth loading; the backend verifies
//! real credentials on every API call it receives.

use std::sync::Arc;

use crate::host::Shell;
use crate::session::SessionStore;

/// Path unauthenticated users are redirected to.
pub const LOGIN_PATH: &str = "/login";

/// Predicate over the session marker, consulted before protected paths load.
#[derive(Clone)]
pub struct AuthGate {
	store: Arc<dyn SessionStore>,
}

impl AuthGate {
	/// Creates a gate over the given session store.
	pub fn new(store: Arc<dyn SessionStore>) -> Self {
		Self { store }
	}

	/// Returns `true` iff the session marker is present.
	pub fn is_authenticated(&self) -> bool {
		self.store.is_present()
	}

	/// Redirects to [`LOGIN_PATH`] unless authenticated.
	///
	/// Returns `true` when navigation may proceed.
	pub fn require(&self, shell: &dyn Shell) -> bool {
		if self.is_authenticated() {
			true
		} else {
			shell.redirect(LOGIN_PATH);
			false
		}
	}
}

impl std::fmt::Debug for AuthGate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AuthGate")
			.field("authenticated", &self.is_authenticated())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{MemorySessionStore, MemoryShell};

	#[test]
	fn test_unauthenticated_without_marker() {
		let store = Arc::new(MemorySessionStore::new());
		let gate = AuthGate::new(store);
		assert!(!gate.is_authenticated());
	}

	#[test]
	fn test_authenticated_with_any_marker() {
		let store = Arc::new(MemorySessionStore::new());
		store.set_raw("{\"name\":\"Jas\"}");
		let gate = AuthGate::new(store);
		assert!(gate.is_authenticated());
	}

	#[test]
	fn test_require_redirects_to_login() {
		let store = Arc::new(MemorySessionStore::new());
		let shell = MemoryShell::new("/statistics");
		let gate = AuthGate::new(store);

		assert!(!gate.require(&shell));
		assert_eq!(shell.redirects(), vec![LOGIN_PATH.to_string()]);
	}

	#[test]
	fn test_require_passes_when_authenticated() {
		let store = Arc::new(MemorySessionStore::new());
		store.set_raw("marker");
		let shell = MemoryShell::new("/statistics");
		let gate = AuthGate::new(store);

		assert!(gate.require(&shell));
		assert!(shell.redirects().is_empty());
	}
}
