//! Route table: path-to-fragment registrations.
//!
//! Routes are registered once at application start and are immutable
//! afterwards. Matching is exact string equality, with no pattern or path
//! parameter support. Duplicate paths are allowed; the first registration wins, so
//! registration order is significant.

/// Path of the designated not-found route.
///
/// When a location resolves to nothing, the controller retries with this
/// path before falling back to a hard-coded message.
pub const NOT_FOUND_PATH: &str = "/404";

/// A single route: a URL path mapped to a fragment source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
	path: String,
	fragment: String,
}

impl Route {
	/// Creates a new route.
	pub fn new(path: impl Into<String>, fragment: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			fragment: fragment.into(),
		}
	}

	/// Returns the URL path this route answers to.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the path of the fragment source to load.
	pub fn fragment(&self) -> &str {
		&self.fragment
	}
}

/// Ordered collection of routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	routes: Vec<Route>,
}

impl RouteTable {
	/// Creates an empty route table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a route, returning the table for chaining.
	pub fn route(mut self, path: impl Into<String>, fragment: impl Into<String>) -> Self {
		self.routes.push(Route::new(path, fragment));
		self
	}

	/// Returns the first route whose path equals `path` exactly.
	///
	/// Absence is signalled by `None`, never by an error.
	pub fn resolve(&self, path: &str) -> Option<&Route> {
		self.routes.iter().find(|route| route.path() == path)
	}

	/// Returns the number of registered routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns `true` when no routes are registered.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// Iterates over the registered routes in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Route> {
		self.routes.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_exact_match() {
		let table = RouteTable::new()
			.route("/", "/src/views/index.html")
			.route("/about", "/src/views/about.html");

		assert_eq!(
			table.resolve("/about").map(Route::fragment),
			Some("/src/views/about.html")
		);
	}

	#[test]
	fn test_resolve_missing_is_none() {
		let table = RouteTable::new().route("/", "/src/views/index.html");
		assert!(table.resolve("/missing").is_none());
	}

	#[test]
	fn test_resolve_is_not_prefix_or_pattern_match() {
		let table = RouteTable::new().route("/events", "/src/views/events.html");

		assert!(table.resolve("/events/42").is_none());
		assert!(table.resolve("/event").is_none());
		assert!(table.resolve("events").is_none());
	}

	#[test]
	fn test_first_registration_wins() {
		let table = RouteTable::new()
			.route("/dup", "first.html")
			.route("/dup", "second.html");

		assert_eq!(table.resolve("/dup").map(Route::fragment), Some("first.html"));
	}

	#[test]
	fn test_len_and_is_empty() {
		let empty = RouteTable::new();
		assert!(empty.is_empty());

		let table = empty.route("/", "index.html");
		assert_eq!(table.len(), 1);
		assert!(!table.is_empty());
	}
}
