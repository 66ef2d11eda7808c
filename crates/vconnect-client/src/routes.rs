//! Route registrations for the VolunteerConnect site.
//!
//! One entry per page view, registered in the order the site grew them.
//! Fragment sources live under `/src/views/`; the static server exposes that
//! prefix alongside `/css`, `/js`, and `/assets`.

use std::sync::Arc;

use vconnect_pages::auth::AuthGate;
use vconnect_pages::fetch::FragmentFetcher;
use vconnect_pages::host::{MountPoint, Shell};
use vconnect_pages::nav::NavigationController;
use vconnect_pages::routes::RouteTable;
use vconnect_pages::session::SessionStore;

/// Paths that require a session marker before their fragment loads.
///
/// Extending this list is the whole job of protecting a new page.
pub const PROTECTED_PATHS: [&str; 2] = ["/statistics", "/event-planning"];

/// Builds the site route table.
pub fn routes() -> RouteTable {
	RouteTable::new()
		.route("/", "/src/views/index.html")
		.route("/about", "/src/views/about.html")
		.route("/contact", "/src/views/contact.html")
		.route("/events", "/src/views/events.html")
		.route("/gallery", "/src/views/gallery.html")
		.route("/login", "/src/views/login.html")
		.route("/opportunities", "/src/views/opportunities.html")
		.route("/privacy", "/src/views/privacy.html")
		.route("/terms", "/src/views/terms.html")
		.route("/404", "/src/views/404.html")
		.route("/statistics", "/src/views/statistics.html")
		.route("/event-planning", "/src/views/event-planning.html")
}

/// Wires the site controller: full route table plus the protected paths.
pub fn controller(
	shell: Arc<dyn Shell>,
	mount: Arc<dyn MountPoint>,
	fetcher: Arc<dyn FragmentFetcher>,
	store: Arc<dyn SessionStore>,
) -> NavigationController {
	NavigationController::new(routes(), shell, mount, fetcher, AuthGate::new(store))
		.protect_all(PROTECTED_PATHS)
}
