//! The site route table driven end to end through the router.

use std::sync::Arc;

use vconnect_client::routes::controller;
use vconnect_pages::auth::LOGIN_PATH;
use vconnect_pages::host::MountPoint;
use vconnect_pages::testing::{MemoryMount, MemorySessionStore, MemoryShell, StaticFetcher};

fn page(main: &str) -> String {
	format!("<html><head><title>t</title></head><body><main>{main}</main></body></html>")
}

fn site_fetcher() -> StaticFetcher {
	StaticFetcher::new()
		.page("/src/views/index.html", page("<h1>Volunteer Connect</h1>"))
		.page("/src/views/opportunities.html", page("<h1>Opportunities</h1>"))
		.page("/src/views/statistics.html", page("<h1>Statistics</h1>"))
		.page("/src/views/404.html", page("<h1>Page not found</h1>"))
}

#[tokio::test]
async fn test_browsing_the_site() {
	let shell = Arc::new(MemoryShell::new("/"));
	let mount = Arc::new(MemoryMount::new());
	let fetcher = Arc::new(site_fetcher());
	let store = Arc::new(MemorySessionStore::new());
	let controller = controller(shell.clone(), mount.clone(), fetcher, store.clone());

	controller.handle_location().await;
	assert_eq!(mount.content(), "<h1>Volunteer Connect</h1>");

	controller.navigate("/opportunities").await;
	assert_eq!(mount.content(), "<h1>Opportunities</h1>");
	assert_eq!(shell.history(), vec!["/opportunities".to_string()]);
}

#[tokio::test]
async fn test_unknown_path_mounts_the_404_fragment() {
	let shell = Arc::new(MemoryShell::new("/missing"));
	let mount = Arc::new(MemoryMount::new());
	let fetcher = Arc::new(site_fetcher());
	let store = Arc::new(MemorySessionStore::new());
	let controller = controller(shell, mount.clone(), fetcher, store);

	controller.handle_location().await;
	assert_eq!(mount.content(), "<h1>Page not found</h1>");
}

#[tokio::test]
async fn test_statistics_requires_login() {
	let shell = Arc::new(MemoryShell::new("/statistics"));
	let mount = Arc::new(MemoryMount::new());
	let fetcher = Arc::new(site_fetcher());
	let store = Arc::new(MemorySessionStore::new());
	let controller = controller(shell.clone(), mount.clone(), fetcher.clone(), store.clone());

	controller.handle_location().await;
	assert_eq!(shell.redirects(), vec![LOGIN_PATH.to_string()]);
	assert_eq!(mount.content(), "");
	assert!(fetcher.fetched().is_empty());

	// After login the same location loads.
	vconnect_client::session::login(store.as_ref(), "Jas", "jas@example.com");
	controller.handle_location().await;
	assert_eq!(mount.content(), "<h1>Statistics</h1>");
}
