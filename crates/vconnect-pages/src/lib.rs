//! Client-side fragment router for the VolunteerConnect single-page site.
//!
//! The site ships every page as a static HTML document; this crate turns
//! those documents into an SPA. A [`RouteTable`] maps URL paths to fragment
//! sources, the [`NavigationController`] intercepts navigation events, and
//! the [`ContentLoader`] fetches the fragment, rewrites its asset paths,
//! extracts the `<main>` region, strips scripts, and splices the result into
//! the single mount point. Paths behind the [`AuthGate`] redirect to the
//! login page when no session marker is present.
//!
//! Browser specifics live behind the [`host::Shell`], [`host::MountPoint`],
//! [`fetch::FragmentFetcher`], and [`session::SessionStore`] seams. The
//! `wasm32` implementations are in [`web`]; in-memory doubles for tests sit
//! behind the `testing` feature.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use vconnect_pages::auth::AuthGate;
//! use vconnect_pages::nav::NavigationController;
//! use vconnect_pages::routes::RouteTable;
//! use vconnect_pages::testing::{MemoryMount, MemorySessionStore, MemoryShell, StaticFetcher};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let table = RouteTable::new()
//! 	.route("/", "/src/views/index.html")
//! 	.route("/login", "/src/views/login.html");
//!
//! let shell = Arc::new(MemoryShell::new("/"));
//! let mount = Arc::new(MemoryMount::new());
//! let fetcher = Arc::new(StaticFetcher::new().page(
//! 	"/src/views/index.html",
//! 	"<html><body><main><h1>Welcome</h1></main></body></html>",
//! ));
//! let store = Arc::new(MemorySessionStore::new());
//!
//! let controller = NavigationController::new(
//! 	table,
//! 	shell,
//! 	mount.clone(),
//! 	fetcher,
//! 	AuthGate::new(store),
//! );
//!
//! controller.handle_location().await;
//! # use vconnect_pages::host::MountPoint;
//! assert_eq!(mount.content(), "<h1>Welcome</h1>");
//! # });
//! ```

#![warn(missing_docs)]

pub mod auth;
pub mod error;
pub mod fetch;
pub mod fragment;
pub mod host;
pub mod loader;
pub mod logging;
pub mod nav;
pub mod rewrite;
pub mod routes;
pub mod session;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use auth::{AuthGate, LOGIN_PATH};
pub use error::FragmentError;
pub use fetch::{FragmentFetcher, FragmentResponse, HttpFetcher};
pub use host::{MountPoint, Shell};
pub use loader::{ContentLoader, NavigationSequence, NavigationToken, error_fragment};
pub use nav::{NOT_FOUND_HTML, NavigationController, NavigationState};
pub use rewrite::{PathRewriter, RewriteRule};
pub use routes::{NOT_FOUND_PATH, Route, RouteTable};
pub use session::{SESSION_KEY, SessionStore, UserRecord};
