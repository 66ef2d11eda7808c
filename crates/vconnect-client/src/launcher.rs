//! Browser entry point.
//!
//! Wires the navigation controller to the live window: a popstate listener
//! for back/forward, one delegated click listener for link interception, and
//! the initial dispatch. Delegation means links inside freshly spliced
//! fragments keep working without re-registering anything, and repeated
//! dispatches attach nothing twice.

use std::rc::Rc;
use std::sync::Arc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use vconnect_pages::fetch::HttpFetcher;
use vconnect_pages::nav::NavigationController;
use vconnect_pages::web::{DomMount, LocalSessionStore, WindowShell};

use crate::routes;

/// Id of the element the router mounts fragments into.
pub const MOUNT_ID: &str = "app";

/// Starts the client: builds the controller and installs the listeners.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	console_error_panic_hook::set_once();

	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("no document"))?;
	let mount = DomMount::by_id(MOUNT_ID)
		.ok_or_else(|| JsValue::from_str("missing mount element #app"))?;

	let controller = Rc::new(routes::controller(
		Arc::new(WindowShell::new()),
		Arc::new(mount),
		Arc::new(HttpFetcher::new()),
		Arc::new(LocalSessionStore::new()),
	));

	install_popstate(&window, Rc::clone(&controller))?;
	install_click_delegation(&document, Rc::clone(&controller))?;

	// Initial dispatch for the path the page was opened on.
	spawn_local(async move {
		controller.handle_location().await;
	});

	Ok(())
}

fn install_popstate(
	window: &web_sys::Window,
	controller: Rc<NavigationController>,
) -> Result<(), JsValue> {
	let on_popstate = Closure::<dyn FnMut()>::new(move || {
		let controller = Rc::clone(&controller);
		spawn_local(async move {
			controller.handle_location().await;
		});
	});
	window.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())?;
	on_popstate.forget();
	Ok(())
}

fn install_click_delegation(
	document: &web_sys::Document,
	controller: Rc<NavigationController>,
) -> Result<(), JsValue> {
	let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
		let Some(path) = internal_href(&event) else {
			return;
		};
		event.prevent_default();

		let controller = Rc::clone(&controller);
		spawn_local(async move {
			controller.navigate(&path).await;
		});
	});
	document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
	on_click.forget();
	Ok(())
}

/// Returns the href of the clicked in-page link, if the click landed on one.
///
/// Only root-relative hrefs are intercepted; external links and bare
/// anchors keep their default behavior.
fn internal_href(event: &MouseEvent) -> Option<String> {
	let target = event.target()?;
	let element = target.dyn_into::<Element>().ok()?;
	let anchor = element.closest("a").ok()??;
	let href = anchor.get_attribute("href")?;
	href.starts_with('/').then_some(href)
}
