//! Browser tests for resize tracking.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use night_sky::components::night_sky::Viewport;
use night_sky::components::night_sky::viewport::{DEFAULT_DEBOUNCE, ViewportTracker, measure};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
	web_sys::window().expect("browser window")
}

async fn sleep(ms: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		window()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
			.expect("setTimeout");
	});
	JsFuture::from(promise).await.expect("timer resolves");
}

fn fire_resize() {
	let event = Event::new("resize").expect("resize event");
	window().dispatch_event(&event).expect("dispatch resize");
}

/// Tracker that counts notifications and records the last size.
///
/// Starts from a size the window cannot have, so the first real measurement
/// always counts as a change.
fn counting_tracker() -> (ViewportTracker, Rc<Cell<u32>>, Rc<Cell<Option<Viewport>>>) {
	let (calls, last) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(None)));
	let (calls_cb, last_cb) = (calls.clone(), last.clone());
	let tracker = ViewportTracker::attach(window(), Viewport::new(1, 1), DEFAULT_DEBOUNCE, move |vp| {
		calls_cb.set(calls_cb.get() + 1);
		last_cb.set(Some(vp));
	})
	.unwrap_or_else(|e: JsValue| panic!("attach failed: {e:?}"));
	(tracker, calls, last)
}

#[wasm_bindgen_test]
async fn resize_burst_notifies_once() {
	let (tracker, calls, last) = counting_tracker();

	fire_resize();
	sleep(50).await;
	fire_resize();
	sleep(120).await;
	assert_eq!(calls.get(), 0, "notified inside the quiet window");

	sleep(400).await;
	assert_eq!(calls.get(), 1);
	assert_eq!(last.get(), measure(&window()));

	drop(tracker);
}

#[wasm_bindgen_test]
async fn dropping_tracker_cancels_pending_notification() {
	let (tracker, calls, _) = counting_tracker();

	fire_resize();
	sleep(50).await;
	drop(tracker);

	sleep(400).await;
	assert_eq!(calls.get(), 0);
}

#[wasm_bindgen_test]
async fn dropped_tracker_ignores_later_resizes() {
	let (tracker, calls, _) = counting_tracker();
	drop(tracker);

	fire_resize();
	sleep(400).await;
	assert_eq!(calls.get(), 0);
}
