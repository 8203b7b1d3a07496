//! Viewport measurement and debounced resize tracking.
//!
//! [`ResizeDebouncer`] is the timing logic on its own, driven by explicit
//! timestamps so it can be tested off the browser. [`ViewportTracker`] wires it
//! to the window's `resize` event and a `setTimeout` timer.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::types::Viewport;

/// Quiet period after the last resize before the new size is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Coalesces bursts of resize signals into one applied size.
#[derive(Debug)]
pub struct ResizeDebouncer {
	debounce: Duration,
	last_signal: Option<Duration>,
	pending: Option<Viewport>,
	last_applied: Viewport,
}

impl ResizeDebouncer {
	pub fn new(debounce: Duration, initial: Viewport) -> Self {
		Self {
			debounce,
			last_signal: None,
			pending: None,
			last_applied: initial,
		}
	}

	/// Record a raw resize at time `now`. Restarts the quiet period.
	///
	/// Returns `false` when the signal is ignored because nothing is pending
	/// and the size matches what is already applied.
	pub fn signal(&mut self, now: Duration, viewport: Viewport) -> bool {
		if self.pending.is_none() && viewport == self.last_applied {
			return false;
		}
		self.pending = Some(viewport);
		self.last_signal = Some(now);
		true
	}

	/// Take the pending size if the quiet period has elapsed.
	pub fn poll(&mut self, now: Duration) -> Option<Viewport> {
		let pending = self.pending?;
		let last = self.last_signal?;
		if now.saturating_sub(last) < self.debounce {
			return None;
		}
		self.pending = None;
		self.last_signal = None;
		self.last_applied = pending;
		Some(pending)
	}

	/// Time left before [`poll`](Self::poll) would apply, if anything is pending.
	pub fn time_until_apply(&self, now: Duration) -> Option<Duration> {
		let _pending = self.pending?;
		let last = self.last_signal?;
		Some(self.debounce.saturating_sub(now.saturating_sub(last)))
	}

	/// Mark a size as applied without waiting, e.g. the first measurement.
	pub fn apply_now(&mut self, viewport: Viewport) {
		self.pending = None;
		self.last_signal = None;
		self.last_applied = viewport;
	}

	pub fn last_applied(&self) -> Viewport {
		self.last_applied
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}

/// Current inner size of the browser window.
pub fn measure(window: &Window) -> Option<Viewport> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some(Viewport::new(width.max(0.0) as u32, height.max(0.0) as u32))
}

fn now(window: &Window) -> Duration {
	window
		.performance()
		.map(|p| Duration::from_secs_f64(p.now().max(0.0) / 1000.0))
		.unwrap_or_default()
}

struct TrackerState {
	debouncer: ResizeDebouncer,
	timer: Option<i32>,
	on_change: Box<dyn Fn(Viewport)>,
}

/// Listens for window resizes and reports settled sizes.
///
/// Dropping the tracker cancels any pending timer and detaches the listener,
/// so no update lands after the host view is gone.
pub struct ViewportTracker {
	window: Window,
	state: Rc<RefCell<TrackerState>>,
	on_resize: Closure<dyn FnMut()>,
	// Kept alive for as long as a timer may reference it.
	_on_timeout: Rc<Closure<dyn FnMut()>>,
}

impl ViewportTracker {
	/// Attach to `window`. `initial` is the size the caller is already showing.
	pub fn attach(
		window: Window,
		initial: Viewport,
		debounce: Duration,
		on_change: impl Fn(Viewport) + 'static,
	) -> Result<Self, JsValue> {
		let state = Rc::new(RefCell::new(TrackerState {
			debouncer: ResizeDebouncer::new(debounce, initial),
			timer: None,
			on_change: Box::new(on_change),
		}));

		let timeout_slot: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));

		let (state_timeout, window_timeout, slot_timeout) =
			(state.clone(), window.clone(), timeout_slot.clone());
		let on_timeout = Rc::new(Closure::<dyn FnMut()>::new(move || {
			let t = now(&window_timeout);
			let settled = {
				let mut s = state_timeout.borrow_mut();
				s.timer = None;
				let settled = s.debouncer.poll(t);
				// Timer fired early relative to the performance clock; wait out the rest.
				if settled.is_none() {
					if let (Some(wait), Some(cb)) =
						(s.debouncer.time_until_apply(t), slot_timeout.borrow().as_ref())
					{
						s.timer = schedule(&window_timeout, cb, wait);
					}
				}
				settled
			};
			if let Some(viewport) = settled {
				debug!(
					"night-sky: viewport settled at {}x{}",
					viewport.width, viewport.height
				);
				(state_timeout.borrow().on_change)(viewport);
			}
		}));
		let timeout_js: &JsValue = (*on_timeout).as_ref();
		let timeout_fn = timeout_js.unchecked_ref::<js_sys::Function>().clone();
		*timeout_slot.borrow_mut() = Some(timeout_fn.clone());

		let (state_resize, window_resize) = (state.clone(), window.clone());
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let Some(viewport) = measure(&window_resize) else {
				warn!("night-sky: could not measure window on resize");
				return;
			};
			let mut s = state_resize.borrow_mut();
			if !s.debouncer.signal(now(&window_resize), viewport) {
				return;
			}
			if let Some(handle) = s.timer.take() {
				window_resize.clear_timeout_with_handle(handle);
			}
			s.timer = schedule(&window_resize, &timeout_fn, debounce);
		});
		window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

		Ok(Self {
			window,
			state,
			on_resize,
			_on_timeout: on_timeout,
		})
	}
}

fn schedule(window: &Window, callback: &js_sys::Function, wait: Duration) -> Option<i32> {
	match window.set_timeout_with_callback_and_timeout_and_arguments_0(callback, wait.as_millis() as i32) {
		Ok(handle) => Some(handle),
		Err(e) => {
			warn!("night-sky: failed to schedule resize timer: {:?}", e);
			None
		}
	}
}

impl Drop for ViewportTracker {
	fn drop(&mut self) {
		if let Some(handle) = self.state.borrow_mut().timer.take() {
			self.window.clear_timeout_with_handle(handle);
		}
		if let Err(e) = self
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
		{
			warn!("night-sky: failed to detach resize listener: {:?}", e);
		}
	}
}
