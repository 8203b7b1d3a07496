//! night-sky: Deterministic starry-night backdrop for a small artist site.
//!
//! This crate provides a WASM-based background component that scatters
//! non-overlapping stars and drifting bubbles over a gradient sky, laid out
//! from a seeded pseudo-random source so every viewport size has one stable
//! arrangement.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::night_sky::{
	Bubble, ParticleField, SkyConfig, SkyState, Star, StarryNightSky, Viewport, generate_bubbles,
	generate_stars, seeded_random,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("night-sky: logging initialized");
}

/// Load the initial viewport from a script element with id="viewport-hint".
/// Expected format: JSON with { width, height }
fn load_viewport_hint() -> Option<Viewport> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("viewport-hint")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<Viewport>(&json_text) {
		Ok(viewport) => {
			info!(
				"night-sky: viewport hint {}x{}",
				viewport.width, viewport.height
			);
			Some(viewport)
		}
		Err(e) => {
			warn!("night-sky: failed to parse viewport hint: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the sky backdrop with a content overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let initial = load_viewport_hint().unwrap_or(Viewport::FALLBACK);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Night Sky" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{components::night_sky::render::KEYFRAMES}</Style>

		<StarryNightSky initial=initial>
			<div class="sky-overlay">
				<h1>"Night Sky"</h1>
				<p class="subtitle">"Resize the window to scatter a new sky."</p>
			</div>
		</StarryNightSky>
	}
}
