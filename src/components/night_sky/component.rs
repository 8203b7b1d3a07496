//! Leptos component drawing the starry backdrop behind page content.
//!
//! The sky is generated right away for the initial viewport (the fallback or a
//! page-supplied hint), then regenerated once the window is measured and after
//! every debounced resize. Unmounting drops the tracker, which cancels the
//! pending timer and detaches the resize listener.

use leptos::prelude::*;
use log::{info, warn};
use web_sys::Window;

use super::config::SkyConfig;
use super::render::{bubble_style, content_style, sky_style, star_style};
use super::state::SkyState;
use super::theme::SkyTheme;
use super::types::Viewport;
use super::viewport::{DEFAULT_DEBOUNCE, ViewportTracker, measure};

/// Full-screen gradient sky with stars and floating bubbles.
///
/// `initial` is the viewport to lay out before the window is measured.
#[component]
pub fn StarryNightSky(
	#[prop(default = Viewport::FALLBACK)] initial: Viewport,
	#[prop(default = SkyConfig::default())] config: SkyConfig,
	#[prop(default = SkyTheme::default())] theme: SkyTheme,
	children: Children,
) -> impl IntoView {
	let sky = RwSignal::new(SkyState::new(initial, &config));
	let tracker = StoredValue::new_local(None::<ViewportTracker>);

	Effect::new(move |_| {
		if tracker.with_value(Option::is_some) {
			return;
		}
		let Some(window): Option<Window> = web_sys::window() else {
			warn!("night-sky: no window, keeping {}x{}", initial.width, initial.height);
			return;
		};

		let measured = measure(&window).unwrap_or(initial);
		info!(
			"night-sky: measured viewport {}x{}",
			measured.width, measured.height
		);
		sky.maybe_update(|s| s.resize(measured, &config));

		let on_change = move |viewport: Viewport| {
			sky.maybe_update(|s| s.resize(viewport, &config));
		};
		match ViewportTracker::attach(window, measured, DEFAULT_DEBOUNCE, on_change) {
			Ok(t) => tracker.set_value(Some(t)),
			Err(e) => warn!("night-sky: resize tracking unavailable: {:?}", e),
		}
	});

	on_cleanup(move || {
		tracker.try_update_value(|t| {
			t.take();
		});
	});

	let (star_theme, bubble_theme) = (theme.clone(), theme.clone());
	let stars_view = move || {
		sky.with(|s| {
			s.stars
				.iter()
				.map(|star| {
					let style = star_style(star, &star_theme);
					view! { <div class="star" style=style /> }
				})
				.collect_view()
		})
	};
	let bubbles_view = move || {
		sky.with(|s| {
			s.bubbles
				.iter()
				.map(|bubble| {
					let style = bubble_style(bubble, &bubble_theme);
					view! { <div class="bubble" style=style /> }
				})
				.collect_view()
		})
	};

	let (outer_style, inner_style) = (sky_style(&theme), content_style(&theme));

	view! {
		<div class="starry-night-sky" style=outer_style>
			<div class="stars" style="position: absolute; inset: 0;">
				{stars_view}
			</div>
			<div class="bubbles" style="position: absolute; inset: 0;">
				{bubbles_view}
			</div>
			<div class="sky-content" style=inner_style>
				{children()}
			</div>
		</div>
	}
}
