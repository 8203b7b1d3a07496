//! Inline CSS for the sky and its particles.
//!
//! Particles are absolutely positioned `div`s; everything that varies per
//! particle goes into its `style` attribute, and the shared animations live in
//! [`KEYFRAMES`].

use std::fmt::Write;

use super::particles::{Bubble, Star};
use super::theme::SkyTheme;

/// Keyframes referenced by star and bubble styles.
pub const KEYFRAMES: &str = "\
@keyframes twinkle {
	0%, 100% { opacity: 0.6; }
	50% { opacity: 0.1; }
}
@keyframes float {
	0% { transform: translateY(0); }
	100% { transform: translateY(-30px); }
}
@keyframes moveAround {
	0% { margin-left: 0; }
	50% { margin-left: 15px; }
	100% { margin-left: -15px; }
}
";

/// Full-screen gradient container.
pub fn sky_style(theme: &SkyTheme) -> String {
	let g = &theme.gradient;
	format!(
		"position: fixed; inset: 0; display: flex; width: 100vw; height: 100vh; \
		 background-image: linear-gradient({}, {}, {}, {});",
		g.direction,
		g.from.to_css(),
		g.via.to_css(),
		g.to.to_css()
	)
}

/// Style for one star. Twinkling stars get the `twinkle` animation.
pub fn star_style(star: &Star, theme: &SkyTheme) -> String {
	let mut style = format!(
		"position: absolute; border-radius: 9999px; top: {}%; left: {}%; \
		 width: {}px; height: {}px; opacity: {}; background-color: {};",
		star.top,
		star.left,
		star.size,
		star.size,
		star.opacity,
		theme.star_color.to_css()
	);
	if let Some(twinkle) = &star.twinkle {
		let _ = write!(
			style,
			" animation-name: twinkle; animation-duration: {}; animation-delay: {}; \
			 animation-iteration-count: infinite; animation-timing-function: ease-in-out;",
			twinkle.animation_duration(),
			twinkle.animation_delay()
		);
	}
	style
}

/// Style for one bubble: two alternating animations sharing one timing.
pub fn bubble_style(bubble: &Bubble, theme: &SkyTheme) -> String {
	let duration = bubble.animation_duration();
	let delay = bubble.animation_delay();
	format!(
		"position: absolute; border-radius: 9999px; border: 1px solid {}; \
		 top: {}%; left: {}%; width: {}px; height: {}px; opacity: {}; \
		 animation-name: float, moveAround; \
		 animation-duration: {duration}, {duration}; \
		 animation-timing-function: ease-in-out, ease-in-out; \
		 animation-iteration-count: infinite, infinite; \
		 animation-direction: alternate, alternate; \
		 animation-delay: {delay}, {delay}; \
		 will-change: transform;",
		theme.bubble_color.to_css(),
		bubble.top,
		bubble.left,
		bubble.size,
		bubble.size,
		bubble.opacity,
	)
}

/// Scrollable column that holds page content above the particles.
pub fn content_style(theme: &SkyTheme) -> String {
	format!(
		"position: relative; z-index: 10; width: 100%; max-width: {}px; \
		 margin: 0 auto; padding: 0 1rem; overflow-y: auto;",
		theme.content_max_width
	)
}
