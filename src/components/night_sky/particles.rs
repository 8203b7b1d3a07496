//! Placement records for the decorative particles.
//!
//! Positions are percentages of the viewport so a field stays put while the
//! browser reflows; only a real size change regenerates it.

use serde::Serialize;

use super::types::Viewport;

/// Twinkle timing for a star.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Twinkle {
	pub duration_secs: f64,
	pub delay_secs: f64,
}

/// A single placed star.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Star {
	/// Index the star was generated for; gaps mean dropped placements.
	pub id: usize,
	/// Offset from the top edge, percent of viewport height (one decimal).
	pub top: f64,
	/// Offset from the left edge, percent of viewport width (one decimal).
	pub left: f64,
	pub opacity: f64,
	/// Diameter in pixels.
	pub size: f64,
	pub twinkle: Option<Twinkle>,
}

impl Star {
	/// Pixel position the stored percentages map back to.
	pub fn pixel_position(&self, viewport: Viewport) -> (f64, f64) {
		(
			self.left * viewport.width as f64 / 100.0,
			self.top * viewport.height as f64 / 100.0,
		)
	}

	pub fn twinkles(&self) -> bool {
		self.twinkle.is_some()
	}
}

/// A single floating bubble.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bubble {
	pub id: usize,
	/// Diameter in pixels.
	pub size: f64,
	pub top: f64,
	pub left: f64,
	pub opacity: f64,
	/// Float/drift cycle in seconds (one decimal).
	pub duration_secs: f64,
	pub delay_secs: f64,
}

impl Bubble {
	/// CSS `animation-duration` value, e.g. `"37.4s"`.
	pub fn animation_duration(&self) -> String {
		seconds(self.duration_secs)
	}

	/// CSS `animation-delay` value.
	pub fn animation_delay(&self) -> String {
		seconds(self.delay_secs)
	}
}

impl Twinkle {
	pub fn animation_duration(&self) -> String {
		seconds(self.duration_secs)
	}

	pub fn animation_delay(&self) -> String {
		seconds(self.delay_secs)
	}
}

fn seconds(value: f64) -> String {
	format!("{value}s")
}

/// An ordered set of particles generated for one viewport.
///
/// Order is generation order, which is also the order seeds were derived in.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleField<P> {
	viewport: Viewport,
	particles: Vec<P>,
}

impl<P> ParticleField<P> {
	pub(crate) fn new(viewport: Viewport, particles: Vec<P>) -> Self {
		Self {
			viewport,
			particles,
		}
	}

	/// Empty field for `viewport`.
	pub fn empty(viewport: Viewport) -> Self {
		Self::new(viewport, Vec::new())
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, P> {
		self.particles.iter()
	}

	pub fn as_slice(&self) -> &[P] {
		&self.particles
	}
}

impl<'a, P> IntoIterator for &'a ParticleField<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;

	fn into_iter(self) -> Self::IntoIter {
		self.particles.iter()
	}
}
