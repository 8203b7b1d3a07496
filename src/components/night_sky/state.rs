//! Current viewport and the fields generated for it.

use log::debug;

use super::bubbles::generate_bubbles_with;
use super::config::SkyConfig;
use super::particles::{Bubble, ParticleField, Star};
use super::stars::generate_stars_with;
use super::types::Viewport;

/// Both particle fields for one viewport.
///
/// Regenerated only when the viewport actually changes; a field built before
/// measurement survives if the first measurement matches it.
#[derive(Clone, Debug, PartialEq)]
pub struct SkyState {
	pub viewport: Viewport,
	pub stars: ParticleField<Star>,
	pub bubbles: ParticleField<Bubble>,
	/// Number of regenerations since creation.
	pub generation: u64,
}

impl SkyState {
	pub fn new(viewport: Viewport, config: &SkyConfig) -> Self {
		Self {
			viewport,
			stars: generate_stars_with(viewport, &config.stars),
			bubbles: generate_bubbles_with(viewport, &config.bubbles),
			generation: 0,
		}
	}

	/// Switch to `viewport`, regenerating both fields if it differs.
	///
	/// Returns whether anything changed.
	pub fn resize(&mut self, viewport: Viewport, config: &SkyConfig) -> bool {
		if viewport == self.viewport {
			return false;
		}
		self.viewport = viewport;
		self.stars = generate_stars_with(viewport, &config.stars);
		self.bubbles = generate_bubbles_with(viewport, &config.bubbles);
		self.generation += 1;
		debug!(
			"night-sky: regenerated sky #{} at {}x{} ({} stars, {} bubbles)",
			self.generation,
			viewport.width,
			viewport.height,
			self.stars.len(),
			self.bubbles.len()
		);
		true
	}
}
