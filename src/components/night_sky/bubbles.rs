//! Bubble field generation.
//!
//! Bubbles may overlap, so there is no retry loop: five draws per index give
//! size, position, opacity and cycle length, and the delay steps with the
//! index so neighbouring bubbles drift out of phase.

use log::debug;

use super::config::BubblesConfig;
use super::particles::{Bubble, ParticleField};
use super::random::{attribute_seed, round_to, seeded_random};
use super::types::Viewport;

const SEED_SIZE: i64 = 2000;
const SEED_TOP: i64 = 2001;
const SEED_LEFT: i64 = 2002;
const SEED_OPACITY: i64 = 2003;
const SEED_DURATION: i64 = 2004;

/// Generate the canonical bubble field for a `width` x `height` viewport.
pub fn generate_bubbles(width: u32, height: u32) -> ParticleField<Bubble> {
	generate_bubbles_with(Viewport::new(width, height), &BubblesConfig::default())
}

/// Generate a bubble field with an explicit configuration.
///
/// Always yields exactly `config.count` bubbles for a non-empty viewport.
pub fn generate_bubbles_with(viewport: Viewport, config: &BubblesConfig) -> ParticleField<Bubble> {
	if viewport.is_empty() {
		return ParticleField::empty(viewport);
	}
	let bubble_count = config.count.count(viewport.width, viewport.height);

	let bubbles: Vec<Bubble> = (0..bubble_count)
		.map(|i| {
			let draw = |offset| seeded_random(attribute_seed(i, offset, 0));
			Bubble {
				id: i,
				size: config.size.sample(draw(SEED_SIZE)),
				top: draw(SEED_TOP) * 100.0,
				left: draw(SEED_LEFT) * 100.0,
				opacity: round_to(config.opacity.sample(draw(SEED_OPACITY)), 2),
				duration_secs: round_to(config.duration.sample(draw(SEED_DURATION)), 1),
				delay_secs: delay_for(i, config),
			}
		})
		.collect();

	debug!(
		"night-sky: generated {} bubbles for {}x{}",
		bubbles.len(),
		viewport.width,
		viewport.height
	);

	ParticleField::new(viewport, bubbles)
}

/// `(i * delay_multiplier) mod max_delay`, from the index alone.
fn delay_for(index: usize, config: &BubblesConfig) -> f64 {
	if config.max_delay <= 0.0 {
		return 0.0;
	}
	(index as f64 * config.delay_multiplier) % config.max_delay
}
