//! Star field generation with minimum-distance rejection sampling.
//!
//! The viewport is split into a grid of roughly `star_count * oversampling`
//! cells. Each star tries up to `max_placement_attempts` candidates: a cell
//! and an offset inside it, all drawn from seeds keyed by `(index, attempt)`.
//! A candidate closer than `min_distance` to an accepted star is rejected. A
//! star that runs out of attempts is dropped, so a crowded viewport gets
//! fewer stars rather than overlapping ones.

use std::collections::HashMap;

use log::{debug, trace};

use super::config::StarsConfig;
use super::particles::{ParticleField, Star, Twinkle};
use super::random::{attribute_seed, round_to, seeded_random};
use super::types::Viewport;

// Per-attribute seed offsets.
const SEED_COL: i64 = 1000;
const SEED_ROW: i64 = 1001;
const SEED_X: i64 = 1002;
const SEED_Y: i64 = 1003;
const SEED_OPACITY: i64 = 1004;
const SEED_TWINKLE: i64 = 1005;
const SEED_TWINKLE_DURATION: i64 = 1006;
const SEED_TWINKLE_DELAY: i64 = 1007;

/// Generate the canonical star field for a `width` x `height` viewport.
pub fn generate_stars(width: u32, height: u32) -> ParticleField<Star> {
	generate_stars_with(Viewport::new(width, height), &StarsConfig::default())
}

/// Generate a star field with an explicit configuration.
pub fn generate_stars_with(viewport: Viewport, config: &StarsConfig) -> ParticleField<Star> {
	if viewport.is_empty() {
		return ParticleField::empty(viewport);
	}
	let star_count = config.star_count(viewport.width, viewport.height);
	if star_count == 0 {
		return ParticleField::empty(viewport);
	}

	let (width, height) = (viewport.width as f64, viewport.height as f64);
	let min_distance = viewport.min_side() * config.min_distance_percent;

	let cols = ((star_count as f64 * config.oversampling).sqrt().ceil() as usize).max(1);
	let rows = star_count.div_ceil(cols);
	let cell_width = width / cols as f64;
	let cell_height = height / rows as f64;

	let mut stars = Vec::with_capacity(star_count);
	let mut occupied = SpacingGrid::new(min_distance);
	let mut dropped = 0usize;

	for i in 0..star_count {
		let mut placed = false;

		for attempt in 0..config.max_placement_attempts {
			let draw = |offset| seeded_random(attribute_seed(i, offset, attempt));

			let col = (draw(SEED_COL) * cols as f64).floor();
			let row = (draw(SEED_ROW) * rows as f64).floor();
			let x = col * cell_width + draw(SEED_X) * cell_width;
			let y = row * cell_height + draw(SEED_Y) * cell_height;

			// Stored as one-decimal percentages; test spacing on what gets stored.
			let left = round_to(x / width * 100.0, 1);
			let top = round_to(y / height * 100.0, 1);
			let pos = (left * width / 100.0, top * height / 100.0);

			if occupied.too_close(pos) {
				continue;
			}

			let twinkle = (draw(SEED_TWINKLE) < config.twinkle.probability).then(|| Twinkle {
				duration_secs: round_to(
					config.twinkle.duration.sample(draw(SEED_TWINKLE_DURATION)),
					1,
				),
				delay_secs: round_to(config.twinkle.delay.sample(draw(SEED_TWINKLE_DELAY)), 1),
			});
			let opacity = if twinkle.is_some() {
				config.twinkle.opacity
			} else {
				round_to(config.opacity.sample(draw(SEED_OPACITY)), 2)
			};

			occupied.insert(pos);
			stars.push(Star {
				id: i,
				top,
				left,
				opacity,
				size: config.size,
				twinkle,
			});
			placed = true;
			break;
		}

		if !placed {
			trace!("night-sky: star {} dropped after {} attempts", i, config.max_placement_attempts);
			dropped += 1;
		}
	}

	debug!(
		"night-sky: placed {}/{} stars for {}x{} ({} dropped)",
		stars.len(),
		star_count,
		viewport.width,
		viewport.height,
		dropped
	);

	ParticleField::new(viewport, stars)
}

/// Uniform hash grid over accepted star positions.
///
/// Cells are at least `min_distance` wide, so any star closer than that sits in
/// the 3x3 block around the candidate's cell. Gives the same answer as
/// scanning every accepted star.
struct SpacingGrid {
	min_distance: f64,
	cell_size: f64,
	cells: HashMap<(i64, i64), Vec<(f64, f64)>>,
}

impl SpacingGrid {
	fn new(min_distance: f64) -> Self {
		Self {
			min_distance,
			cell_size: min_distance.max(1.0),
			cells: HashMap::new(),
		}
	}

	fn cell(&self, (x, y): (f64, f64)) -> (i64, i64) {
		(
			(x / self.cell_size).floor() as i64,
			(y / self.cell_size).floor() as i64,
		)
	}

	fn insert(&mut self, pos: (f64, f64)) {
		let cell = self.cell(pos);
		self.cells.entry(cell).or_default().push(pos);
	}

	fn too_close(&self, pos: (f64, f64)) -> bool {
		let (cx, cy) = self.cell(pos);
		for dx in -1..=1 {
			for dy in -1..=1 {
				let Some(points) = self.cells.get(&(cx + dx, cy + dy)) else {
					continue;
				};
				let hit = points.iter().any(|&(px, py)| {
					let distance = ((pos.0 - px).powi(2) + (pos.1 - py).powi(2)).sqrt();
					distance < self.min_distance
				});
				if hit {
					return true;
				}
			}
		}
		false
	}
}
