//! Property tests for the sky layout generators.

use std::time::Duration;

use night_sky::components::night_sky::{
	BubblesConfig, ResizeDebouncer, SkyConfig, SkyState, StarsConfig, Viewport, generate_bubbles,
	generate_bubbles_with, generate_stars, generate_stars_with, seeded_random,
};
use proptest::prelude::*;

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
	(0u32..=1600, 0u32..=1000).prop_map(|(w, h)| Viewport::new(w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Seeded random source
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn seeded_random_in_unit_interval(seed in -10_000_000i64..=10_000_000) {
		let r = seeded_random(seed);
		prop_assert!((0.0..1.0).contains(&r), "seed {} gave {}", seed, r);
		prop_assert_eq!(r, seeded_random(seed));
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Determinism: same viewport always produces the same fields
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#![proptest_config(ProptestConfig::with_cases(32))]

	#[test]
	fn fields_are_reproducible(vp in viewport_strategy()) {
		prop_assert_eq!(generate_stars(vp.width, vp.height), generate_stars(vp.width, vp.height));
		prop_assert_eq!(generate_bubbles(vp.width, vp.height), generate_bubbles(vp.width, vp.height));
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Star spacing and count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#![proptest_config(ProptestConfig::with_cases(32))]

	#[test]
	fn stars_keep_min_distance(vp in viewport_strategy()) {
		let config = StarsConfig::default();
		let field = generate_stars_with(vp, &config);
		prop_assert!(field.len() <= config.star_count(vp.width, vp.height));

		let min_distance = vp.min_side() * config.min_distance_percent;
		let stars = field.as_slice();
		for (i, a) in stars.iter().enumerate() {
			let (ax, ay) = a.pixel_position(vp);
			for b in &stars[i + 1..] {
				let (bx, by) = b.pixel_position(vp);
				let d = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt();
				prop_assert!(d >= min_distance, "stars {} and {} only {}px apart", a.id, b.id, d);
			}
		}
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Bubble count is exact
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn bubble_count_matches_config(vp in viewport_strategy()) {
		for config in [BubblesConfig::area_density(), BubblesConfig::width_scaled()] {
			let field = generate_bubbles_with(vp, &config);
			let expected = if vp.is_empty() { 0 } else { config.count.count(vp.width, vp.height) };
			prop_assert_eq!(field.len(), expected);
		}
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Debounced resizes regenerate once per burst
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#![proptest_config(ProptestConfig::with_cases(32))]

	#[test]
	fn burst_settles_on_last_size(
		sizes in prop::collection::vec((100u32..=1600, 100u32..=1000), 1..6),
		gap in 1u64..200,
	) {
		let config = SkyConfig::default();
		let mut sky = SkyState::new(Viewport::new(50, 50), &config);
		let mut debouncer = ResizeDebouncer::new(Duration::from_millis(200), sky.viewport);

		let mut t = 0;
		for &size in &sizes {
			debouncer.signal(Duration::from_millis(t), size.into());
			prop_assert_eq!(debouncer.poll(Duration::from_millis(t)), None);
			t += gap;
		}
		let last_signal = t - gap;
		for step in (last_signal..last_signal + 1000).step_by(25) {
			if let Some(vp) = debouncer.poll(Duration::from_millis(step)) {
				sky.resize(vp, &config);
			}
		}

		let last: Viewport = sizes[sizes.len() - 1].into();
		prop_assert_eq!(sky.viewport, last);
		prop_assert_eq!(sky.generation, 1);
	}
}

#[test]
fn full_hd_scenario() {
	let field = generate_stars(1920, 1080);
	assert!(!field.is_empty());
	assert!(field.len() <= 518);
}

#[test]
fn zero_viewports_are_empty() {
	for (w, h) in [(0, 0), (0, 900), (1200, 0)] {
		assert!(generate_stars(w, h).is_empty());
		assert!(generate_bubbles(w, h).is_empty());
	}
}
