//! Deterministic pseudo-random source for particle layout.
//!
//! Every draw is a pure function of an integer seed, so the same viewport
//! always lays out the same sky. Generators derive seeds from a particle index
//! and a fixed per-attribute offset (e.g. `i * 1000 + attempt`) instead of
//! threading a stateful generator through the layout loops.

/// Map an integer seed to a reproducible value in `[0, 1)`.
///
/// `x = sin(seed) * 10000`, keeping the fractional part. Not suitable for
/// anything beyond decoration.
pub fn seeded_random(seed: i64) -> f64 {
	let x = (seed as f64).sin() * 10000.0;
	let r = x - x.floor();
	// x - floor(x) can round up to exactly 1.0 for tiny negative x
	if r >= 1.0 { 0.0 } else { r }
}

/// Seed for the `offset`-th attribute of particle `index` on a given attempt.
///
/// Bubbles never retry, so they pass `attempt = 0`.
#[inline]
pub(crate) fn attribute_seed(index: usize, offset: i64, attempt: u32) -> i64 {
	index as i64 * offset + attempt as i64
}

/// Round to a fixed number of decimal places, as the CSS output is written.
#[inline]
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
	let factor = 10f64.powi(decimals);
	(value * factor).round() / factor
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seed_zero_is_zero() {
		assert_eq!(seeded_random(0), 0.0);
	}

	#[test]
	fn same_seed_same_value() {
		for seed in [-5_000, -1, 1, 42, 1_000, 518_999, i32::MAX as i64] {
			assert_eq!(seeded_random(seed), seeded_random(seed));
		}
	}

	#[test]
	fn values_stay_in_unit_interval() {
		for seed in -2_000..2_000 {
			let r = seeded_random(seed);
			assert!((0.0..1.0).contains(&r), "seed {seed} gave {r}");
		}
	}

	#[test]
	fn matches_closed_form() {
		let x = 1f64.sin() * 10000.0;
		assert_eq!(seeded_random(1), x - x.floor());
	}

	#[test]
	fn attribute_seeds_follow_index_and_attempt() {
		assert_eq!(attribute_seed(0, 1000, 7), 7);
		assert_eq!(attribute_seed(3, 1001, 2), 3005);
		assert_eq!(attribute_seed(12, 2004, 0), 24048);
	}

	#[test]
	fn rounding() {
		assert_eq!(round_to(0.456, 2), 0.46);
		assert_eq!(round_to(31.25, 1), 31.3);
		assert_eq!(round_to(12.0, 1), 12.0);
	}
}
