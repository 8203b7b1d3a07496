//! Layout presets for the star and bubble fields.
//!
//! All values are compile-time constants. Each preset mirrors one of the
//! backdrop variants the site has shipped; the `Default` impls pick the
//! canonical ones.

/// A value drawn as `min + r * range` for `r` in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spread {
	pub min: f64,
	pub range: f64,
}

impl Spread {
	pub const fn new(min: f64, range: f64) -> Self {
		Self { min, range }
	}

	/// Scale a unit draw into `[min, min + range)`.
	pub fn sample(&self, r: f64) -> f64 {
		self.min + r * self.range
	}
}

/// Twinkle animation settings for stars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwinkleConfig {
	/// Fraction of stars that twinkle (0.0 disables twinkling).
	pub probability: f64,
	/// Fixed opacity for twinkling stars
	pub opacity: f64,
	/// Animation duration in seconds
	pub duration: Spread,
	/// Delay before the first twinkle, in seconds
	pub delay: Spread,
}

/// Star field configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarsConfig {
	/// Pixels of viewport area per star (higher = fewer stars).
	pub density_factor: u32,
	/// Star diameter in pixels.
	pub size: f64,
	/// Minimum spacing as a fraction of the shorter viewport side.
	pub min_distance_percent: f64,
	/// Opacity for non-twinkling stars.
	pub opacity: Spread,
	pub twinkle: TwinkleConfig,
	/// Grid cells per star; above 1.0 leaves room to retry.
	pub oversampling: f64,
	/// Candidates tried per star before it is dropped.
	pub max_placement_attempts: u32,
}

impl StarsConfig {
	/// Dense field where a quarter of the stars twinkle (default).
	pub const fn twinkling() -> Self {
		Self {
			density_factor: 4000,
			size: 2.5,
			min_distance_percent: 0.008,
			opacity: Spread::new(0.3, 0.5),
			twinkle: TwinkleConfig {
				probability: 0.25,
				opacity: 0.6,
				duration: Spread::new(2.0, 3.0),
				delay: Spread::new(1.0, 8.0),
			},
			oversampling: 1.2,
			max_placement_attempts: 100,
		}
	}

	/// Same placement with smaller, steady stars.
	pub const fn steady() -> Self {
		let mut config = Self::twinkling();
		config.size = 2.0;
		config.twinkle.probability = 0.0;
		config
	}

	/// Target star count for a viewport before any placement failures.
	pub fn star_count(&self, width: u32, height: u32) -> usize {
		if self.density_factor == 0 {
			return 0;
		}
		(width as u64 * height as u64 / self.density_factor as u64) as usize
	}
}

impl Default for StarsConfig {
	fn default() -> Self {
		Self::twinkling()
	}
}

/// How many bubbles a viewport gets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BubbleCount {
	/// `floor(width * height / factor)`
	Density { factor: u32 },
	/// `floor(width / divisor) + base`
	WidthScaled { divisor: u32, base: usize },
}

impl BubbleCount {
	pub fn count(&self, width: u32, height: u32) -> usize {
		match *self {
			BubbleCount::Density { factor } if factor > 0 => {
				(width as u64 * height as u64 / factor as u64) as usize
			}
			BubbleCount::Density { .. } => 0,
			BubbleCount::WidthScaled { divisor, base } => {
				(width / divisor.max(1)) as usize + base
			}
		}
	}
}

/// Bubble field configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubblesConfig {
	pub count: BubbleCount,
	/// Diameter in pixels.
	pub size: Spread,
	pub opacity: Spread,
	/// Float/drift cycle length in seconds.
	pub duration: Spread,
	/// Per-index delay step in seconds, wrapped at `max_delay`.
	pub delay_multiplier: f64,
	pub max_delay: f64,
}

impl BubblesConfig {
	/// Area-scaled field of small, faint bubbles (default).
	pub const fn area_density() -> Self {
		Self {
			count: BubbleCount::Density { factor: 8000 },
			size: Spread::new(3.5, 0.0),
			opacity: Spread::new(0.05, 0.15),
			duration: Spread::new(30.0, 15.0),
			delay_multiplier: 0.3,
			max_delay: 10.0,
		}
	}

	/// A few larger bubbles, scaled by width only.
	pub const fn width_scaled() -> Self {
		Self {
			count: BubbleCount::WidthScaled {
				divisor: 100,
				base: 15,
			},
			size: Spread::new(3.0, 10.0),
			..Self::area_density()
		}
	}
}

impl Default for BubblesConfig {
	fn default() -> Self {
		Self::area_density()
	}
}

/// Both field configurations together.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SkyConfig {
	pub stars: StarsConfig,
	pub bubbles: BubblesConfig,
}

#[cfg(test)]
mod tests {
	// Dev-dependencies used only by integration tests.
	use proptest as _;
	#[cfg(target_arch = "wasm32")]
	use wasm_bindgen_futures as _;
	#[cfg(target_arch = "wasm32")]
	use wasm_bindgen_test as _;

	use super::*;

	#[test]
	fn star_count_floors() {
		let config = StarsConfig::twinkling();
		assert_eq!(config.star_count(1920, 1080), 518);
		assert_eq!(config.star_count(0, 1080), 0);
		assert_eq!(config.star_count(63, 63), 0);
	}

	#[test]
	fn bubble_counts() {
		let density = BubbleCount::Density { factor: 8000 };
		assert_eq!(density.count(1000, 800), 100);
		let scaled = BubblesConfig::width_scaled().count;
		assert_eq!(scaled.count(1999, 10), 34);
	}

	#[test]
	fn steady_never_twinkles() {
		let steady = StarsConfig::steady();
		assert_eq!(steady.twinkle.probability, 0.0);
		assert_eq!(steady.density_factor, StarsConfig::twinkling().density_factor);
	}

	#[test]
	fn spread_bounds() {
		let s = Spread::new(0.05, 0.15);
		assert_eq!(s.sample(0.0), 0.05);
		assert!(s.sample(0.999) < 0.20);
	}
}
