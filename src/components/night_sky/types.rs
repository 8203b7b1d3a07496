//! Viewport dimensions, the only input that changes the sky.

use serde::{Deserialize, Serialize};

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Viewport {
	pub width: u32,
	pub height: u32,
}

impl Viewport {
	/// Size assumed before the window has been measured.
	pub const FALLBACK: Viewport = Viewport::new(1920, 1080);

	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// A viewport with a zero side holds no particles.
	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Area in square pixels, without overflow.
	pub fn area(&self) -> u64 {
		self.width as u64 * self.height as u64
	}

	/// Shorter side, used to scale the star spacing.
	pub fn min_side(&self) -> f64 {
		self.width.min(self.height) as f64
	}
}

impl Default for Viewport {
	fn default() -> Self {
		Self::FALLBACK
	}
}

impl From<(u32, u32)> for Viewport {
	fn from((width, height): (u32, u32)) -> Self {
		Self { width, height }
	}
}
