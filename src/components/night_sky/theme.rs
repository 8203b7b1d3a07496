//! Colors for the sky backdrop.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Three-stop diagonal gradient behind the particles.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
	/// CSS direction keyword, e.g. "to bottom right"
	pub direction: &'static str,
	pub from: Color,
	pub via: Color,
	pub to: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct SkyTheme {
	pub name: &'static str,
	pub gradient: Gradient,
	/// Fill for stars
	pub star_color: Color,
	/// Border for bubbles
	pub bubble_color: Color,
	/// Widest the content column gets, in pixels.
	pub content_max_width: u32,
}

impl SkyTheme {
	/// Violet dusk fading into night (default)
	pub fn dusk() -> Self {
		Self {
			name: "dusk",
			gradient: Gradient {
				direction: "to bottom right",
				from: Color::rgb(124, 58, 237), // violet-600
				via: Color::rgb(49, 46, 129),   // indigo-900
				to: Color::rgb(17, 24, 39),     // gray-900
			},
			star_color: Color::rgb(255, 255, 255),
			bubble_color: Color::rgb(255, 255, 255),
			content_max_width: 1280,
		}
	}
}

impl Default for SkyTheme {
	fn default() -> Self {
		Self::dusk()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_use_hex() {
		assert_eq!(Color::rgb(124, 58, 237).to_css(), "#7c3aed");
	}

	#[test]
	fn translucent_colors_use_rgba() {
		assert_eq!(
			Color::rgba(255, 255, 255, 0.5).to_css(),
			"rgba(255, 255, 255, 0.5)"
		);
	}

	#[test]
	fn default_is_dusk() {
		assert_eq!(SkyTheme::default().name, "dusk");
	}
}
