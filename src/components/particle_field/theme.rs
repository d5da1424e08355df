//! Visual theming for the particle field.
//!
//! Colors and stroke constants used by the renderer, plus the canvas element's
//! overall opacity.

use serde::Deserialize;

fn opaque() -> f64 {
	1.0
}

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	#[serde(default = "opaque")]
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same hue, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba()` string, always including alpha so per-particle opacity survives.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Complete visual theme for the field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldTheme {
	/// Fill hue for particles. Alpha is replaced by each particle's opacity.
	pub particle_color: Color,
	/// Stroke hue for connecting lines. Alpha is replaced by the distance fade.
	pub line_color: Color,
	/// Line alpha at zero distance; fades linearly to 0 at the connection distance.
	pub line_alpha: f64,
	/// Connecting line width in logical pixels.
	pub line_width: f64,
	/// Smallest radius ever passed to the canvas.
	pub min_radius: f64,
	/// Opacity of the canvas element itself.
	pub canvas_opacity: f64,
}

impl FieldTheme {
	/// Indigo accent used across the site (default).
	pub fn indigo() -> Self {
		Self {
			particle_color: Color::rgb(112, 101, 239),
			line_color: Color::rgb(40, 32, 140),
			line_alpha: 0.15,
			line_width: 0.5,
			min_radius: 0.1,
			canvas_opacity: 0.6,
		}
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self::indigo()
	}
}
