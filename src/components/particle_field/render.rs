//! Per-frame drawing of the particle field.
//!
//! Rendering runs in two passes:
//! 1. Clear, then fill one circle per particle
//! 2. Stroke a fading line between every pair closer than the connection distance
//!
//! The pair pass is `O(n²)`; particle counts are capped per viewport tier.

use super::particles::Particle;
use super::theme::{Color, FieldTheme};

/// Anything the field can be drawn onto.
///
/// Coordinates are logical (CSS) pixels. Implementations map them to the
/// backing store themselves, typically by a device-pixel-ratio transform.
pub trait Surface {
	/// Current logical width and height. Read every frame since layout can change it.
	fn logical_size(&self) -> (f64, f64);

	/// Resize the backing store to `logical size * device_pixel_ratio` and apply
	/// the matching scale transform.
	fn fit(&mut self, device_pixel_ratio: f64);

	/// Erase `[0, width) × [0, height)`.
	fn clear(&mut self, width: f64, height: f64);

	/// Filled circle centred on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);

	/// Straight line segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

/// Alpha of the line joining two particles `distance` apart, or `None` when
/// they are too far apart to be connected.
pub fn connection_alpha(distance: f64, connection_distance: f64, max_alpha: f64) -> Option<f64> {
	if distance < connection_distance {
		Some(max_alpha * (1.0 - distance / connection_distance))
	} else {
		None
	}
}

/// Draws one frame.
pub fn render<S: Surface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	connection_distance: f64,
	theme: &FieldTheme,
) {
	let (width, height) = surface.logical_size();
	surface.clear(width, height);

	draw_particles(surface, particles, theme);
	draw_connections(surface, particles, connection_distance, theme);
}

fn draw_particles<S: Surface + ?Sized>(surface: &mut S, particles: &[Particle], theme: &FieldTheme) {
	for p in particles {
		let radius = p.radius.max(theme.min_radius);
		surface.fill_circle(p.x, p.y, radius, theme.particle_color.with_alpha(p.opacity));
	}
}

fn draw_connections<S: Surface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	connection_distance: f64,
	theme: &FieldTheme,
) {
	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let dist = (dx * dx + dy * dy).sqrt();

			if let Some(alpha) = connection_alpha(dist, connection_distance, theme.line_alpha) {
				surface.stroke_line(
					(a.x, a.y),
					(b.x, b.y),
					theme.line_color.with_alpha(alpha),
					theme.line_width,
				);
			}
		}
	}
}
