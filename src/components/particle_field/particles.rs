//! Ambient particles: seeding and per-frame stepping.

use std::f64::consts::TAU;

use super::random::{RandomSource, largest_below};

/// Amplitude of the breathing size oscillation.
pub const PULSE_AMPLITUDE: f64 = 0.5;

/// A single floating particle.
///
/// `base_radius`, `vx`, `vy`, `opacity` and `pulse_speed` are fixed at creation.
/// Only position, `radius` and `phase` change per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub base_radius: f64,
	/// Display radius, `base_radius + sin(phase) * 0.5`.
	pub radius: f64,
	pub opacity: f64,
	/// Pulse phase in radians.
	pub phase: f64,
	pub pulse_speed: f64,
}

impl Particle {
	fn random(rng: &mut impl RandomSource, width: f64, height: f64) -> Self {
		let base_radius = rng.range(0.5, 2.5);
		Self {
			x: rng.next_f64() * width,
			y: rng.next_f64() * height,
			vx: rng.range(-0.15, 0.15),
			vy: rng.range(-0.15, 0.15),
			base_radius,
			radius: base_radius,
			opacity: rng.range(0.1, 0.6),
			phase: rng.next_f64() * TAU,
			pulse_speed: rng.range(0.005, 0.025),
		}
	}

	/// Advance one frame and wrap into `[0, width) × [0, height)`.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x = wrap(self.x + self.vx, width);
		self.y = wrap(self.y + self.vy, height);
		self.phase += self.pulse_speed;
		self.radius = self.base_radius + self.phase.sin() * PULSE_AMPLITUDE;
	}
}

/// Toroidal wrap of a coordinate into `[0, extent)`.
///
/// A one-step crossing re-enters at the opposite edge carrying the overshoot,
/// so `extent + 0.05` becomes `0.05`. A coordinate more than one extent out,
/// as left behind by a shrinking surface, resets to the edge it re-enters from:
/// `0` past the far edge, just below `extent` past the near one. A non-positive
/// extent pins to 0.
pub fn wrap(value: f64, extent: f64) -> f64 {
	if extent <= 0.0 {
		return 0.0;
	}
	if value >= extent {
		if value < 2.0 * extent { value - extent } else { 0.0 }
	} else if value < 0.0 {
		let wrapped = if value >= -extent { value + extent } else { extent };
		if wrapped >= extent { largest_below(extent) } else { wrapped }
	} else {
		value
	}
}

/// Create `count` particles uniformly distributed over the surface.
pub fn seed(width: f64, height: f64, count: usize, rng: &mut impl RandomSource) -> Vec<Particle> {
	(0..count)
		.map(|_| Particle::random(rng, width, height))
		.collect()
}

/// Advance every particle by one frame.
pub fn step(particles: &mut [Particle], width: f64, height: f64) {
	for p in particles {
		p.advance(width, height);
	}
}

/// Owns the particles of one simulation run.
#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
	/// Live particles, fixed in number for the run.
	pub particles: Vec<Particle>,
}

impl ParticleSystem {
	/// Seed a fresh population.
	pub fn new(width: f64, height: f64, count: usize, rng: &mut impl RandomSource) -> Self {
		Self {
			particles: seed(width, height, count, rng),
		}
	}

	/// Advance all particles using the surface's current logical size.
	pub fn update(&mut self, width: f64, height: f64) {
		step(&mut self.particles, width, height);
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True when the run has no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
