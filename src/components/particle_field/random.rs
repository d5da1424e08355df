//! Random source used for seeding.

use rand::Rng;
use rand::rngs::SmallRng;

/// Largest `f64` strictly below `x` (for finite `x`).
pub(crate) fn largest_below(x: f64) -> f64 {
	if x > 0.0 {
		f64::from_bits(x.to_bits() - 1)
	} else if x == 0.0 {
		-f64::from_bits(1)
	} else {
		f64::from_bits(x.to_bits() + 1)
	}
}

/// Uniform `[0, 1)` floats.
pub trait RandomSource {
	/// Next value in `[0, 1)`.
	fn next_f64(&mut self) -> f64;

	/// Next value in `[min, max)`.
	fn range(&mut self, min: f64, max: f64) -> f64 {
		let v = min + self.next_f64() * (max - min);
		// scaling a draw just under 1 can round up onto `max`
		if v >= max { largest_below(max).max(min) } else { v }
	}
}

impl RandomSource for SmallRng {
	fn next_f64(&mut self) -> f64 {
		self.gen_range(0.0..1.0)
	}

	fn range(&mut self, min: f64, max: f64) -> f64 {
		self.gen_range(min..max)
	}
}
