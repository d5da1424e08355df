//! Viewport-dependent density configuration for the particle field.
//!
//! Particle count and connection distance are chosen together per viewport
//! tier. The pairwise connection pass is `O(n²)`, so narrow viewports get
//! fewer particles and a shorter connection distance.
//!
//! # Tiers
//!
//! | viewport width `W` | particles | connection distance |
//! |--------------------|-----------|---------------------|
//! | `W < 768`          | 25        | 80                  |
//! | `768 ≤ W < 1024`   | 45        | 120                 |
//! | `W ≥ 1024`         | 80        | 120                 |

use serde::Deserialize;

/// Viewport size class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DensityTier {
	/// Phones.
	Compact,
	/// Tablets and narrow windows.
	Medium,
	/// Desktop.
	Wide,
}

/// Particle count and connection distance for one tier.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct TierValues {
	/// Number of particles seeded.
	pub particles: usize,
	/// Maximum pair distance (logical px) that still gets a connecting line.
	pub connection_distance: f64,
}

/// Breakpoints and per-tier values.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
	/// Widths below this are [`DensityTier::Compact`].
	pub medium_min_width: f64,
	/// Widths at or above this are [`DensityTier::Wide`].
	pub wide_min_width: f64,
	/// Values for [`DensityTier::Compact`].
	pub compact: TierValues,
	/// Values for [`DensityTier::Medium`].
	pub medium: TierValues,
	/// Values for [`DensityTier::Wide`].
	pub wide: TierValues,
}

impl Default for DensityConfig {
	fn default() -> Self {
		Self {
			medium_min_width: 768.0,
			wide_min_width: 1024.0,
			compact: TierValues {
				particles: 25,
				connection_distance: 80.0,
			},
			medium: TierValues {
				particles: 45,
				connection_distance: 120.0,
			},
			wide: TierValues {
				particles: 80,
				connection_distance: 120.0,
			},
		}
	}
}

impl DensityConfig {
	/// Classify a viewport width in CSS pixels. Breakpoints are inclusive lower bounds.
	pub fn tier(&self, viewport_width: f64) -> DensityTier {
		if viewport_width >= self.wide_min_width {
			DensityTier::Wide
		} else if viewport_width >= self.medium_min_width {
			DensityTier::Medium
		} else {
			DensityTier::Compact
		}
	}

	/// Values for the given tier.
	pub fn values(&self, tier: DensityTier) -> TierValues {
		match tier {
			DensityTier::Compact => self.compact,
			DensityTier::Medium => self.medium,
			DensityTier::Wide => self.wide,
		}
	}

	/// Values for a viewport width.
	pub fn for_viewport(&self, viewport_width: f64) -> TierValues {
		self.values(self.tier(viewport_width))
	}

	/// Number of particles to seed on a surface of the given logical size.
	///
	/// A zero-area surface gets no particles regardless of tier.
	pub fn particle_count(&self, viewport_width: f64, width: f64, height: f64) -> usize {
		if width <= 0.0 || height <= 0.0 {
			return 0;
		}
		self.for_viewport(viewport_width).particles
	}
}
