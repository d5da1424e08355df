//! Ambient particle field component.
//!
//! Draws slowly drifting, softly pulsing particles on a canvas and joins nearby
//! pairs with faint lines whose opacity fades with distance:
//! - Toroidal wraparound at the surface edges
//! - Particle count and connection distance chosen by viewport width
//! - Sharp rendering on high-DPI displays
//! - No animation at all when the user prefers reduced motion
//!
//! The simulation and renderer are host-independent; [`ParticleFieldSimulator`]
//! takes its environment, frame scheduler and random source as parameters so it
//! can run outside a browser.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::ParticleField;
//!
//! view! {
//!     <section class="hero" style="position: relative;">
//!         <ParticleField />
//!         <h1>"Hello"</h1>
//!     </section>
//! }
//! ```

mod component;
mod error;
mod lifecycle;
pub mod particles;
mod random;
pub mod render;
pub mod scale;
#[cfg(test)]
mod testing;
pub mod theme;
mod types;
mod web;

pub use component::ParticleField;
pub use error::MountError;
pub use lifecycle::{FieldState, FrameScheduler, Host, ParticleFieldSimulator};
pub use random::RandomSource;
pub use theme::{Color, FieldTheme};
pub use types::{FieldConfig, ParsedConfig};
