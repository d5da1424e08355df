//! Lifecycle of one particle field: seeding, the frame loop, resize and teardown.
//!
//! The simulator is host-agnostic. Everything it needs from the environment
//! comes through three seams:
//! - [`Host`]: accessibility preference, pixel ratio, viewport width, the
//!   drawable surface and the resize listener
//! - [`FrameScheduler`]: "call me on the next display refresh"
//! - [`RandomSource`]: seeding randomness
//!
//! The browser implementations live in `web.rs`; tests drive the same code
//! frame by frame with manual doubles.

use log::{debug, info, warn};

use super::error::MountError;
use super::particles::{Particle, ParticleSystem};
use super::random::RandomSource;
use super::render::{self, Surface};
use super::types::FieldConfig;

/// Requests and cancels next-frame callbacks.
///
/// At most one request is outstanding per simulator. When the frame fires, the
/// owner calls [`ParticleFieldSimulator::on_frame`].
pub trait FrameScheduler {
	/// Identifies a scheduled frame so it can be cancelled.
	type Handle: Copy;

	/// Schedule the next frame. `None` if the host refused.
	fn request_frame(&mut self) -> Option<Self::Handle>;

	/// Cancel a frame that has not run yet.
	fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Environment the field is mounted into.
pub trait Host {
	/// Surface type produced on mount.
	type Surface: Surface;

	/// Read once per activation. Never polled.
	fn prefers_reduced_motion(&self) -> bool;

	/// Backing-store pixels per logical pixel.
	fn device_pixel_ratio(&self) -> f64;

	/// Viewport width in CSS pixels, used to pick the density tier.
	fn viewport_width(&self) -> f64;

	/// Drawing surface for this field, or why there is none yet.
	fn acquire_surface(&mut self) -> Result<Self::Surface, MountError>;

	/// Start delivering resize events to [`ParticleFieldSimulator::on_resize`].
	fn attach_resize_listener(&mut self);

	/// Stop delivering resize events.
	fn detach_resize_listener(&mut self);
}

/// Where a simulator is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
	/// Created, not started (or start aborted because no surface was available).
	Idle,
	/// Sizing the surface and seeding particles.
	Seeding,
	/// Frame loop active.
	Running,
	/// Terminal. Reached by `stop` or by a reduced-motion start.
	Stopped,
}

/// Resources that exist only while running.
struct Run<S, F> {
	surface: S,
	system: ParticleSystem,
	connection_distance: f64,
	pending_frame: Option<F>,
}

/// Owns one particle field from mount to teardown.
///
/// Instances never share state; each owns its own surface and particles.
/// Restarting after [`stop`](Self::stop) means creating a new simulator.
pub struct ParticleFieldSimulator<H: Host, F: FrameScheduler, R: RandomSource> {
	host: H,
	scheduler: F,
	rng: R,
	config: FieldConfig,
	state: FieldState,
	run: Option<Run<H::Surface, F::Handle>>,
	frames: u64,
}

impl<H: Host, F: FrameScheduler, R: RandomSource> ParticleFieldSimulator<H, F, R> {
	/// Idle simulator; nothing touches the host until [`start`](Self::start).
	pub fn new(host: H, scheduler: F, rng: R, config: FieldConfig) -> Self {
		Self {
			host,
			scheduler,
			rng,
			config,
			state: FieldState::Idle,
			run: None,
			frames: 0,
		}
	}

	/// Current lifecycle state.
	pub fn state(&self) -> FieldState {
		self.state
	}

	/// The environment the field is mounted into.
	pub fn host(&self) -> &H {
		&self.host
	}

	/// The frame scheduler driving the loop.
	pub fn scheduler(&self) -> &F {
		&self.scheduler
	}

	/// Particles of the current run; empty when not running.
	pub fn particles(&self) -> &[Particle] {
		self.run
			.as_ref()
			.map(|r| r.system.particles.as_slice())
			.unwrap_or(&[])
	}

	/// Drawing surface of the current run, if running.
	pub fn surface(&self) -> Option<&H::Surface> {
		self.run.as_ref().map(|r| &r.surface)
	}

	/// Connection distance fixed at seeding time.
	pub fn connection_distance(&self) -> Option<f64> {
		self.run.as_ref().map(|r| r.connection_distance)
	}

	/// Frames stepped and rendered since start.
	pub fn frames_rendered(&self) -> u64 {
		self.frames
	}

	/// Activate the field. Only acts from [`FieldState::Idle`].
	///
	/// Reduced motion goes straight to `Stopped` without touching the surface.
	/// A missing surface leaves the simulator `Idle` with nothing scheduled.
	pub fn start(&mut self) -> FieldState {
		if self.state != FieldState::Idle {
			return self.state;
		}

		if self.host.prefers_reduced_motion() {
			info!("particle-field: reduced motion requested, not animating");
			self.state = FieldState::Stopped;
			return self.state;
		}

		self.state = FieldState::Seeding;
		let mut surface = match self.host.acquire_surface() {
			Ok(surface) => surface,
			Err(e) => {
				warn!("particle-field: {}", e);
				self.state = FieldState::Idle;
				return self.state;
			}
		};

		surface.fit(self.host.device_pixel_ratio());
		let (w, h) = surface.logical_size();
		let viewport = self.host.viewport_width();
		let density = &self.config.density;
		let count = density.particle_count(viewport, w, h);
		let connection_distance = density.for_viewport(viewport).connection_distance;
		let system = ParticleSystem::new(w, h, count, &mut self.rng);
		info!(
			"particle-field: seeded {} particles on {}x{} (viewport {}px)",
			system.len(),
			w,
			h,
			viewport
		);

		self.host.attach_resize_listener();
		let pending_frame = self.scheduler.request_frame();
		self.run = Some(Run {
			surface,
			system,
			connection_distance,
			pending_frame,
		});
		self.state = FieldState::Running;
		self.state
	}

	/// Step then render one frame, then schedule the next.
	pub fn on_frame(&mut self) {
		if self.state != FieldState::Running {
			return;
		}
		let Some(run) = self.run.as_mut() else {
			return;
		};
		run.pending_frame = None;

		let (w, h) = run.surface.logical_size();
		run.system.update(w, h);
		render::render(
			&mut run.surface,
			&run.system.particles,
			run.connection_distance,
			&self.config.theme,
		);
		self.frames += 1;

		run.pending_frame = self.scheduler.request_frame();
	}

	/// Re-fit the surface after a window resize.
	///
	/// Particles are left where they are; any outside the new bounds are
	/// wrapped back in by the next step.
	pub fn on_resize(&mut self) {
		if self.state != FieldState::Running {
			return;
		}
		if let Some(run) = self.run.as_mut() {
			let dpr = self.host.device_pixel_ratio();
			run.surface.fit(dpr);
			let (w, h) = run.surface.logical_size();
			debug!("particle-field: resized to {}x{} @{}x", w, h, dpr);
		}
	}

	/// Halt the loop and release everything. Idempotent.
	pub fn stop(&mut self) {
		if self.state == FieldState::Stopped {
			return;
		}
		if let Some(run) = self.run.take() {
			if let Some(handle) = run.pending_frame {
				self.scheduler.cancel_frame(handle);
			}
			self.host.detach_resize_listener();
			info!(
				"particle-field: stopped after {} frames ({} particles released)",
				self.frames,
				run.system.len()
			);
		}
		self.state = FieldState::Stopped;
	}
}
