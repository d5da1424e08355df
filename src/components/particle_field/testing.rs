//! Test doubles for driving the field without a browser.

use super::error::MountError;
use super::lifecycle::{FrameScheduler, Host};
use super::render::Surface;
use super::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Clear(f64, f64),
	Circle(f64, f64, f64, Color),
	Line((f64, f64), (f64, f64), Color, f64),
}

/// Surface that records every draw call.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
	pub width: f64,
	pub height: f64,
	pub commands: Vec<DrawCommand>,
	/// Device pixel ratios passed to `fit`, in order.
	pub fits: Vec<f64>,
}

impl RecordingSurface {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			..Default::default()
		}
	}

	pub fn circles(&self) -> Vec<(f64, f64, f64, Color)> {
		self.commands
			.iter()
			.filter_map(|c| match *c {
				DrawCommand::Circle(x, y, r, color) => Some((x, y, r, color)),
				_ => None,
			})
			.collect()
	}

	pub fn lines(&self) -> Vec<((f64, f64), (f64, f64), Color, f64)> {
		self.commands
			.iter()
			.filter_map(|c| match *c {
				DrawCommand::Line(a, b, color, w) => Some((a, b, color, w)),
				_ => None,
			})
			.collect()
	}

	pub fn clears(&self) -> usize {
		self.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Clear(..)))
			.count()
	}
}

impl Surface for RecordingSurface {
	fn logical_size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	fn fit(&mut self, device_pixel_ratio: f64) {
		self.fits.push(device_pixel_ratio);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.commands.push(DrawCommand::Clear(width, height));
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.commands.push(DrawCommand::Circle(x, y, radius, color));
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.commands.push(DrawCommand::Line(from, to, color, width));
	}
}

/// Scheduler whose frames only run when the test fires them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
	next_id: u32,
	pub pending: Vec<u32>,
	pub cancelled: Vec<u32>,
	pub requests: usize,
}

impl ManualScheduler {
	/// Pop the oldest pending frame, as the display refresh would.
	pub fn fire(&mut self) -> Option<u32> {
		if self.pending.is_empty() {
			None
		} else {
			Some(self.pending.remove(0))
		}
	}
}

impl FrameScheduler for ManualScheduler {
	type Handle = u32;

	fn request_frame(&mut self) -> Option<u32> {
		self.next_id += 1;
		self.requests += 1;
		self.pending.push(self.next_id);
		Some(self.next_id)
	}

	fn cancel_frame(&mut self, handle: u32) {
		self.pending.retain(|&id| id != handle);
		self.cancelled.push(handle);
	}
}

/// Host with a configurable environment and listener bookkeeping.
#[derive(Debug)]
pub struct FakeHost {
	pub reduced_motion: bool,
	pub device_pixel_ratio: f64,
	pub viewport_width: f64,
	/// `None` makes surface acquisition fail.
	pub surface_size: Option<(f64, f64)>,
	pub surface_requests: usize,
	pub resize_listeners: usize,
	pub detach_calls: usize,
}

impl FakeHost {
	pub fn desktop() -> Self {
		Self {
			reduced_motion: false,
			device_pixel_ratio: 2.0,
			viewport_width: 1280.0,
			surface_size: Some((1280.0, 720.0)),
			surface_requests: 0,
			resize_listeners: 0,
			detach_calls: 0,
		}
	}
}

impl Host for FakeHost {
	type Surface = RecordingSurface;

	fn prefers_reduced_motion(&self) -> bool {
		self.reduced_motion
	}

	fn device_pixel_ratio(&self) -> f64 {
		self.device_pixel_ratio
	}

	fn viewport_width(&self) -> f64 {
		self.viewport_width
	}

	fn acquire_surface(&mut self) -> Result<RecordingSurface, MountError> {
		self.surface_requests += 1;
		self.surface_size
			.map(|(w, h)| RecordingSurface::new(w, h))
			.ok_or(MountError::CanvasNotMounted)
	}

	fn attach_resize_listener(&mut self) {
		self.resize_listeners += 1;
	}

	fn detach_resize_listener(&mut self) {
		self.detach_calls += 1;
		self.resize_listeners = self.resize_listeners.saturating_sub(1);
	}
}
