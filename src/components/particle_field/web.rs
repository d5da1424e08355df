//! Browser implementations of the simulator seams.
//!
//! `requestAnimationFrame` and `resize` callbacks are `Closure`s held in shared
//! slots, so the component can create them after the host and scheduler exist
//! and drop them on cleanup.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::error::MountError;
use super::lifecycle::{FrameScheduler, Host, ParticleFieldSimulator};
use super::render::Surface;
use super::theme::Color;

/// Shared slot for a JS callback.
pub type CallbackSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Simulator wired to the real browser.
pub type BrowserSimulator = ParticleFieldSimulator<BrowserHost, AnimationFrameScheduler, SmallRng>;

fn window() -> Result<Window, MountError> {
	web_sys::window().ok_or(MountError::NoWindow)
}

/// `prefers-reduced-motion: reduce`, false when the query is unsupported.
pub fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media("(prefers-reduced-motion: reduce)")
		.ok()
		.flatten()
		.map(|mq| mq.matches())
		.unwrap_or(false)
}

/// Seed a fast RNG from the JS engine's entropy.
pub fn entropy_rng() -> SmallRng {
	let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
	SmallRng::seed_from_u64((hi << 32) | lo)
}

/// A canvas element and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
	fn logical_size(&self) -> (f64, f64) {
		(
			self.canvas.offset_width() as f64,
			self.canvas.offset_height() as f64,
		)
	}

	fn fit(&mut self, device_pixel_ratio: f64) {
		let (w, h) = self.logical_size();
		self.canvas.set_width((w * device_pixel_ratio) as u32);
		self.canvas.set_height((h * device_pixel_ratio) as u32);
		// Resizing the backing store resets the transform, so set rather than scale.
		let _ = self
			.ctx
			.set_transform(device_pixel_ratio, 0.0, 0.0, device_pixel_ratio, 0.0, 0.0);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}
}

/// The browser window plus the component's canvas.
pub struct BrowserHost {
	window: Window,
	canvas: HtmlCanvasElement,
	resize_cb: CallbackSlot,
	listening: bool,
}

impl BrowserHost {
	/// Host for `canvas`, delivering resize events to `resize_cb`.
	pub fn new(canvas: HtmlCanvasElement, resize_cb: CallbackSlot) -> Result<Self, MountError> {
		Ok(Self {
			window: window()?,
			canvas,
			resize_cb,
			listening: false,
		})
	}
}

impl Host for BrowserHost {
	type Surface = CanvasSurface;

	fn prefers_reduced_motion(&self) -> bool {
		prefers_reduced_motion(&self.window)
	}

	fn device_pixel_ratio(&self) -> f64 {
		self.window.device_pixel_ratio()
	}

	fn viewport_width(&self) -> f64 {
		self.window
			.inner_width()
			.ok()
			.and_then(|w| w.as_f64())
			.unwrap_or(0.0)
	}

	fn acquire_surface(&mut self) -> Result<CanvasSurface, MountError> {
		if !self.canvas.is_connected() {
			return Err(MountError::CanvasNotMounted);
		}
		let ctx = self
			.canvas
			.get_context("2d")
			.map_err(|e| MountError::ContextUnavailable(format!("{:?}", e)))?
			.ok_or_else(|| MountError::ContextUnavailable("null".to_string()))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| MountError::WrongContextType)?;

		Ok(CanvasSurface {
			canvas: self.canvas.clone(),
			ctx,
		})
	}

	fn attach_resize_listener(&mut self) {
		if self.listening {
			return;
		}
		if let Some(ref cb) = *self.resize_cb.borrow() {
			self.listening = self
				.window
				.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
				.is_ok();
		}
	}

	fn detach_resize_listener(&mut self) {
		if !self.listening {
			return;
		}
		if let Some(ref cb) = *self.resize_cb.borrow() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		self.listening = false;
	}
}

/// `requestAnimationFrame` / `cancelAnimationFrame`.
pub struct AnimationFrameScheduler {
	window: Window,
	callback: CallbackSlot,
}

impl AnimationFrameScheduler {
	/// Scheduler invoking whatever closure sits in `callback`.
	pub fn new(callback: CallbackSlot) -> Result<Self, MountError> {
		Ok(Self {
			window: window()?,
			callback,
		})
	}
}

impl FrameScheduler for AnimationFrameScheduler {
	type Handle = i32;

	fn request_frame(&mut self) -> Option<i32> {
		let slot = self.callback.borrow();
		let cb = slot.as_ref()?;
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}
