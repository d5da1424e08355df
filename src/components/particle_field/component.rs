//! Leptos component wrapping the particle field canvas.
//!
//! The component creates an absolutely positioned, non-interactive canvas that
//! fills its parent. After mount it builds a [`BrowserSimulator`] and starts it;
//! the `requestAnimationFrame` and `resize` closures forward to the simulator.
//! On cleanup the simulator is stopped and the closures are dropped.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::lifecycle::ParticleFieldSimulator;
use super::types::FieldConfig;
use super::web::{
	self, AnimationFrameScheduler, BrowserHost, BrowserSimulator, CallbackSlot,
};

/// Renders the ambient particle field behind its siblings.
///
/// Place it inside a positioned container (`position: relative`); the canvas
/// covers the container and lets pointer events through. Nothing is rendered
/// when the user prefers reduced motion.
#[component]
pub fn ParticleField(#[prop(optional)] config: Option<FieldConfig>) -> impl IntoView {
	let config = config.unwrap_or_default();

	let reduced_motion = web_sys::window()
		.map(|w| web::prefers_reduced_motion(&w))
		.unwrap_or(false);
	if reduced_motion {
		info!("particle-field: reduced motion requested, skipping canvas");
		return ().into_any();
	}

	let style = format!(
		"position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; opacity: {};",
		config.theme.canvas_opacity
	);

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let simulator: Rc<RefCell<Option<BrowserSimulator>>> = Rc::new(RefCell::new(None));
	let animate: CallbackSlot = Rc::new(RefCell::new(None));
	let resize_cb: CallbackSlot = Rc::new(RefCell::new(None));
	let (simulator_init, animate_init, resize_cb_init) =
		(simulator.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if simulator_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		let host = BrowserHost::new(canvas, resize_cb_init.clone());
		let scheduler = AnimationFrameScheduler::new(animate_init.clone());
		let (host, scheduler) = match (host, scheduler) {
			(Ok(h), Ok(s)) => (h, s),
			(Err(e), _) | (_, Err(e)) => {
				warn!("particle-field: {}", e);
				return;
			}
		};

		let simulator_anim = simulator_init.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut sim) = *simulator_anim.borrow_mut() {
				sim.on_frame();
			}
		}));

		let simulator_resize = simulator_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut sim) = *simulator_resize.borrow_mut() {
				sim.on_resize();
			}
		}));

		let mut sim =
			ParticleFieldSimulator::new(host, scheduler, web::entropy_rng(), config.clone());
		sim.start();
		*simulator_init.borrow_mut() = Some(sim);
	});

	let teardown = SendWrapper::new((simulator, animate, resize_cb));
	on_cleanup(move || {
		let (simulator, animate, resize_cb) = teardown.take();
		let sim = simulator.borrow_mut().take();
		if let Some(mut sim) = sim {
			sim.stop();
		}
		// The closures capture the simulator slot; dropping them breaks the cycle.
		animate.borrow_mut().take();
		resize_cb.borrow_mut().take();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			aria-hidden="true"
			style=style
		/>
	}
	.into_any()
}
