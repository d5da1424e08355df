//! particle-field: ambient particle background for the site's hero sections.
//!
//! This crate provides a WASM canvas component that animates a field of
//! drifting, pulsing particles joined by distance-faded lines, sized for the
//! viewport and disabled entirely under reduced motion.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub mod components;

pub use components::particle_field::{FieldConfig, FieldTheme, ParticleField};

/// Initialize logging and panic hooks for the WASM target.
///
/// Debug builds log at `Debug` so per-resize messages show up; release builds
/// keep the console to lifecycle events.
pub fn init_logging() {
	let level = if cfg!(debug_assertions) {
		Level::Debug
	} else {
		Level::Info
	};
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!(
		"particle-field {}: logging initialized at {}",
		env!("CARGO_PKG_VERSION"),
		level
	);
}

/// Read field configuration from `<script type="application/json" id="particle-field-config">`.
///
/// A missing element means defaults without comment. A present but invalid
/// document is reported and ignored as a whole.
fn load_field_config() -> Option<FieldConfig> {
	let document = web_sys::window()?.document()?;
	let script: HtmlScriptElement = document
		.get_element_by_id("particle-field-config")?
		.dyn_into()
		.ok()?;
	let json_text = script.text().ok()?;

	let parsed = match FieldConfig::from_json(&json_text) {
		Ok(parsed) => parsed,
		Err(e) => {
			warn!("particle-field: ignoring invalid configuration: {}", e);
			return None;
		}
	};
	if !parsed.unknown.is_empty() {
		warn!(
			"particle-field: unknown configuration sections ignored: {}",
			parsed.unknown.join(", ")
		);
	}
	if parsed.overridden.is_empty() {
		info!("particle-field: configuration element present but empty, using defaults");
	} else {
		info!(
			"particle-field: configuration overrides {}",
			parsed.overridden.join(", ")
		);
	}
	Some(parsed.config)
}

/// Main application component.
/// Renders the hero section with the particle field behind the headline.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="hero" style="position: relative; min-height: 100vh; overflow: hidden;">
			<ParticleField config=config />
			<div class="hero-content" style="position: relative;">
				<h1>"Software that speaks every language"</h1>
				<p class="subtitle">"Messaging, translation and analytics for growing teams."</p>
			</div>
		</section>
	}
}
