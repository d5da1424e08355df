//! Configuration accepted by the particle field component.

use serde::Deserialize;

use super::scale::DensityConfig;
use super::theme::FieldTheme;

/// Complete field configuration: look and density.
///
/// Every field is optional in JSON; anything missing keeps its default.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Colors and stroke constants.
	pub theme: FieldTheme,
	/// Particle count and connection distance per viewport tier.
	pub density: DensityConfig,
}

/// Top-level sections a config document may override.
const SECTIONS: [&str; 2] = ["theme", "density"];

/// A parsed config document and what it touched.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedConfig {
	/// The resulting configuration, defaults filled in.
	pub config: FieldConfig,
	/// Known sections present in the document, in [`SECTIONS`] order.
	pub overridden: Vec<&'static str>,
	/// Top-level keys that are not config sections; ignored.
	pub unknown: Vec<String>,
}

impl FieldConfig {
	/// Parse a JSON document, noting which sections it overrides.
	pub fn from_json(json: &str) -> Result<ParsedConfig, serde_json::Error> {
		let value: serde_json::Value = serde_json::from_str(json)?;
		let keys: Vec<String> = value
			.as_object()
			.map(|obj| obj.keys().cloned().collect())
			.unwrap_or_default();

		let overridden = SECTIONS
			.into_iter()
			.filter(|s| keys.iter().any(|k| k == s))
			.collect();
		let unknown = keys
			.into_iter()
			.filter(|k| !SECTIONS.contains(&k.as_str()))
			.collect();

		Ok(ParsedConfig {
			config: serde_json::from_value(value)?,
			overridden,
			unknown,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_default() {
		let cfg: FieldConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(cfg, FieldConfig::default());
	}

	#[test]
	fn density_override() {
		let cfg: FieldConfig = serde_json::from_str(
			r#"{ "density": { "wide": { "particles": 120, "connection_distance": 150.0 } } }"#,
		)
		.unwrap();
		assert_eq!(cfg.density.for_viewport(1920.0).particles, 120);
		assert_eq!(cfg.density.for_viewport(1920.0).connection_distance, 150.0);
		assert_eq!(cfg.density.for_viewport(800.0).particles, 45);
		assert_eq!(cfg.theme.canvas_opacity, 0.6);
	}

	#[test]
	fn from_json_reports_sections() {
		let parsed = FieldConfig::from_json(
			r#"{ "density": { "medium_min_width": 700.0 }, "colour": {}, "theme": {} }"#,
		)
		.unwrap();
		assert_eq!(parsed.overridden, vec!["theme", "density"]);
		assert_eq!(parsed.unknown, vec!["colour".to_string()]);
		assert_eq!(parsed.config.density.for_viewport(720.0).particles, 45);
	}

	#[test]
	fn from_json_empty_document_overrides_nothing() {
		let parsed = FieldConfig::from_json("{}").unwrap();
		assert!(parsed.overridden.is_empty());
		assert!(parsed.unknown.is_empty());
		assert_eq!(parsed.config, FieldConfig::default());
	}

	#[test]
	fn from_json_rejects_malformed_section() {
		assert!(FieldConfig::from_json(r#"{ "density": { "wide": 3 } }"#).is_err());
		assert!(FieldConfig::from_json("not json").is_err());
	}
}
