//! Typed panel configuration built from the tables the surrounding page injects.

use crate::error::ConfigError;
use crate::scale::PiecewiseScale;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub min: f64,
    pub max: f64,
}

/// The page configuration exactly as the server templates it: one lookup
/// table per attribute, keyed by slider or output name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageTables {
    pub slider_names: Vec<String>,
    pub output_names: Vec<String>,
    pub slider_ranges: HashMap<String, RangeEntry>,
    pub slider_defaults: HashMap<String, f64>,
    pub slider_opt_values: HashMap<String, f64>,
    #[serde(default)]
    pub slider_context_scale: HashMap<String, f64>,
    pub output_max_values: HashMap<String, f64>,
    pub output_scaling_factors: HashMap<String, f64>,
    #[serde(default)]
    pub slider_names_pretty: HashMap<String, String>,
    #[serde(default)]
    pub slider_info: HashMap<String, String>,
    #[serde(default)]
    pub slider_context_text: HashMap<String, String>,
    #[serde(default)]
    pub output_names_pretty: HashMap<String, String>,
    #[serde(default)]
    pub output_info: HashMap<String, String>,
    #[serde(default)]
    pub output_units: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderSpec {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    /// Recommended value, drawn as a marker on the track.
    pub opt_value: f64,
    /// Multiplier for the secondary "context" unit, if the slider has one.
    pub context_scale: Option<f64>,
    pub label: String,
    pub info: Option<String>,
    pub context_text: Option<String>,
}

impl SliderSpec {
    pub fn scale(&self) -> PiecewiseScale {
        PiecewiseScale::for_domain(self.min, self.max)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputSpec {
    pub name: String,
    pub max_value: f64,
    pub scaling_factor: f64,
    pub label: String,
    pub info: Option<String>,
    pub unit: Option<String>,
}

impl OutputSpec {
    pub fn is_slack(&self) -> bool {
        self.name.contains(crate::config::SLACK_MARKER)
    }
}

/// Immutable configuration for one panel, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub sliders: Vec<SliderSpec>,
    pub outputs: Vec<OutputSpec>,
}

impl PanelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tables: PageTables =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Self::from_tables(tables)
    }

    pub fn from_tables(mut tables: PageTables) -> Result<Self, ConfigError> {
        if tables.slider_names.is_empty() {
            return Err(ConfigError::NoSliders);
        }

        let mut sliders = Vec::with_capacity(tables.slider_names.len());
        for name in &tables.slider_names {
            let range = *tables
                .slider_ranges
                .get(name)
                .ok_or_else(|| missing_slider(name, "slider_ranges"))?;
            if !(range.min < range.max) {
                return Err(ConfigError::EmptyRange {
                    name: name.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
            let default = *tables
                .slider_defaults
                .get(name)
                .ok_or_else(|| missing_slider(name, "slider_defaults"))?;
            let opt_value = *tables
                .slider_opt_values
                .get(name)
                .ok_or_else(|| missing_slider(name, "slider_opt_values"))?;

            sliders.push(SliderSpec {
                name: name.clone(),
                min: range.min,
                max: range.max,
                default: default.clamp(range.min, range.max),
                opt_value: opt_value.clamp(range.min, range.max),
                context_scale: tables.slider_context_scale.get(name).copied(),
                label: tables
                    .slider_names_pretty
                    .remove(name)
                    .unwrap_or_else(|| name.clone()),
                info: tables.slider_info.remove(name),
                context_text: tables.slider_context_text.remove(name),
            });
        }

        let mut outputs = Vec::with_capacity(tables.output_names.len());
        for name in &tables.output_names {
            let max_value = *tables
                .output_max_values
                .get(name)
                .ok_or_else(|| missing_output(name, "output_max_values"))?;
            let scaling_factor = *tables
                .output_scaling_factors
                .get(name)
                .ok_or_else(|| missing_output(name, "output_scaling_factors"))?;

            outputs.push(OutputSpec {
                name: name.clone(),
                max_value,
                scaling_factor,
                label: tables
                    .output_names_pretty
                    .remove(name)
                    .unwrap_or_else(|| name.clone()),
                info: tables.output_info.remove(name),
                unit: tables.output_units.remove(name),
            });
        }

        Ok(PanelConfig { sliders, outputs })
    }

    pub fn slider(&self, name: &str) -> Option<&SliderSpec> {
        self.sliders.iter().find(|s| s.name == name)
    }

    pub fn output(&self, name: &str) -> Option<&OutputSpec> {
        self.outputs.iter().find(|o| o.name == name)
    }
}

fn missing_slider(name: &str, table: &'static str) -> ConfigError {
    ConfigError::MissingSliderEntry {
        name: name.to_string(),
        table,
    }
}

fn missing_output(name: &str, table: &'static str) -> ConfigError {
    ConfigError::MissingOutputEntry {
        name: name.to_string(),
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "slider_names": ["wind", "h2"],
        "output_names": ["slack", "emissions"],
        "slider_ranges": {"wind": {"min": 0, "max": 80.5}, "h2": {"min": 0, "max": 20}},
        "slider_defaults": {"wind": 15, "h2": 25},
        "slider_opt_values": {"wind": 19.3, "h2": 0},
        "slider_context_scale": {"wind": 0.2068},
        "output_max_values": {"slack": 0.2, "emissions": 5000},
        "output_scaling_factors": {"slack": 100, "emissions": 0.0004},
        "slider_names_pretty": {"wind": "Wind power"},
        "output_units": {"emissions": "tCO2 per person"}
    }"#;

    #[test]
    fn parses_page_tables_in_declared_order() {
        let cfg = PanelConfig::from_json(PAGE).unwrap();
        let names: Vec<_> = cfg.sliders.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["wind", "h2"]);

        let wind = cfg.slider("wind").unwrap();
        assert_eq!(wind.label, "Wind power");
        assert_eq!(wind.context_scale, Some(0.2068));
        assert_eq!(wind.max, 80.5);

        let h2 = cfg.slider("h2").unwrap();
        assert_eq!(h2.label, "h2");
        assert_eq!(h2.context_scale, None);
        // default outside the domain is pulled back in
        assert_eq!(h2.default, 20.0);

        assert!(cfg.output("slack").unwrap().is_slack());
        assert!(!cfg.output("emissions").unwrap().is_slack());
        assert_eq!(
            cfg.output("emissions").unwrap().unit.as_deref(),
            Some("tCO2 per person")
        );
    }

    #[test]
    fn reports_missing_slider_entries() {
        let mut tables: PageTables = serde_json::from_str(PAGE).unwrap();
        tables.slider_defaults.remove("h2");
        assert_eq!(
            PanelConfig::from_tables(tables),
            Err(ConfigError::MissingSliderEntry {
                name: "h2".into(),
                table: "slider_defaults"
            })
        );
    }

    #[test]
    fn reports_missing_output_entries() {
        let mut tables: PageTables = serde_json::from_str(PAGE).unwrap();
        tables.output_scaling_factors.remove("slack");
        assert!(matches!(
            PanelConfig::from_tables(tables),
            Err(ConfigError::MissingOutputEntry { table: "output_scaling_factors", .. })
        ));
    }

    #[test]
    fn rejects_empty_ranges() {
        let mut tables: PageTables = serde_json::from_str(PAGE).unwrap();
        tables
            .slider_ranges
            .insert("h2".into(), RangeEntry { min: 5.0, max: 5.0 });
        assert!(matches!(
            PanelConfig::from_tables(tables),
            Err(ConfigError::EmptyRange { .. })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            PanelConfig::from_json("{not json"),
            Err(ConfigError::Malformed(_))
        ));
        assert_eq!(
            PanelConfig::from_json(r#"{"slider_names": [], "output_names": [],
                "slider_ranges": {}, "slider_defaults": {}, "slider_opt_values": {},
                "output_max_values": {}, "output_scaling_factors": {}}"#),
            Err(ConfigError::NoSliders)
        );
    }
}
