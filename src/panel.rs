//! Runtime state of the panel: slider values and paddings plus the most
//! recently rendered output and track views.

use crate::api::{Coordinates, SliderValues, UpdateResponse};
use crate::color::ColorScale;
use crate::model::{PanelConfig, SliderSpec};
use crate::render::{output_view, track_view, OutputView, Padding, TrackView};
use log::{debug, warn};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    pub value: f64,
    pub padding: Padding,
}

/// What applying an `/update` response did to the outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Outputs and limits were rendered.
    Rendered,
    /// The backend could not compute metrics; only limits were applied.
    NoMetrics,
    /// A newer cycle was started before this one finished; nothing applied.
    Superseded,
}

#[derive(Debug, Clone)]
pub struct Panel {
    config: Rc<PanelConfig>,
    sliders: Vec<SliderState>,
    outputs: HashMap<String, OutputView>,
    tracks: HashMap<String, TrackView>,
    colors: ColorScale,
}

impl Panel {
    /// Every slider starts at its default with no padding.
    pub fn new(config: Rc<PanelConfig>) -> Self {
        let sliders = config
            .sliders
            .iter()
            .map(|spec| SliderState {
                value: spec.default,
                padding: Padding::NONE,
            })
            .collect();
        Self {
            config,
            sliders,
            outputs: HashMap::new(),
            tracks: HashMap::new(),
            colors: ColorScale::traffic_light(),
        }
    }

    pub fn config(&self) -> &Rc<PanelConfig> {
        &self.config
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.config.sliders.iter().position(|s| s.name == name)
    }

    pub fn slider(&self, name: &str) -> Option<&SliderState> {
        self.index_of(name).map(|i| &self.sliders[i])
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.slider(name).map(|s| s.value)
    }

    pub fn output(&self, name: &str) -> Option<&OutputView> {
        self.outputs.get(name)
    }

    pub fn track(&self, name: &str) -> Option<&TrackView> {
        self.tracks.get(name)
    }

    /// Current values keyed by slider name, as sent to the backend.
    pub fn values(&self) -> SliderValues {
        self.config
            .sliders
            .iter()
            .zip(&self.sliders)
            .map(|(spec, state)| (spec.name.clone(), state.value))
            .collect()
    }

    /// Move a slider the way a user would: the value stays within the
    /// currently allowed (padded) range. Returns the value actually taken.
    pub fn set_value(&mut self, name: &str, value: f64) -> Option<f64> {
        let idx = self.index_of(name)?;
        let spec = &self.config.sliders[idx];
        let state = &mut self.sliders[idx];
        state.value = clamp_to_padding(spec, state.padding, value);
        Some(state.value)
    }

    fn clear_padding_and_set(&mut self, idx: usize, value: f64) {
        let spec = &self.config.sliders[idx];
        let state = &mut self.sliders[idx];
        state.padding = Padding::NONE;
        state.value = spec.clamp(value);
    }

    /// Clear every padding and put each slider back at its default.
    pub fn reset(&mut self) {
        for idx in 0..self.sliders.len() {
            let default = self.config.sliders[idx].default;
            self.clear_padding_and_set(idx, default);
        }
    }

    /// Clear every padding and jump to the given coordinates. Sliders with no
    /// coordinate keep their value.
    pub fn jump_to(&mut self, coords: &Coordinates) {
        for idx in 0..self.sliders.len() {
            let name = &self.config.sliders[idx].name;
            let target = match coords.get(name) {
                Some(v) if v.is_finite() => *v,
                _ => {
                    debug!("no coordinate for slider '{}', keeping its value", name);
                    self.sliders[idx].value
                }
            };
            self.clear_padding_and_set(idx, target);
        }
    }

    /// Apply an `/update` response: render outputs (unless unavailable), then
    /// pad and repaint every slider that has a limits entry.
    pub fn apply_update(&mut self, response: &UpdateResponse) -> SyncOutcome {
        let outcome = match &response.outputs {
            None => {
                warn!("No metrics could be computed.");
                SyncOutcome::NoMetrics
            }
            Some(outputs) => {
                for spec in &self.config.outputs {
                    match outputs.get(&spec.name) {
                        Some(value) => {
                            let view = output_view(spec, *value, &self.colors);
                            self.outputs.insert(spec.name.clone(), view);
                        }
                        None => warn!("update response has no value for output '{}'", spec.name),
                    }
                }
                SyncOutcome::Rendered
            }
        };

        let Some(limits) = &response.limits else {
            return outcome;
        };
        for (idx, spec) in self.config.sliders.iter().enumerate() {
            let Some(bounds) = limits.get(&spec.name) else {
                debug!("no limits for slider '{}'", spec.name);
                continue;
            };
            let view = track_view(spec, *bounds);
            let state = &mut self.sliders[idx];
            state.padding = view.padding;
            state.value = clamp_to_padding(spec, state.padding, state.value);
            self.tracks.insert(spec.name.clone(), view);
        }

        outcome
    }
}

fn clamp_to_padding(spec: &SliderSpec, padding: Padding, value: f64) -> f64 {
    let (lo, hi) = padding.allowed_range(spec);
    if value.is_nan() {
        return lo;
    }
    value.clamp(lo, hi)
}
