//! Pure view computations: configuration + values + backend responses in,
//! label texts, bar geometry and track gradients out. The Yew components only
//! copy these into the DOM.

use crate::color::ColorScale;
use crate::config::{FEASIBLE_COLOUR, INFEASIBLE_COLOUR};
use crate::model::{OutputSpec, SliderSpec};
use crate::utils::{format_fixed1, format_short1, round1};
use serde::{Deserialize, Serialize};

/// Feasible sub-range of a slider reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftBounds {
    pub min: f64,
    pub max: f64,
}

impl SoftBounds {
    /// Inverted bounds describe a single feasible point: their midpoint.
    pub fn collapsed(self) -> Self {
        if self.min > self.max {
            let mid = (self.min + self.max) / 2.0;
            Self { min: mid, max: mid }
        } else {
            self
        }
    }
}

/// Insets from the hard domain edges the slider handle may not enter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
}

impl Padding {
    pub const NONE: Padding = Padding {
        left: 0.0,
        right: 0.0,
    };

    /// The range of values the handle may take under this padding.
    pub fn allowed_range(&self, spec: &SliderSpec) -> (f64, f64) {
        let lo = spec.min + self.left;
        let hi = (spec.max - self.right).max(lo);
        (lo, hi)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackView {
    pub padding: Padding,
    pub soft_min_percent: f64,
    pub soft_max_percent: f64,
    /// CSS `background` value for the track.
    pub background: String,
}

pub fn track_view(spec: &SliderSpec, bounds: SoftBounds) -> TrackView {
    let SoftBounds { min: soft_min, max: soft_max } = bounds.collapsed();
    let span = spec.span();
    let padding = Padding {
        left: (soft_min - spec.min).clamp(0.0, span),
        right: (spec.max - soft_max).clamp(0.0, span),
    };

    let scale = spec.scale();
    let soft_min_percent = scale.percent_of(soft_min);
    let soft_max_percent = scale.percent_of(soft_max);

    TrackView {
        padding,
        soft_min_percent,
        soft_max_percent,
        background: feasibility_gradient(soft_min_percent, soft_max_percent),
    }
}

pub fn feasibility_gradient(from_percent: f64, to_percent: f64) -> String {
    format!(
        "linear-gradient(to right, {bad} {from}%, {ok} {from}%, {ok} {to}%, {bad} {to}%)",
        bad = INFEASIBLE_COLOUR,
        ok = FEASIBLE_COLOUR,
        from = from_percent,
        to = to_percent,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputView {
    pub text: String,
    /// Bar fill in `[0, 1]`.
    pub fraction: f64,
    pub bar_color: String,
}

impl OutputView {
    pub fn bar_height(&self) -> String {
        format!("{}%", self.fraction * 100.0)
    }
}

/// `value / max_value`, clamped to `[0, 1]`.
pub fn normalized_fraction(value: f64, max_value: f64) -> f64 {
    if !(max_value > 0.0) || value.is_nan() {
        return 0.0;
    }
    (value / max_value).clamp(0.0, 1.0)
}

/// Scaled, rounded text; slack outputs read `+<value>%`.
pub fn output_text(spec: &OutputSpec, value: f64) -> String {
    let shown = format_short1(value * spec.scaling_factor);
    if spec.is_slack() {
        format!("+{}%", shown)
    } else {
        shown
    }
}

pub fn output_view(spec: &OutputSpec, value: f64, colors: &ColorScale) -> OutputView {
    let fraction = normalized_fraction(value, spec.max_value);
    OutputView {
        text: output_text(spec, value),
        fraction,
        bar_color: colors.at(fraction).to_hex(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderLabels {
    pub value: String,
    pub context: Option<String>,
}

pub fn slider_labels(spec: &SliderSpec, value: f64) -> SliderLabels {
    SliderLabels {
        value: format_fixed1(value),
        context: spec.context_scale.map(|scale| format_fixed1(value * scale)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub percent: f64,
    pub label: String,
}

pub fn ticks(spec: &SliderSpec) -> Vec<Tick> {
    let scale = spec.scale();
    scale
        .ticks()
        .into_iter()
        .map(|value| Tick {
            value,
            percent: scale.percent_of(value).clamp(0.0, 100.0),
            label: format!("{}", value),
        })
        .collect()
}

/// Track position of the recommended value marker.
pub fn marker_percent(spec: &SliderSpec) -> f64 {
    spec.scale().percent_of(spec.opt_value)
}

pub fn max_label(spec: &SliderSpec) -> String {
    format!("{}", round1(spec.max))
}
