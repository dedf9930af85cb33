//! Yew view components for the slider panel.
//!
//! Components are stateless: they render the view structs computed in
//! `slider_panel::render` and report user input through callbacks.

use log::warn;
use slider_panel::config::TRACK_STEP_PERCENT;
use slider_panel::panel::SliderState;
use slider_panel::render::{
    marker_percent, max_label, slider_labels, ticks, OutputView, TrackView,
};
use slider_panel::utils::parse_clamped;
use slider_panel::{OutputSpec, SliderSpec};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// One range slider with its value labels, recommended-value marker, tick
/// marks and feasibility gradient.
#[derive(Properties, PartialEq)]
pub struct SliderControlProps {
    pub spec: SliderSpec,
    pub state: SliderState,
    pub track: Option<TrackView>,
    pub on_drag: Callback<f64>,
    pub on_commit: Callback<f64>,
}

/// Convert the range input's percent position back into a slider value.
fn input_to_value(spec: &SliderSpec, e: &Event) -> Option<f64> {
    let input: HtmlInputElement = e.target_unchecked_into();
    match parse_clamped(&input.value(), 0.0, 100.0, &spec.label) {
        Ok(percent) => Some(spec.scale().value_at(percent)),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

#[function_component(SliderControl)]
pub fn slider_control(props: &SliderControlProps) -> Html {
    let spec = &props.spec;
    let labels = slider_labels(spec, props.state.value);
    let percent = spec.scale().percent_of(props.state.value);

    let oninput = {
        let spec = spec.clone();
        let on_drag = props.on_drag.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_to_value(&spec, &e) {
                on_drag.emit(value);
            }
        })
    };

    let onchange = {
        let spec = spec.clone();
        let on_commit = props.on_commit.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = input_to_value(&spec, &e) {
                on_commit.emit(value);
            }
        })
    };

    let track_style = props
        .track
        .as_ref()
        .map(|t| format!("background: {};", t.background))
        .unwrap_or_default();

    html! {
        <div class="slider-group" title={spec.info.clone()}>
            <div class="slider-header">
                <label for={format!("{}_input", spec.name)}>{ &spec.label }</label>
                <span id={format!("{}_value_label", spec.name)} class="slider-value">
                    { &labels.value }
                </span>
                if let Some(context) = &labels.context {
                    <span class="slider-context">
                        <span id={format!("{}_context_value_label", spec.name)}>{ context }</span>
                        if let Some(text) = &spec.context_text {
                            { " " }{ text }
                        }
                    </span>
                }
            </div>
            <div class="slider-body">
                <div id={spec.name.clone()} class="slider-track" style={track_style}>
                    <div class="slider-marker"
                        style={format!("left: {}%;", marker_percent(spec))}></div>
                    <input type="range"
                        id={format!("{}_input", spec.name)}
                        min="0"
                        max="100"
                        step={TRACK_STEP_PERCENT.to_string()}
                        value={percent.to_string()}
                        {oninput}
                        {onchange}
                    />
                    <div class="slider-pips">
                        { ticks(spec).into_iter().map(|tick| html! {
                            <span class="slider-pip" style={format!("left: {}%;", tick.percent)}>
                                { tick.label }
                            </span>
                        }).collect::<Html>() }
                    </div>
                </div>
                <span id={format!("{}_max_value_label", spec.name)} class="slider-max">
                    { max_label(spec) }
                </span>
            </div>
        </div>
    }
}

/// Vertical bar for one output metric plus its "minimise" button.
#[derive(Properties, PartialEq)]
pub struct OutputBarProps {
    pub spec: OutputSpec,
    pub view: Option<OutputView>,
    pub on_minimize: Callback<String>,
}

#[function_component(OutputBar)]
pub fn output_bar(props: &OutputBarProps) -> Html {
    let spec = &props.spec;
    let (text, bar_style) = match &props.view {
        Some(view) => (
            view.text.clone(),
            format!(
                "height: {}; background-color: {};",
                view.bar_height(),
                view.bar_color
            ),
        ),
        None => (String::new(), "height: 0%;".to_string()),
    };

    let onclick = {
        let name = spec.name.clone();
        props.on_minimize.reform(move |_: MouseEvent| name.clone())
    };

    html! {
        <div class="output" title={spec.info.clone()}>
            <div class="output-bar-container">
                <div id={format!("{}_bar", spec.name)} class="output-bar" style={bar_style}></div>
            </div>
            <div class="output-label">{ &spec.label }</div>
            <div class="output-value">
                <span id={spec.name.clone()}>{ text }</span>
                if let Some(unit) = &spec.unit {
                    <span class="output-unit">{ " " }{ unit }</span>
                }
            </div>
            <button type="button" class="btn-secondary small"
                id={format!("min_{}", spec.name)} {onclick}>
                { "Minimise" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

#[function_component(ConfigErrorView)]
pub fn config_error_view(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="current-error">
            <p>{ "The slider panel could not be loaded." }</p>
            <p class="input-error">{ &props.message }</p>
        </div>
    }
}
