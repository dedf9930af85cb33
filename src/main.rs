//! Entry point of the slider panel web application.
//! Loads the page configuration and wires the controller into the view.

use log::{error, LevelFilter};
use slider_panel::{Controller, HttpBackend, PanelConfig};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod hooks;
mod logger;
mod page;

use components::{ConfigErrorView, OutputBar, SliderControl};
use hooks::use_panel;

#[derive(Properties, PartialEq)]
struct SliderPanelProps {
    config: Rc<PanelConfig>,
    base_url: AttrValue,
}

/// Sliders on the left, output bars on the right, reset and submit below.
#[function_component(SliderPanel)]
fn panel_view(props: &SliderPanelProps) -> Html {
    let controller = {
        let config = props.config.clone();
        let base_url = props.base_url.to_string();
        use_memo((), move |_| Controller::new(config, HttpBackend::new(base_url)))
    };
    let handle = use_panel(controller.clone());
    let panel = controller.panel();

    let onsubmit = {
        let on_save = handle.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };
    let onreset = handle.on_reset.reform(|_: MouseEvent| ());

    let sliders = props.config.sliders.iter().filter_map(|spec| {
        let state = panel.slider(&spec.name)?.clone();
        let name = spec.name.clone();
        let on_drag = handle.on_drag.reform({
            let name = name.clone();
            move |value: f64| (name.clone(), value)
        });
        let on_commit = handle
            .on_commit
            .reform(move |value: f64| (name.clone(), value));
        Some(html! {
            <SliderControl
                key={spec.name.clone()}
                spec={spec.clone()}
                {state}
                track={panel.track(&spec.name).cloned()}
                {on_drag}
                {on_commit}
            />
        })
    });

    let outputs = props.config.outputs.iter().map(|spec| {
        html! {
            <OutputBar
                key={spec.name.clone()}
                spec={spec.clone()}
                view={panel.output(&spec.name).cloned()}
                on_minimize={handle.on_minimize.clone()}
            />
        }
    });

    html! {
        <form id="sliderForm" class="panel" {onsubmit}>
            <div class="panel-body">
                <div class="sliders">{ for sliders }</div>
                <div class="outputs">{ for outputs }</div>
            </div>
            <div class="panel-actions">
                <button type="button" id="reset" class="btn-secondary" onclick={onreset}>
                    { "Reset" }
                </button>
                <button type="submit" class="btn-primary">{ "Submit" }</button>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Result<Rc<PanelConfig>, String>,
    pub base_url: AttrValue,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    match &props.config {
        Ok(config) => html! {
            <SliderPanel config={config.clone()} base_url={props.base_url.clone()} />
        },
        Err(message) => html! { <ConfigErrorView message={message.clone()} /> },
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let config = page::load_config().map(Rc::new).map_err(|e| {
        error!("{}", e);
        e.to_string()
    });
    let props = AppProps {
        config,
        base_url: page::origin().into(),
    };
    yew::Renderer::<App>::with_props(props).render();
}
