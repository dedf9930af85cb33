use crate::page;
use log::{debug, warn};
use slider_panel::config::{FOLLOW_UP_ROUTE, SAVE_ERROR_MESSAGE};
use slider_panel::{Backend, Controller, PanelError, SyncOutcome};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Callbacks driving a panel controller from the view.
#[derive(Clone)]
pub struct PanelHandle {
    /// Slider moved (drag in progress): `(slider name, value)`.
    pub on_drag: Callback<(String, f64)>,
    /// Slider released: `(slider name, value)`. Starts a sync cycle.
    pub on_commit: Callback<(String, f64)>,
    /// Jump to the minimum of the named output.
    pub on_minimize: Callback<String>,
    pub on_reset: Callback<()>,
    pub on_save: Callback<()>,
}

/// Run a panel action in the background and redraw when it settles.
fn spawn_action<F>(redraw: UseForceUpdateHandle, action: &'static str, fut: F)
where
    F: Future<Output = Result<SyncOutcome, PanelError>> + 'static,
{
    spawn_local(async move {
        match fut.await {
            Ok(outcome) => debug!("{} finished: {:?}", action, outcome),
            // The panel keeps its previous state and stays usable.
            Err(e) => warn!("{} failed: {}", action, e),
        }
        redraw.force_update();
    });
}

/// Wire a controller into the component: synchronise once on mount and
/// expose callbacks for every panel action.
#[hook]
pub fn use_panel<B: Backend + 'static>(controller: Rc<Controller<B>>) -> PanelHandle {
    let redraw = use_force_update();

    {
        let controller = controller.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            spawn_action(redraw, "initial sync", async move { controller.sync().await });
            || ()
        });
    }

    let on_drag = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |(name, value): (String, f64)| {
            if controller.drag(&name, value).is_some() {
                redraw.force_update();
            }
        })
    };

    let on_commit = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |(name, value): (String, f64)| {
            let controller = controller.clone();
            spawn_action(redraw.clone(), "sync", async move {
                controller.commit(&name, value).await
            });
        })
    };

    let on_minimize = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |metric: String| {
            let controller = controller.clone();
            spawn_action(redraw.clone(), "minimise", async move {
                controller.minimize(&metric).await
            });
        })
    };

    let on_reset = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            spawn_action(redraw.clone(), "reset", async move { controller.reset().await });
        })
    };

    let on_save = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            spawn_local(async move {
                match controller.save().await {
                    Ok(()) => page::navigate(FOLLOW_UP_ROUTE),
                    Err(e) => {
                        warn!("{}", e);
                        page::alert(SAVE_ERROR_MESSAGE);
                    }
                }
            });
        })
    };

    PanelHandle {
        on_drag,
        on_commit,
        on_minimize,
        on_reset,
        on_save,
    }
}
