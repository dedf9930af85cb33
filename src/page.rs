//! Access to the hosting page: injected configuration, origin, alerts and
//! navigation.

use gloo_utils::{document, window};
use log::{debug, error};
use slider_panel::config::{CONFIG_ELEMENT_ID, CONFIG_GLOBAL};
use slider_panel::model::PageTables;
use slider_panel::{ConfigError, PanelConfig};
use wasm_bindgen::JsValue;

/// Read the panel configuration the server templated into the page: a JSON
/// `<script id="panel-config">` element first, then a `window.panelConfig`
/// object.
pub fn load_config() -> Result<PanelConfig, ConfigError> {
    if let Some(json) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        debug!("reading panel configuration from #{}", CONFIG_ELEMENT_ID);
        return PanelConfig::from_json(&json);
    }

    let global = js_sys::Reflect::get(&window(), &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| ConfigError::Malformed(format!("{:?}", e)))?;
    if global.is_undefined() || global.is_null() {
        return Err(ConfigError::Missing);
    }
    debug!("reading panel configuration from window.{}", CONFIG_GLOBAL);
    let tables: PageTables = serde_wasm_bindgen::from_value(global)
        .map_err(|e| ConfigError::Malformed(e.to_string()))?;
    PanelConfig::from_tables(tables)
}

/// Origin the backend endpoints are resolved against.
pub fn origin() -> String {
    window().location().origin().unwrap_or_else(|e| {
        error!("could not read page origin: {:?}", e);
        String::new()
    })
}

/// Blocking user-visible notification.
pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        error!("alert failed: {:?}", e);
    }
}

pub fn navigate(route: &str) {
    if let Err(e) = window().location().set_href(route) {
        error!("navigation to {} failed: {:?}", route, e);
    }
}
