//! Slider control panel: range sliders whose values are synchronised with a
//! backend that answers with metrics (shown as coloured bars) and feasible
//! ranges (painted onto the slider tracks).
//!
//! Everything in this library is browser-independent. The Yew wiring lives in
//! the binary.

pub mod api;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod panel;
pub mod render;
pub mod scale;
pub mod utils;

pub use api::{Backend, HttpBackend, SliderValues, UpdateResponse};
pub use controller::Controller;
pub use error::{ApiError, ConfigError, PanelError};
pub use model::{OutputSpec, PanelConfig, SliderSpec};
pub use panel::{Panel, SyncOutcome};
pub use scale::PiecewiseScale;
