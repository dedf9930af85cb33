//! Application-level configuration constants.

// Slider scale: the first MID_PERCENT of the track covers [min, MID_VALUE]
pub const SLIDER_MID_PERCENT: f64 = 60.0;
pub const SLIDER_MID_VALUE: f64 = 30.0;

// Tick marks
pub const TICK_INTERVAL: f64 = 10.0;
pub const MAX_TICKS: usize = 21;

// Resolution of the underlying <input type="range">, in percent
pub const TRACK_STEP_PERCENT: f64 = 0.1;

// Track colours
pub const FEASIBLE_COLOUR: &str = "#eeeeff";
pub const INFEASIBLE_COLOUR: &str = "#ff6666";

// Output bar colour scale stops (green, yellow, red)
pub const BAR_SCALE_STOPS: [&str; 3] = ["#008000", "#ffff00", "#ff0000"];

// Substring marking a surplus ("slack") output
pub const SLACK_MARKER: &str = "slack";

// Backend endpoints
pub const UPDATE_PATH: &str = "/update";
pub const MIN_METRIC_PATH: &str = "/minmetric";
pub const SAVE_PATH: &str = "/save";
pub const FOLLOW_UP_ROUTE: &str = "/finalquestions";

// Page-supplied configuration sources
pub const CONFIG_ELEMENT_ID: &str = "panel-config";
pub const CONFIG_GLOBAL: &str = "panelConfig";

pub const SAVE_ERROR_MESSAGE: &str = "Error saving data";
