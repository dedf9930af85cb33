use thiserror::Error;

/// Problems turning the page-supplied tables into a [`crate::PanelConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("no panel configuration found on the page")]
    Missing,
    #[error("malformed panel configuration: {0}")]
    Malformed(String),
    #[error("slider '{name}' has no entry in {table}")]
    MissingSliderEntry { name: String, table: &'static str },
    #[error("output '{name}' has no entry in {table}")]
    MissingOutputEntry { name: String, table: &'static str },
    #[error("slider '{name}' has an empty range ({min} >= {max})")]
    EmptyRange { name: String, min: f64, max: f64 },
    #[error("no sliders configured")]
    NoSliders,
}

/// Failures talking to the backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: &'static str, message: String },
    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: &'static str, message: String },
}

impl ApiError {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Action-level error surfaced by the [`crate::controller::Controller`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PanelError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("saving was rejected: {0}")]
    SaveRejected(ApiError),
}
