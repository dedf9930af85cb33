//! Wire types and the backend seam for the three panel endpoints.

use crate::config::{MIN_METRIC_PATH, SAVE_PATH, UPDATE_PATH};
use crate::error::ApiError;
use crate::render::SoftBounds;
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slider values keyed by slider name. Body of `/update` and `/save`.
pub type SliderValues = BTreeMap<String, f64>;

/// Slider coordinates returned by `/minmetric`.
pub type Coordinates = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// `None` when the backend cannot compute metrics for these inputs.
    #[serde(default)]
    pub outputs: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub limits: Option<BTreeMap<String, SoftBounds>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMetricRequest {
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMetricResponse {
    pub coords: Coordinates,
}

/// The server computing metrics and feasible ranges.
#[async_trait(?Send)]
pub trait Backend {
    async fn update(&self, values: &SliderValues) -> Result<UpdateResponse, ApiError>;

    async fn min_metric(&self, metric: &str) -> Result<MinMetricResponse, ApiError>;

    /// Succeeds only on HTTP 200.
    async fn save(&self, values: &SliderValues) -> Result<(), ApiError>;
}

/// [`Backend`] speaking JSON over HTTP to the page's origin.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        debug!("POST {}", endpoint);
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                endpoint,
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn post_json<B, T>(&self, endpoint: &'static str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post(endpoint, body)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode {
                endpoint,
                message: e.to_string(),
            })
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn update(&self, values: &SliderValues) -> Result<UpdateResponse, ApiError> {
        self.post_json(UPDATE_PATH, values).await
    }

    async fn min_metric(&self, metric: &str) -> Result<MinMetricResponse, ApiError> {
        let request = MinMetricRequest {
            metric: metric.to_string(),
        };
        self.post_json(MIN_METRIC_PATH, &request).await
    }

    async fn save(&self, values: &SliderValues) -> Result<(), ApiError> {
        self.post(SAVE_PATH, values).await.map(|_| ())
    }
}
