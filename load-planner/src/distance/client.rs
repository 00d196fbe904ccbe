//! Routes API HTTP client.
//!
//! Handles authentication, concurrency limiting and conversion of the
//! response into miles and hours.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::domain::Place;
use crate::planner::{DistanceOracle, Drive};

use super::error::DistanceError;
use super::types::{ComputeRoutesRequest, ComputeRoutesResponse};

/// Default endpoint for the Routes API.
const DEFAULT_BASE_URL: &str = "https://routes.googleapis.com/directions/v2:computeRoutes";

/// Response fields we read.
const FIELD_MASK: &str = "routes.duration,routes.distanceMeters";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the Routes client.
#[derive(Debug, Clone)]
pub struct RoutesConfig {
    /// API key for authentication
    pub api_key: String,
    /// Endpoint URL (defaults to production Google)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Routes API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl RoutesClient {
    /// Create a new Routes client with the given configuration.
    pub fn new(config: RoutesConfig) -> Result<Self, DistanceError> {
        let mut headers = HeaderMap::new();

        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| DistanceError::ApiError {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
        headers.insert("X-Goog-Api-Key", api_key);
        headers.insert("X-Goog-FieldMask", HeaderValue::from_static(FIELD_MASK));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Driving distance and time between two places.
    ///
    /// Takes the first (best) route the API returns.
    pub async fn route(&self, from: &Place, to: &Place) -> Result<Drive, DistanceError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DistanceError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let request = ComputeRoutesRequest::driving(from.address(), to.address());
        let response = self.http.post(&self.base_url).json(&request).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(DistanceError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DistanceError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DistanceError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: ComputeRoutesResponse =
            serde_json::from_str(&body).map_err(|e| DistanceError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let route = parsed.routes.first().ok_or_else(|| DistanceError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })?;

        let drive = Drive {
            miles: route.miles()?,
            hours: route.hours()?,
        };

        debug!(%from, %to, miles = drive.miles, hours = drive.hours, "Found route");

        Ok(drive)
    }
}

impl DistanceOracle for RoutesClient {
    async fn driving_distance(&self, from: &Place, to: &Place) -> Option<Drive> {
        match self.route(from, to).await {
            Ok(drive) => Some(drive),
            Err(e) => {
                warn!(%from, %to, error = %e, "Distance lookup failed");
                None
            }
        }
    }
}
