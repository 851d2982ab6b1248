//! HTTP client for the goca backend.
//!
//! Fetches host profiles and submits bookings. Submission is a single POST;
//! failures come back as [`GocaError::SubmissionFailed`] and are never retried.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::booking::{BookingConfirmation, BookingRequest, BookingSubmitter};
use crate::config::GocaConfig;
use crate::error::{GocaError, GocaResult};
use crate::protocol::{BookingRecord, HostProfile, error_message};

#[derive(Clone, Debug)]
pub struct GocaClient {
    base_url: String,
    http: Client,
}

impl GocaClient {
    pub fn new(api_url: &str, timeout: Duration) -> GocaResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GocaError::Http(e.to_string()))?;

        Ok(GocaClient {
            base_url: api_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &GocaConfig) -> GocaResult<Self> {
        Self::new(&config.api_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /booking/{username}`: the host with its event types.
    pub async fn host(&self, username: &str) -> GocaResult<HostProfile> {
        self.get_json(&format!("booking/{username}")).await
    }

    /// `GET /schedule/{id}`: a booking that was already made.
    pub async fn schedule(&self, id: &str) -> GocaResult<BookingRecord> {
        self.get_json(&format!("schedule/{id}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GocaResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GocaError::Http(format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        let body = read_body(response).await.map_err(GocaError::Http)?;
        debug!(%url, %status, "Response");

        if !status.is_success() {
            return Err(GocaError::Http(format!(
                "{} ({})",
                error_message(&body),
                status.as_u16()
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            GocaError::Serialization(format!("Failed to parse response from {url}: {e}"))
        })
    }
}

impl BookingSubmitter for GocaClient {
    async fn submit(&self, request: &BookingRequest) -> GocaResult<BookingConfirmation> {
        let url = format!("{}/booking", self.base_url);
        debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| GocaError::SubmissionFailed(e.to_string()))?;

        let status = response.status();
        let body = read_body(response).await.map_err(GocaError::SubmissionFailed)?;

        if !status.is_success() {
            let message = error_message(&body);
            warn!(%status, %message, "Booking rejected");
            return Err(GocaError::SubmissionFailed(message));
        }

        serde_json::from_str(&body).map_err(|e| {
            GocaError::Serialization(format!("Failed to parse booking confirmation: {e}"))
        })
    }
}

async fn read_body(response: Response) -> Result<String, String> {
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {e}"))
}
