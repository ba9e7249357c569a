//! Calendar data API client.
//!
//! Fetches the JSON payload the views consume. Date ranges are half-open:
//! `start` is the first day included, `end` the first day excluded.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use url::Url;

use super::CalendarPayload;
use crate::error::ApiError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the calendar data API.
#[derive(Debug)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    /// Create a client with the default request timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, http })
    }

    /// Fetch the payload for a single day.
    pub async fn fetch_day(&self, date: NaiveDate) -> Result<CalendarPayload, ApiError> {
        self.fetch_range(date, date + chrono::Duration::days(1))
            .await
    }

    /// Fetch the payload for the date range `[start, end)`.
    pub async fn fetch_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<CalendarPayload, ApiError> {
        let url = format!(
            "{}/api/calendar?start={start}&end={end}",
            self.base_url.as_str().trim_end_matches('/'),
        );

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        CalendarPayload::from_json(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
