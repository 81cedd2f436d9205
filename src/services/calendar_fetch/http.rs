use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::EventSource;
use crate::models::raw_event::RawEvent;
use crate::services::normalizer::decode_events;
use crate::utils::date::DayWindow;

/// Calendar source backed by a dashboard REST API
/// (`GET {base}/api/calendars/{entity}?start=..&end=..`).
pub struct HttpEventSource {
    client: Client,
    base_url: String,
    token: Option<String>,
    max_response_bytes: usize,
}

impl HttpEventSource {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(anyhow!("Calendar API URL must start with http:// or https://"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build calendar API HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            token,
            max_response_bytes: 5 * 1024 * 1024,
        })
    }

    pub fn events_url(&self, entity_id: &str, window: &DayWindow) -> String {
        format!(
            "{}/api/calendars/{}?start={}&end={}",
            self.base_url,
            urlencoding::encode(entity_id),
            window.today_param(),
            window.tomorrow_param()
        )
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self, entity_id: &str, window: DayWindow) -> Result<Vec<RawEvent>> {
        let url = self.events_url(entity_id, &window);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Network error fetching calendar {entity_id}"))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!(
                "Calendar {} fetch failed with HTTP status {}",
                entity_id,
                status
            ));
        }

        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_response_bytes {
                return Err(anyhow!(
                    "Calendar {} response too large ({} bytes > {} bytes)",
                    entity_id,
                    content_length,
                    self.max_response_bytes
                ));
            }
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read calendar {entity_id} response body"))?;

        parse_events_body(&bytes, self.max_response_bytes)
            .with_context(|| format!("Calendar {entity_id} returned an unexpected body"))
    }
}

/// Parse a response body as a list of event records. Only the outer list is
/// required to be well formed; individual records that fail to decode are
/// dropped by [`decode_events`].
fn parse_events_body(bytes: &[u8], max_response_bytes: usize) -> Result<Vec<RawEvent>> {
    if bytes.len() > max_response_bytes {
        return Err(anyhow!(
            "response too large ({} bytes > {} bytes)",
            bytes.len(),
            max_response_bytes
        ));
    }

    let records: Vec<Value> =
        serde_json::from_slice(bytes).context("Response is not a JSON list of events")?;
    Ok(decode_events(records))
}
