// --- File: crates/medbook_client/src/client.rs ---
//! HTTP client for the booking API.
//!
//! Wraps a `reqwest::Client` around the four endpoints the service
//! exposes: `POST /book`, `PUT /update`, `DELETE /cancel` and
//! `GET /bookings`. Replies are returned as raw `serde_json::Value`
//! because the server's payload shape is its own business; the only
//! thing checked here is the HTTP status.

use crate::error::BookingError;
use crate::models::{CreateBookingRequest, UpdateBookingRequest};
use medbook_config::ApiConfig;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the remote booking service.
pub struct BookingApiClient {
    /// HTTP client for making requests to the booking API
    http: Client,

    /// Base URL prefix, without trailing slash
    base_url: String,
}

impl BookingApiClient {
    /// Creates a new client from the API configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, BookingError> {
        let timeout = config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /book` — creates a booking. The server assigns the id.
    pub async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<Value, BookingError> {
        let url = self.endpoint("/book");
        info!("Creating booking for patient '{}'", request.patient_name);
        let response = self.http.post(&url).json(request).send().await?;
        read_json_reply(response).await
    }

    /// `PUT /update` — sparse update of an existing booking.
    pub async fn update_booking(
        &self,
        request: &UpdateBookingRequest,
    ) -> Result<Value, BookingError> {
        let url = self.endpoint("/update");
        info!("Updating booking '{}'", request.booking_id);
        let response = self.http.put(&url).json(request).send().await?;
        read_json_reply(response).await
    }

    /// `DELETE /cancel?booking_id=...` — cancels a booking. No body; the
    /// id travels percent-encoded in the query string.
    pub async fn cancel_booking(&self, booking_id: &str) -> Result<Value, BookingError> {
        let url = self.endpoint(&cancel_path(booking_id));
        info!("Cancelling booking '{}'", booking_id);
        let response = self.http.delete(&url).send().await?;
        read_json_reply(response).await
    }

    /// `GET /bookings` — fetches the full booking list.
    pub async fn list_bookings(&self) -> Result<Value, BookingError> {
        let url = self.endpoint("/bookings");
        debug!("Fetching booking list");
        let response = self.http.get(&url).send().await?;
        read_json_reply(response).await
    }
}

fn cancel_path(booking_id: &str) -> String {
    format!("/cancel?booking_id={}", urlencoding::encode(booking_id))
}

/// Checks the HTTP status before touching the body. A success status
/// yields the parsed JSON reply; anything else becomes an `Api` error
/// with the message taken from the body's `error` or `message` field
/// when the server sent one.
async fn read_json_reply(response: reqwest::Response) -> Result<Value, BookingError> {
    let status = response.status();
    let body_text = response.text().await?;

    if status.is_success() {
        let reply: Value = serde_json::from_str(&body_text)?;
        Ok(reply)
    } else {
        let message = match serde_json::from_str::<Value>(&body_text) {
            Ok(json_body) => json_body
                .get("error")
                .or_else(|| json_body.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or(&body_text)
                .to_string(),
            Err(_) => body_text,
        };
        Err(BookingError::Api {
            status_code: status.as_u16(),
            message,
        })
    }
}
