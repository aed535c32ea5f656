// --- File: crates/medbook_client/src/error.rs ---
use thiserror::Error;

/// Errors that can occur when talking to the booking API.
///
/// The three failure categories are distinct values: transport failure
/// (`Request`), a non-success HTTP status (`Api`), and a success status
/// with an unparseable body (`Parse`). Callers decide how to surface
/// each instead of treating every JSON body alike.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Error occurred during an HTTP request (DNS, refused connection, timeout)
    #[error("Booking API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Error returned by the booking API with a non-success status
    #[error("Booking API returned an error: {message} (Status: {status_code})")]
    Api { status_code: u16, message: String },

    /// Error parsing a booking API response body
    #[error("Failed to parse booking API response: {0}")]
    Parse(#[from] serde_json::Error),

    /// No base endpoint configured
    #[error("Booking API endpoint is not configured")]
    NotConfigured,
}
