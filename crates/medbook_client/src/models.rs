// --- File: crates/medbook_client/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Payload for `POST /book`.
///
/// The values are sent exactly as the user typed them. The server assigns
/// the booking id, so none is carried here. Empty strings are not
/// rejected or trimmed client-side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateBookingRequest {
    pub patient_name: String,
    pub date: String,
    pub time: String,
}

/// Payload for `PUT /update`.
///
/// Sparse update: only fields the user actually filled in are serialized,
/// so omitted attributes are left untouched server-side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpdateBookingRequest {
    pub booking_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl UpdateBookingRequest {
    /// Builds a sparse update from raw form values: an empty input means
    /// "leave this field alone" and is dropped from the payload.
    pub fn from_fields(
        booking_id: impl Into<String>,
        patient_name: &str,
        date: &str,
        time: &str,
    ) -> Self {
        Self {
            booking_id: booking_id.into(),
            patient_name: non_empty(patient_name),
            date: non_empty(date),
            time: non_empty(time),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A booking record as stored by the server.
///
/// The list payload is rendered verbatim and never required to match this
/// shape; it only exists so callers can recognize well-formed entries
/// (e.g. to log how many bookings a listing holds).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Booking {
    pub booking_id: String,
    pub patient_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Tries to read a listing payload as a flat array of booking records.
/// Returns `None` for any other shape; the caller falls back to the raw
/// JSON view.
pub fn bookings_from_listing(listing: &serde_json::Value) -> Option<Vec<Booking>> {
    serde_json::from_value(listing.clone()).ok()
}
