// --- File: crates/medbook_client/src/controller.rs ---
//! Action controller for the booking client.
//!
//! Each user action is an independent unit of work: read the form-shaped
//! input, submit it, then reload the booking list exactly once,
//! regardless of how the submit went. The submit outcome and the reload
//! outcome travel separately so a reload failure never masks a
//! successful submit (and vice versa).

use crate::error::BookingError;
use crate::models::{CreateBookingRequest, UpdateBookingRequest};
use crate::service::BookingService;
use serde_json::Value;
use tracing::warn;

/// Fixed message shown instead of a listing when no endpoint is set.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Booking API not configured. Set [api] base_url in config/default.toml \
     or the MEDBOOK__API__BASE_URL environment variable.";

/// Result of one booking-list refresh.
#[derive(Debug)]
pub enum ListingOutcome {
    /// No endpoint configured; no request was made.
    Unconfigured,
    /// The list payload, verbatim as the server sent it.
    Loaded(Value),
    /// The refresh request itself failed.
    Failed(BookingError),
}

impl ListingOutcome {
    /// Renders the listing for the display area: pretty-printed JSON, a
    /// fixed configuration message, or the refresh error.
    pub fn rendered(&self) -> String {
        match self {
            ListingOutcome::Unconfigured => NOT_CONFIGURED_MESSAGE.to_string(),
            ListingOutcome::Loaded(payload) => serde_json::to_string_pretty(payload)
                .unwrap_or_else(|_| payload.to_string()),
            ListingOutcome::Failed(err) => format!("Failed to load bookings: {err}"),
        }
    }
}

/// Result of one mutating action: the submit reply and the follow-up
/// listing, independent of each other.
#[derive(Debug)]
pub struct ActionOutcome {
    /// What the server replied to the submitted request.
    pub submitted: Result<Value, BookingError>,
    /// The listing refreshed after the submit resolved.
    pub listing: ListingOutcome,
}

/// Binds the four user actions to the booking service.
///
/// Built from `Option<S>`: `None` means the base endpoint was never
/// configured, in which case the listing short-circuits to a fixed
/// message and mutating actions fail with [`BookingError::NotConfigured`]
/// without touching the network.
pub struct BookingController<S> {
    service: Option<S>,
}

impl<S: BookingService> BookingController<S> {
    pub fn new(service: Option<S>) -> Self {
        if service.is_none() {
            warn!("no booking API endpoint configured; only the configuration notice will be shown");
        }
        Self { service }
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_some()
    }

    /// Submits a booking draft, then refreshes the listing.
    pub async fn create(&self, draft: CreateBookingRequest) -> ActionOutcome {
        let submitted = match &self.service {
            Some(service) => service.create_booking(draft).await,
            None => Err(BookingError::NotConfigured),
        };
        self.finish_action(submitted).await
    }

    /// Submits a sparse update, then refreshes the listing.
    pub async fn update(&self, request: UpdateBookingRequest) -> ActionOutcome {
        let submitted = match &self.service {
            Some(service) => service.update_booking(request).await,
            None => Err(BookingError::NotConfigured),
        };
        self.finish_action(submitted).await
    }

    /// Cancels a booking by id, then refreshes the listing.
    pub async fn cancel(&self, booking_id: &str) -> ActionOutcome {
        let submitted = match &self.service {
            Some(service) => service.cancel_booking(booking_id).await,
            None => Err(BookingError::NotConfigured),
        };
        self.finish_action(submitted).await
    }

    /// Reloads the booking list. Zero network calls when unconfigured.
    pub async fn refresh(&self) -> ListingOutcome {
        match &self.service {
            Some(service) => match service.list_bookings().await {
                Ok(payload) => ListingOutcome::Loaded(payload),
                Err(err) => {
                    warn!("booking list refresh failed: {err}");
                    ListingOutcome::Failed(err)
                }
            },
            None => ListingOutcome::Unconfigured,
        }
    }

    async fn finish_action(&self, submitted: Result<Value, BookingError>) -> ActionOutcome {
        // The refresh runs unconditionally, after the submit resolved.
        let listing = self.refresh().await;
        ActionOutcome { submitted, listing }
    }
}
