// --- File: crates/medbook_client/src/service.rs ---
//! Service abstraction over the booking API.
//!
//! The controller talks to this trait instead of the concrete HTTP
//! client, so tests can substitute an in-memory implementation and the
//! transport can change without touching the action logic.

use crate::client::BookingApiClient;
use crate::error::BookingError;
use crate::models::{CreateBookingRequest, UpdateBookingRequest};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Operations the booking backend offers.
///
/// Replies are raw JSON values: the backend's payload shape is not part
/// of this contract.
pub trait BookingService: Send + Sync {
    /// Create a booking from a draft.
    fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> BoxFuture<'_, Value, BookingError>;

    /// Apply a sparse update to an existing booking.
    fn update_booking(
        &self,
        request: UpdateBookingRequest,
    ) -> BoxFuture<'_, Value, BookingError>;

    /// Cancel a booking by id.
    fn cancel_booking(&self, booking_id: &str) -> BoxFuture<'_, Value, BookingError>;

    /// Fetch the current booking list.
    fn list_bookings(&self) -> BoxFuture<'_, Value, BookingError>;
}

impl BookingService for BookingApiClient {
    fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> BoxFuture<'_, Value, BookingError> {
        Box::pin(async move { BookingApiClient::create_booking(self, &request).await })
    }

    fn update_booking(
        &self,
        request: UpdateBookingRequest,
    ) -> BoxFuture<'_, Value, BookingError> {
        Box::pin(async move { BookingApiClient::update_booking(self, &request).await })
    }

    fn cancel_booking(&self, booking_id: &str) -> BoxFuture<'_, Value, BookingError> {
        let booking_id = booking_id.to_string();
        Box::pin(async move { BookingApiClient::cancel_booking(self, &booking_id).await })
    }

    fn list_bookings(&self) -> BoxFuture<'_, Value, BookingError> {
        Box::pin(async move { BookingApiClient::list_bookings(self).await })
    }
}
