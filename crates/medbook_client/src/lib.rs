// --- File: crates/medbook_client/src/lib.rs ---

pub mod client;
pub mod controller;
pub mod error;
pub mod models;
pub mod service;

// Re-export for the console frontend
pub use client::BookingApiClient;
pub use controller::{ActionOutcome, BookingController, ListingOutcome, NOT_CONFIGURED_MESSAGE};
pub use error::BookingError;
pub use models::{bookings_from_listing, Booking, CreateBookingRequest, UpdateBookingRequest};
pub use service::{BookingService, BoxFuture};
