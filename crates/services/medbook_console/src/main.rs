// File: services/medbook_console/src/main.rs
//! Console frontend for the booking client. The four page actions of the
//! original UI map to four subcommands; running with no subcommand
//! fetches the listing, the way the page did on load.

use clap::{Parser, Subcommand};
use medbook_client::{
    ActionOutcome, BookingApiClient, BookingController, CreateBookingRequest,
    ListingOutcome, UpdateBookingRequest,
};
use medbook_config::load_config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "medbook", about = "Create, update, cancel and list bookings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a booking. Values are sent as typed, empty included.
    Create {
        #[arg(long, default_value = "")]
        patient_name: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        time: String,
    },
    /// Update a booking. Omitted fields are left untouched server-side.
    Update {
        booking_id: String,
        #[arg(long, default_value = "")]
        patient_name: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        time: String,
    },
    /// Cancel a booking by id.
    Cancel { booking_id: String },
    /// Fetch and display the booking list.
    List,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("medbook=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config().expect("Failed to load config");

    let service = match config.api.as_ref() {
        Some(api) => Some(BookingApiClient::new(api).expect("Failed to build HTTP client")),
        None => {
            warn!("no [api] section in configuration");
            None
        }
    };
    let controller = BookingController::new(service);

    match cli.command {
        Some(Command::Create {
            patient_name,
            date,
            time,
        }) => {
            let outcome = controller
                .create(CreateBookingRequest {
                    patient_name,
                    date,
                    time,
                })
                .await;
            print_outcome(outcome);
        }
        Some(Command::Update {
            booking_id,
            patient_name,
            date,
            time,
        }) => {
            let request =
                UpdateBookingRequest::from_fields(booking_id, &patient_name, &date, &time);
            let outcome = controller.update(request).await;
            print_outcome(outcome);
        }
        Some(Command::Cancel { booking_id }) => {
            let outcome = controller.cancel(&booking_id).await;
            print_outcome(outcome);
        }
        Some(Command::List) | None => {
            print_listing(controller.refresh().await);
        }
    }
}

/// Prints the server's reply to the submitted action, then the refreshed
/// listing. The two are independent: a listing failure is reported on
/// its own line, never in place of the reply.
fn print_outcome(outcome: ActionOutcome) {
    match outcome.submitted {
        Ok(reply) => {
            let pretty =
                serde_json::to_string_pretty(&reply).unwrap_or_else(|_| reply.to_string());
            println!("{pretty}");
        }
        Err(err) => {
            eprintln!("Request failed: {err}");
        }
    }
    println!("--- bookings ---");
    print_listing(outcome.listing);
}

fn print_listing(listing: ListingOutcome) {
    if let ListingOutcome::Loaded(payload) = &listing {
        if let Some(bookings) = medbook_client::bookings_from_listing(payload) {
            info!("loaded {} bookings", bookings.len());
        }
    }
    println!("{}", listing.rendered());
}
