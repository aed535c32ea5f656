//! HTTP-level tests for `BookingApiClient`, run against a wiremock
//! server so the exact request shapes the real backend would see are
//! asserted: bodies, methods, paths, and query encoding.

use medbook_client::{
    BookingApiClient, BookingError, CreateBookingRequest, UpdateBookingRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BookingApiClient {
    BookingApiClient::with_client(reqwest::Client::new(), &server.uri())
}

#[tokio::test]
async fn create_posts_exact_json_body_to_book() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/book"))
        .and(body_json(json!({
            "patient_name": "Alice",
            "date": "2024-05-01",
            "time": "10:00"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Booking created",
            "booking": {
                "booking_id": "Alice-2024-05-01-10:00",
                "patient_name": "Alice",
                "date": "2024-05-01",
                "time": "10:00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .create_booking(&CreateBookingRequest {
            patient_name: "Alice".to_string(),
            date: "2024-05-01".to_string(),
            time: "10:00".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(reply["message"], "Booking created");
    assert_eq!(reply["booking"]["booking_id"], "Alice-2024-05-01-10:00");
}

#[tokio::test]
async fn update_puts_sparse_payload_to_update() {
    let server = MockServer::start().await;
    // body_json matches on exact equality, so absent fields stay absent.
    Mock::given(method("PUT"))
        .and(path("/update"))
        .and(body_json(json!({
            "booking_id": "123",
            "date": "2024-01-01"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "updated"})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .update_booking(&UpdateBookingRequest::from_fields("123", "", "2024-01-01", ""))
        .await
        .unwrap();

    assert_eq!(reply["message"], "updated");
}

#[tokio::test]
async fn cancel_sends_delete_with_encoded_booking_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/cancel"))
        .and(query_param("booking_id", "abc 1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "cancelled"})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server).cancel_booking("abc 1").await.unwrap();
    assert_eq!(reply["message"], "cancelled");

    // The raw request line must carry %20, the way the original page's
    // encodeURIComponent produced it.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("booking_id=abc%201"));
}

#[tokio::test]
async fn list_fetches_bookings_verbatim() {
    let server = MockServer::start().await;
    let payload = json!([
        {"booking_id": "b-1", "patient_name": "Alice", "date": "2024-05-01", "time": "10:00"},
        {"booking_id": "b-2", "patient_name": "Bob", "date": "2024-05-02", "time": "11:00"}
    ]);
    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server).list_bookings().await.unwrap();
    assert_eq!(reply, payload);
}

#[tokio::test]
async fn non_success_status_maps_to_api_error_with_body_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/book"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Unknown route or method"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_booking(&CreateBookingRequest {
            patient_name: String::new(),
            date: String::new(),
            time: String::new(),
        })
        .await
        .unwrap_err();

    match err {
        BookingError::Api {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 400);
            assert_eq!(message, "Unknown route or method");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_carried_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_bookings().await.unwrap_err();
    match err {
        BookingError::Api {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_maps_to_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_bookings().await.unwrap_err();
    assert!(matches!(err, BookingError::Parse(_)));
}

#[tokio::test]
async fn transport_failure_maps_to_request_error() {
    // Nothing listens on this address; the connection is refused.
    let client = BookingApiClient::with_client(reqwest::Client::new(), "http://127.0.0.1:9");
    let err = client.list_bookings().await.unwrap_err();
    assert!(matches!(err, BookingError::Request(_)));
}
