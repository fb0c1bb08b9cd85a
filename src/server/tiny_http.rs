//! tiny_http server adapter
//!
//! Handles routing and response conversion for tiny_http. Each route maps
//! to a pure handler in the API layer; unknown routes get a JSON 404.

use std::io::Cursor;

use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use earthling::api::{self, ApiError, CsvDownload, ErrorData};
use earthling::upstream::UpstreamClient;

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle a request and return a response
///
/// This is the main routing function that maps URL paths to handlers.
pub fn handle_request(request: &Request, client: &UpstreamClient) -> Response<Cursor<Vec<u8>>> {
    let path = request.url();
    let method = request.method();

    match (method, path) {
        (&Method::Get, "/characters") => handle_result(api::characters(client)),

        (&Method::Get, "/characters/csv") => match api::characters_csv(client) {
            Ok(download) => csv_response(&download),
            Err(e) => error_response(&e),
        },

        (&Method::Get, "/healthcheck") => {
            let body = api::healthcheck(client);
            json_response(&body, body.status_code())
        },

        // 404 for unknown routes
        _ => not_found_response(&format!("endpoint not found: {method} {path}")),
    }
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&data, 200),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    json_response(&ErrorData::from(error), error.status_code())
}

/// Create a 404 not found response
fn not_found_response(message: &str) -> Response<Cursor<Vec<u8>>> {
    let error = ApiError::not_found(message);
    error_response(&error)
}

/// Serialize data to a JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"status":"error"}"#.to_string());
    Response::from_data(json.into_bytes())
        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
        .with_status_code(StatusCode(status))
}

/// Create a CSV attachment response
fn csv_response(download: &CsvDownload) -> Response<Cursor<Vec<u8>>> {
    let disposition = format!("attachment; filename={}", download.filename);
    Response::from_data(download.body.clone().into_bytes())
        .with_header(Header::from_bytes("Content-Type", "text/csv").unwrap())
        .with_header(Header::from_bytes("Content-Disposition", disposition).unwrap())
        .with_status_code(StatusCode(200))
}
