// JSON response builder utilities

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::types::ErrorResponse;

/// Build a JSON response with the given status code.
///
/// Serialization of the handler-provided bodies cannot realistically fail,
/// but if it does the client still gets a well-formed JSON error.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(_) => {
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))))
}

/// 400 Bad Request with a JSON error body
pub fn bad_request(message: &str) -> Response<Full<Bytes>> {
    json_response(StatusCode::BAD_REQUEST, &ErrorResponse::new(message))
}

/// 404 Not Found listing the available endpoints
pub fn not_found() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(
            r#"{"error":"Not Found","available_endpoints":["/add","/subtract","/multiply","/divide"]}"#,
        )))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Not Found"))))
}

/// 405 Method Not Allowed (only GET is served)
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    let resp = json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &ErrorResponse::new("Method not allowed. Use GET."),
    );
    let (mut parts, body) = resp.into_parts();
    parts.headers.insert(
        hyper::header::ALLOW,
        hyper::header::HeaderValue::from_static("GET"),
    );
    Response::from_parts(parts, body)
}
