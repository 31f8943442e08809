//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, endpoint
//! matching, and the validate → apply → respond pipeline for each operation.

use std::convert::Infallible;
use std::net::IpAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};

use crate::calc::{self, OperationError, Operator, ValidationError};
use crate::config::AppState;
use crate::handler::query;
use crate::http;

/// Main entry point for HTTP request handling.
///
/// Generic over the request body: the service only reads the query string,
/// so tests can drive it with any body type.
pub async fn handle_request<B>(
    req: Request<B>,
    peer: IpAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    state.logger.log_incoming_request(method, uri, peer);

    if *method != Method::GET {
        return Ok(http::method_not_allowed());
    }

    let path = uri.path();

    if state.config.health.enabled && path == state.config.health.path {
        return Ok(http::json_response(
            StatusCode::OK,
            &http::HealthResponse { status: "ok" },
        ));
    }

    let Some(op) = operator_for_path(path) else {
        return Ok(http::not_found());
    };

    let params = query::parse(uri.query().unwrap_or(""));
    let num1 = query::get(&params, "num1").unwrap_or("");
    let num2 = query::get(&params, "num2").unwrap_or("");

    Ok(handle_operation(op, num1, num2, &state))
}

/// Validate both operands, dispatch the operation, and build the response.
fn handle_operation(
    op: Operator,
    raw1: &str,
    raw2: &str,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let (a, b) = match calc::validate(raw1, raw2) {
        Ok(pair) => pair,
        Err(err) => {
            let ValidationError::NotANumber { num1, num2 } = &err;
            state.logger.log_invalid_parameters(num1, num2);
            return http::bad_request(&err.to_string());
        }
    };

    match op.apply(a, b) {
        Ok(result) => {
            state.logger.log_operation(op, a, b, result);
            http::json_response(
                StatusCode::OK,
                &http::OperationResponse::new(op.name(), result),
            )
        }
        Err(err @ OperationError::DivisionByZero) => {
            state.logger.log_division_by_zero();
            http::bad_request(&err.to_string())
        }
    }
}

fn operator_for_path(path: &str) -> Option<Operator> {
    match path {
        "/add" => Some(Operator::Add),
        "/subtract" => Some(Operator::Subtract),
        "/multiply" => Some(Operator::Multiply),
        "/divide" => Some(Operator::Divide),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, HealthConfig, LoggingConfig, ServerConfig};
    use crate::logger::{Level, Logger};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    fn test_state() -> Arc<AppState> {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                error_log_file: None,
                combined_log_file: None,
            },
            health: HealthConfig::default(),
        };
        Arc::new(AppState::new(config, Logger::console_only(Level::Info)))
    }

    async fn get(path_and_query: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(Method::GET)
            .uri(path_and_query)
            .body(())
            .unwrap();
        let resp = handle_request(req, IpAddr::from([127, 0, 0, 1]), test_state())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn add_returns_the_sum() {
        let (status, body) = get("/add?num1=3&num2=4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"operation": "addition", "result": 7}));
    }

    #[tokio::test]
    async fn subtract_returns_the_difference() {
        let (status, body) = get("/subtract?num1=10&num2=6").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"operation": "subtraction", "result": 4}));
    }

    #[tokio::test]
    async fn multiply_handles_fractional_operands() {
        let (status, body) = get("/multiply?num1=2.5&num2=4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"operation": "multiplication", "result": 10}));
    }

    #[tokio::test]
    async fn divide_returns_the_quotient() {
        let (status, body) = get("/divide?num1=9&num2=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"operation": "division", "result": 3}));

        let (status, body) = get("/divide?num1=9&num2=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"operation": "division", "result": 4.5}));
    }

    #[tokio::test]
    async fn divide_by_zero_is_a_client_error() {
        let (status, body) = get("/divide?num1=9&num2=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Division by zero is not allowed."}));
    }

    #[tokio::test]
    async fn non_numeric_input_is_a_client_error() {
        for endpoint in ["/add", "/subtract", "/multiply", "/divide"] {
            let (status, body) = get(&format!("{endpoint}?num1=foo&num2=2")).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                body,
                json!({"error": "Invalid parameters. Both num1 and num2 must be numbers."}),
                "endpoint: {endpoint}"
            );
        }
    }

    #[tokio::test]
    async fn missing_parameters_are_a_client_error() {
        let (status, body) = get("/add?num1=3").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Invalid parameters. Both num1 and num2 must be numbers."})
        );

        let (status, _) = get("/add").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn repeated_requests_are_idempotent() {
        let first = get("/add?num1=3&num2=4").await;
        let second = get("/add?num1=3&num2=4").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (status, body) = get("/modulo?num1=3&num2=4").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(
            body["available_endpoints"],
            json!(["/add", "/subtract", "/multiply", "/divide"])
        );
    }

    #[tokio::test]
    async fn non_get_method_is_rejected() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/add?num1=3&num2=4")
            .body(())
            .unwrap();
        let resp = handle_request(req, IpAddr::from([127, 0, 0, 1]), test_state())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()[hyper::header::ALLOW], "GET");
    }

    #[tokio::test]
    async fn health_probe_responds_ok() {
        let (status, body) = get("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn percent_encoded_operands_are_decoded() {
        let (status, body) = get("/add?num1=%2D5&num2=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"operation": "addition", "result": -3}));
    }
}
