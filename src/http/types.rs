// Wire types for the JSON surface

use serde::{Serialize, Serializer};

/// Successful operation response: `{"operation":"addition","result":7}`
#[derive(Debug, Serialize)]
pub struct OperationResponse {
    pub operation: &'static str,
    #[serde(serialize_with = "serialize_result")]
    pub result: f64,
}

impl OperationResponse {
    pub const fn new(operation: &'static str, result: f64) -> Self {
        Self { operation, result }
    }
}

/// Error response body: `{"error":"<message>"}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Health probe body: `{"status":"ok"}`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Serialize integral results as JSON integers (`7` rather than `7.0`),
/// the way JavaScript-style number formatting renders them.
#[allow(clippy::cast_possible_truncation)]
fn serialize_result<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // `i64::MAX as f64` rounds up to 2^63, which does not fit an i64, so the
    // upper bound is exclusive. The lower bound (-2^63) is exact.
    #[allow(clippy::cast_precision_loss)]
    let in_i64_range = *value >= (i64::MIN as f64) && *value < (i64::MAX as f64);
    if value.fract() == 0.0 && in_i64_range {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
