//! Response builders for the HTTP API.
//!
//! Every response is a Lambda proxy result with a JSON body carrying a
//! `success` flag, plus either `data` or a `message`.

use serde_json::{Value, json};

use crate::errors::SummaryError;
use crate::summary::Summary;

/// Wraps a JSON body in a proxy result with the given status code.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response carrying the generated summary.
#[must_use]
pub fn ok_summary(summary: &Summary) -> Value {
    json_response(200, &json!({ "success": true, "data": summary }))
}

/// Returns a failure response for the error, using its status and message.
#[must_use]
pub fn err_response(error: &SummaryError) -> Value {
    json_response(
        error.status_code(),
        &json!({ "success": false, "message": error.to_string() }),
    )
}
