use std::borrow::Cow;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::SummaryError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method of an API Gateway event, payload v2 first, then v1.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// Request id assigned by API Gateway, if any.
pub fn request_id(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "requestId"])
}

/// Raw body text, decoding base64 when the event says so. A missing body is
/// treated as empty.
pub fn raw_body(payload: &Value) -> Result<Cow<'_, str>, SummaryError> {
    let body = payload.get("body").and_then(Value::as_str).unwrap_or("");
    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(Cow::Borrowed(body));
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| SummaryError::InvalidJson(format!("Failed to decode base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map(Cow::Owned)
        .map_err(|e| SummaryError::InvalidJson(format!("Body is not UTF-8: {e}")))
}

/// Parses the request body as JSON.
pub fn json_body(payload: &Value) -> Result<Value, SummaryError> {
    let body = raw_body(payload)?;
    Ok(serde_json::from_str(&body)?)
}
