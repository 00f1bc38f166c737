//! API Lambda handler for `POST { "title": ... }` summary requests.
//!
//! The request is checked in a fixed order: method, JSON body, title. Only a
//! valid title reaches the rule table, so configuration problems surface as
//! internal errors rather than masking client errors.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::errors::SummaryError;
use crate::summary::classifier::title_from_value;
use crate::summary::{RuleSet, Summary};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails at the runtime level: every failure is turned into a JSON
/// response with the matching status code.
#[tracing::instrument(level = "info", skip(event), fields(aws_request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env();
    Ok(respond(&event.payload, config.as_ref().map_err(String::as_str)))
}

/// Maps an API Gateway event to a proxy response.
#[must_use]
pub fn handle_request(payload: &Value, config: &AppConfig) -> Value {
    respond(payload, Ok(config))
}

/// Config errors are only reported for otherwise valid requests.
fn respond(payload: &Value, config: Result<&AppConfig, &str>) -> Value {
    let correlation_id = parsing::request_id(payload)
        .map_or_else(|| Uuid::new_v4().to_string(), ToString::to_string);
    let content_type = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "Content-Type"))
        .unwrap_or("");
    info!(correlation_id = %correlation_id, content_type = %content_type, "Summary request received");

    match summarize_request(payload, config) {
        Ok(summary) => {
            info!(correlation_id = %correlation_id, summary = %summary.summary, "Summary generated");
            helpers::ok_summary(&summary)
        }
        Err(e @ SummaryError::Internal(_)) => {
            error!(correlation_id = %correlation_id, "{}", e);
            helpers::err_response(&e)
        }
        Err(e) => {
            if let SummaryError::InvalidJson(detail) = &e {
                warn!(correlation_id = %correlation_id, detail = %detail, "Rejected request body");
            } else {
                warn!(correlation_id = %correlation_id, status = e.status_code(), "{}", e);
            }
            helpers::err_response(&e)
        }
    }
}

fn summarize_request(
    payload: &Value,
    config: Result<&AppConfig, &str>,
) -> Result<Summary, SummaryError> {
    if parsing::request_method(payload) != Some("POST") {
        return Err(SummaryError::MethodNotAllowed);
    }

    let body = parsing::json_body(payload)?;
    let title = title_from_value(body.get("title"))?;

    let config = config.map_err(|e| SummaryError::Internal(e.to_string()))?;
    let rules = RuleSet::load(config)?;
    rules.classify(title)
}
