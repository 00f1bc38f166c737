use thiserror::Error;

/// Failure modes of the summary function. `Display` is the message sent back
/// to the caller, `status_code` the HTTP status it maps to.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Method not allowed. Use POST.")]
    MethodNotAllowed,

    #[error("Invalid JSON in request body")]
    InvalidJson(String),

    #[error("Title is required and must be a non-empty string")]
    Validation,

    #[error("Summary generation failed: {0}")]
    Internal(String),
}

impl SummaryError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummaryError::MethodNotAllowed => 405,
            SummaryError::InvalidJson(_) => 400,
            SummaryError::Validation => 422,
            SummaryError::Internal(_) => 500,
        }
    }
}

/// Problems with a rule table loaded from outside the binary.
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("Failed to read rule table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rule table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rule table is empty")]
    Empty,

    #[error("Rule {index} has no keywords")]
    NoKeywords { index: usize },

    #[error("Rule {index} has a blank keyword")]
    BlankKeyword { index: usize },

    #[error("Rule {index} template is missing the {{title}} placeholder")]
    MissingPlaceholder { index: usize },
}

impl From<RuleSetError> for SummaryError {
    fn from(error: RuleSetError) -> Self {
        SummaryError::Internal(error.to_string())
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::InvalidJson(error.to_string())
    }
}
