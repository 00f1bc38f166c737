//! Task summary - a serverless function that turns a task title into a short
//! descriptive summary, plus the task-domain helpers the task manager builds
//! around it.
//!
//! # Architecture
//!
//! - `summary`: the ordered keyword rule table and the pure classifier
//! - `api`: the AWS Lambda handler for `POST { "title": ... }` requests
//! - `tasks`: task records and update patches carrying a derived summary
//! - `categories`, `projects`: create records and update patches for the
//!   other tables
//! - `utils`: task list filtering, counting and due-date labels
//!
//! # Example
//!
//! ```
//! use task_summary::summary::classify;
//!
//! let summary = classify("Implement new search feature").unwrap();
//! assert_eq!(summary.summary, "Development task: Implement new search feature");
//! assert_eq!(summary.original_title, "Implement new search feature");
//! ```

// Module declarations
pub mod api;
pub mod categories;
pub mod core;
pub mod errors;
pub mod projects;
pub mod summary;
pub mod tasks;
pub mod utils;

pub use errors::SummaryError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Logs at INFO, or DEBUG with the `debug-logs`
/// feature. Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// task_summary::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let level = if cfg!(feature = "debug-logs") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_filter(level);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
