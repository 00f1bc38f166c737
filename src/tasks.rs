//! Building task records and patches with a derived summary.
//!
//! Summary generation never blocks a write: when it fails the record is
//! stored with an empty summary (on create) or keeps its old one (on update).

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};
use tracing::info;

use crate::core::models::{Priority, TaskRecord};
use crate::errors::SummaryError;
use crate::summary::{RuleSet, Summary};

/// Anything that can turn a title into a summary.
pub trait Summarizer {
    fn summarize(&self, title: &str) -> Result<Summary, SummaryError>;
}

impl Summarizer for RuleSet {
    fn summarize(&self, title: &str) -> Result<Summary, SummaryError> {
        self.classify(title)
    }
}

/// Summary text for the title, or `None` when generation failed.
pub fn try_derive_summary(summarizer: &impl Summarizer, title: &str) -> Option<String> {
    match summarizer.summarize(title) {
        Ok(summary) => Some(summary.summary),
        Err(e) => {
            info!(error = %e, "Summary generation failed, continuing without summary");
            None
        }
    }
}

/// Summary text for the title, empty when generation failed.
pub fn derive_summary(summarizer: &impl Summarizer, title: &str) -> String {
    try_derive_summary(summarizer, title).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<DateTime<Utc>>,
    pub category_id: Option<i64>,
}

impl TaskDraft {
    #[must_use]
    pub fn into_record(self, summarizer: &impl Summarizer, now: DateTime<Utc>) -> TaskRecord {
        let summary = derive_summary(summarizer, &self.title);
        TaskRecord {
            id: None,
            name: self.title.clone(),
            title: self.title,
            description: self.description.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            due_date: self.due_date,
            category_id: self.category_id,
            completed: false,
            completed_at: None,
            created_at: Some(now),
            updated_at: Some(now),
            summary,
        }
    }
}

/// Partial update. `None` leaves a field untouched; for nullable fields
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub category_id: Option<Option<i64>>,
    pub completed: Option<bool>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
    pub summary: Option<String>,
}

impl TaskUpdate {
    /// Patch object holding `Id`, `updated_at_c` and every field set here.
    #[must_use]
    pub fn into_patch(
        self,
        id: i64,
        summarizer: &impl Summarizer,
        now: DateTime<Utc>,
    ) -> Map<String, Value> {
        let mut patch = Map::new();
        patch.insert("Id".into(), json!(id));
        patch.insert("updated_at_c".into(), json!(timestamp(now)));

        if let Some(title) = self.title {
            if let Some(summary) = try_derive_summary(summarizer, &title) {
                patch.insert("summary_c".into(), json!(summary));
            }
            patch.insert("Name".into(), json!(title));
            patch.insert("title_c".into(), json!(title));
        }
        if let Some(description) = self.description {
            patch.insert("description_c".into(), json!(description));
        }
        if let Some(priority) = self.priority {
            patch.insert("priority_c".into(), json!(priority));
        }
        if let Some(due_date) = self.due_date {
            patch.insert("due_date_c".into(), json!(due_date.map(timestamp)));
        }
        if let Some(category_id) = self.category_id {
            patch.insert("category_id_c".into(), json!(category_id));
        }
        if let Some(completed) = self.completed {
            patch.insert("completed_c".into(), json!(completed));
        }
        if let Some(completed_at) = self.completed_at {
            patch.insert("completed_at_c".into(), json!(completed_at.map(timestamp)));
        }
        if let Some(summary) = self.summary {
            patch.insert("summary_c".into(), json!(summary));
        }

        patch
    }
}

/// Patch marking a task done at `now`.
#[must_use]
pub fn complete_patch(id: i64, now: DateTime<Utc>) -> Map<String, Value> {
    let stamp = timestamp(now);
    let mut patch = Map::new();
    patch.insert("Id".into(), json!(id));
    patch.insert("completed_c".into(), json!(true));
    patch.insert("completed_at_c".into(), json!(stamp));
    patch.insert("updated_at_c".into(), json!(stamp));
    patch
}

pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
