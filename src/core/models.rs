//! Task, category and project records in the backend's field naming.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "title_c", default)]
    pub title: String,
    #[serde(rename = "description_c", default)]
    pub description: String,
    #[serde(rename = "priority_c", default)]
    pub priority: Priority,
    #[serde(rename = "due_date_c", default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(
        rename = "category_id_c",
        default,
        deserialize_with = "lookup_id"
    )]
    pub category_id: Option<i64>,
    #[serde(rename = "completed_c", default)]
    pub completed: bool,
    #[serde(rename = "completed_at_c", default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(rename = "created_at_c", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updated_at_c", default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "summary_c", default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "name_c", default)]
    pub display_name: String,
    #[serde(rename = "color_c", default)]
    pub color: Option<String>,
    #[serde(rename = "icon_c", default)]
    pub icon: Option<String>,
    #[serde(rename = "task_count_c", default)]
    pub task_count: Option<i64>,
    #[serde(rename = "created_at_c", default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "name_c", default)]
    pub name: String,
    #[serde(rename = "description_c", default)]
    pub description: String,
    #[serde(rename = "start_date_c", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "end_date_c", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
    #[serde(rename = "CreatedOn", default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(rename = "ModifiedOn", default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

impl ProjectRecord {
    /// The first `limit` tags and how many more are hidden.
    #[must_use]
    pub fn tag_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(limit);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

/// Lookup fields come back either as a bare id or as `{ "Id": n, "Name": .. }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LookupValue {
    Id(i64),
    Object {
        #[serde(rename = "Id")]
        id: i64,
    },
}

fn lookup_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LookupValue>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        LookupValue::Id(id) | LookupValue::Object { id } => id,
    }))
}
