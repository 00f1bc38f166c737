//! Category create records and update patches.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

use crate::core::models::CategoryRecord;

pub const DEFAULT_COLOR: &str = "#6b7280";
pub const DEFAULT_ICON: &str = "Folder";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl CategoryDraft {
    /// New categories start with no tasks; blank colour and icon fall back
    /// to the defaults.
    #[must_use]
    pub fn into_record(self, now: DateTime<Utc>) -> CategoryRecord {
        CategoryRecord {
            id: None,
            name: self.name.clone(),
            display_name: self.name,
            color: Some(non_blank(self.color).unwrap_or_else(|| DEFAULT_COLOR.to_string())),
            icon: Some(non_blank(self.icon).unwrap_or_else(|| DEFAULT_ICON.to_string())),
            task_count: Some(0),
            created_at: Some(now),
        }
    }
}

/// Partial update. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub task_count: Option<i64>,
}

impl CategoryUpdate {
    #[must_use]
    pub fn into_patch(self, id: i64) -> Map<String, Value> {
        let mut patch = Map::new();
        patch.insert("Id".into(), json!(id));

        if let Some(name) = non_blank(self.name) {
            patch.insert("Name".into(), json!(name));
            patch.insert("name_c".into(), json!(name));
        }
        if let Some(color) = non_blank(self.color) {
            patch.insert("color_c".into(), json!(color));
        }
        if let Some(icon) = non_blank(self.icon) {
            patch.insert("icon_c".into(), json!(icon));
        }
        if let Some(task_count) = self.task_count {
            patch.insert("task_count_c".into(), json!(task_count));
        }

        patch
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
