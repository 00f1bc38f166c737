//! Project records. Projects carry no summary and every save writes the
//! whole record.

use chrono::NaiveDate;
use serde_json::{Map, Value, json};

use crate::core::models::ProjectRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

impl ProjectDraft {
    #[must_use]
    pub fn into_record(self) -> ProjectRecord {
        ProjectRecord {
            id: None,
            name: self.name,
            description: self.description.unwrap_or_default(),
            start_date: self.start_date,
            end_date: self.end_date,
            tags: self.tags,
            created_on: None,
            modified_on: None,
        }
    }

    /// Replacement patch: unset fields are written as empty or null.
    #[must_use]
    pub fn into_patch(self, id: i64) -> Map<String, Value> {
        let record = self.into_record();
        let mut patch = Map::new();
        patch.insert("Id".into(), json!(id));
        patch.insert("name_c".into(), json!(record.name));
        patch.insert("description_c".into(), json!(record.description));
        patch.insert("start_date_c".into(), json!(record.start_date));
        patch.insert("end_date_c".into(), json!(record.end_date));
        patch.insert("Tags".into(), json!(record.tags));
        patch
    }
}
