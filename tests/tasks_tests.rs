use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::json;
use task_summary::categories::{CategoryDraft, CategoryUpdate, DEFAULT_COLOR, DEFAULT_ICON};
use task_summary::core::models::{Priority, ProjectRecord, TaskRecord};
use task_summary::projects::ProjectDraft;
use task_summary::errors::SummaryError;
use task_summary::summary::{RuleSet, Summary};
use task_summary::tasks::{
    Summarizer, TaskDraft, TaskUpdate, complete_patch, derive_summary,
};

struct FailingSummarizer;

impl Summarizer for FailingSummarizer {
    fn summarize(&self, _title: &str) -> Result<Summary, SummaryError> {
        Err(SummaryError::Internal("backend unavailable".into()))
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap()
}

#[test]
fn test_draft_record_carries_summary_and_defaults() {
    let draft = TaskDraft {
        title: "Fix flaky CI job".into(),
        category_id: Some(7),
        ..TaskDraft::default()
    };
    let record = draft.into_record(RuleSet::builtin(), now());

    assert_eq!(record.name, "Fix flaky CI job");
    assert_eq!(record.title, "Fix flaky CI job");
    assert_eq!(record.summary, "Resolve technical issue: Fix flaky CI job");
    assert_eq!(record.priority, Priority::Medium);
    assert_eq!(record.description, "");
    assert_eq!(record.category_id, Some(7));
    assert!(!record.completed);
    assert_eq!(record.completed_at, None);
    assert_eq!(record.created_at, Some(now()));
    assert_eq!(record.updated_at, Some(now()));
}

#[test]
fn test_draft_record_survives_summary_failure() {
    let draft = TaskDraft {
        title: "Fix flaky CI job".into(),
        ..TaskDraft::default()
    };
    let record = draft.into_record(&FailingSummarizer, now());
    assert_eq!(record.summary, "");
    assert_eq!(record.title, "Fix flaky CI job");
}

#[test]
fn test_blank_title_gets_empty_summary() {
    assert_eq!(derive_summary(RuleSet::builtin(), "   "), "");
}

#[test]
fn test_record_serializes_backend_field_names() {
    let draft = TaskDraft {
        title: "Plan launch".into(),
        priority: Some(Priority::High),
        ..TaskDraft::default()
    };
    let value = serde_json::to_value(draft.into_record(RuleSet::builtin(), now())).unwrap();

    assert_eq!(value["Name"], "Plan launch");
    assert_eq!(value["title_c"], "Plan launch");
    assert_eq!(value["priority_c"], "high");
    assert_eq!(value["summary_c"], "Planning and design: Plan launch");
    assert_eq!(value["completed_c"], false);
    assert!(value.get("Id").is_none());
}

#[test]
fn test_record_accepts_lookup_objects() {
    let record: TaskRecord = serde_json::from_value(json!({
        "Id": 12,
        "Name": "Ship it",
        "title_c": "Ship it",
        "priority_c": "low",
        "category_id_c": { "Id": 3, "Name": "Work" },
        "completed_c": true
    }))
    .unwrap();
    assert_eq!(record.id, Some(12));
    assert_eq!(record.category_id, Some(3));
    assert_eq!(record.priority, Priority::Low);
    assert_eq!(record.priority.label(), "Low");
    assert!(record.completed);

    let record: TaskRecord =
        serde_json::from_value(json!({ "title_c": "x", "category_id_c": 4 })).unwrap();
    assert_eq!(record.category_id, Some(4));

    let record: TaskRecord =
        serde_json::from_value(json!({ "title_c": "x", "category_id_c": null })).unwrap();
    assert_eq!(record.category_id, None);
}

#[test]
fn test_patch_contains_only_set_fields() {
    let update = TaskUpdate {
        priority: Some(Priority::High),
        ..TaskUpdate::default()
    };
    let patch = update.into_patch(5, RuleSet::builtin(), now());

    assert_eq!(patch.len(), 3);
    assert_eq!(patch["Id"], 5);
    assert_eq!(patch["priority_c"], "high");
    assert_eq!(patch["updated_at_c"], "2024-03-05T09:30:00.000Z");
}

#[test]
fn test_title_change_regenerates_summary() {
    let update = TaskUpdate {
        title: Some("Research vector databases".into()),
        ..TaskUpdate::default()
    };
    let patch = update.into_patch(5, RuleSet::builtin(), now());

    assert_eq!(patch["Name"], "Research vector databases");
    assert_eq!(patch["title_c"], "Research vector databases");
    assert_eq!(patch["summary_c"], "Research task: Research vector databases");
}

#[test]
fn test_title_change_keeps_old_summary_on_failure() {
    let update = TaskUpdate {
        title: Some("Research vector databases".into()),
        ..TaskUpdate::default()
    };
    let patch = update.into_patch(5, &FailingSummarizer, now());
    assert!(patch.get("summary_c").is_none());
    assert_eq!(patch["title_c"], "Research vector databases");
}

#[test]
fn test_explicit_summary_wins() {
    let update = TaskUpdate {
        title: Some("Fix bug".into()),
        summary: Some("Hand written".into()),
        ..TaskUpdate::default()
    };
    let patch = update.into_patch(5, RuleSet::builtin(), now());
    assert_eq!(patch["summary_c"], "Hand written");
}

#[test]
fn test_patch_can_clear_nullable_fields() {
    let update = TaskUpdate {
        description: Some(None),
        due_date: Some(None),
        category_id: Some(None),
        completed: Some(false),
        completed_at: Some(None),
        ..TaskUpdate::default()
    };
    let patch = update.into_patch(9, RuleSet::builtin(), now());
    assert!(patch["description_c"].is_null());
    assert!(patch["due_date_c"].is_null());
    assert!(patch["category_id_c"].is_null());
    assert!(patch["completed_at_c"].is_null());
    assert_eq!(patch["completed_c"], false);
}

#[test]
fn test_complete_patch() {
    let patch = complete_patch(8, now());
    assert_eq!(patch["Id"], 8);
    assert_eq!(patch["completed_c"], true);
    assert_eq!(patch["completed_at_c"], "2024-03-05T09:30:00.000Z");
    assert_eq!(patch["updated_at_c"], patch["completed_at_c"]);
}

#[test]
fn test_category_draft_defaults() {
    let draft = CategoryDraft {
        name: "Errands".into(),
        color: Some(String::new()),
        ..CategoryDraft::default()
    };
    let value = serde_json::to_value(draft.into_record(now())).unwrap();

    assert_eq!(value["Name"], "Errands");
    assert_eq!(value["name_c"], "Errands");
    assert_eq!(value["color_c"], DEFAULT_COLOR);
    assert_eq!(value["icon_c"], DEFAULT_ICON);
    assert_eq!(value["task_count_c"], 0);
    assert_eq!(value["created_at_c"], "2024-03-05T09:30:00Z");
    assert!(value.get("Id").is_none());
}

#[test]
fn test_category_draft_keeps_chosen_style() {
    let draft = CategoryDraft {
        name: "Work".into(),
        color: Some("#ef4444".into()),
        icon: Some("Briefcase".into()),
    };
    let record = draft.into_record(now());
    assert_eq!(record.color.as_deref(), Some("#ef4444"));
    assert_eq!(record.icon.as_deref(), Some("Briefcase"));
}

#[test]
fn test_category_patch_skips_blank_fields() {
    let update = CategoryUpdate {
        name: Some(String::new()),
        color: Some("#22c55e".into()),
        icon: None,
        task_count: Some(0),
    };
    let patch = update.into_patch(4);

    assert_eq!(patch.len(), 3);
    assert_eq!(patch["Id"], 4);
    assert_eq!(patch["color_c"], "#22c55e");
    assert_eq!(patch["task_count_c"], 0);

    let patch = CategoryUpdate {
        name: Some("Home".into()),
        ..CategoryUpdate::default()
    }
    .into_patch(4);
    assert_eq!(patch["Name"], "Home");
    assert_eq!(patch["name_c"], "Home");
}

#[test]
fn test_project_record_fields() {
    let draft = ProjectDraft {
        name: "Website relaunch".into(),
        start_date: NaiveDate::from_ymd_opt(2024, 4, 1),
        tags: vec!["web".into(), "q2".into()],
        ..ProjectDraft::default()
    };
    let value = serde_json::to_value(draft.into_record()).unwrap();

    assert_eq!(value["name_c"], "Website relaunch");
    assert_eq!(value["description_c"], "");
    assert_eq!(value["start_date_c"], "2024-04-01");
    assert!(value["end_date_c"].is_null());
    assert_eq!(value["Tags"], json!(["web", "q2"]));
    assert!(value.get("Id").is_none());
}

#[test]
fn test_project_patch_replaces_every_field() {
    let patch = ProjectDraft {
        name: "Website relaunch".into(),
        ..ProjectDraft::default()
    }
    .into_patch(11);

    assert_eq!(patch.len(), 6);
    assert_eq!(patch["Id"], 11);
    assert_eq!(patch["description_c"], "");
    assert!(patch["start_date_c"].is_null());
    assert!(patch["end_date_c"].is_null());
    assert_eq!(patch["Tags"], json!([]));
}

#[test]
fn test_project_reads_backend_row() {
    let project: ProjectRecord = serde_json::from_value(json!({
        "Id": 2,
        "name_c": "Garden",
        "end_date_c": "2024-06-30",
        "Tags": ["home", "outdoor", "spring", "weekend"],
        "CreatedOn": "2024-03-01T08:00:00Z"
    }))
    .unwrap();

    assert_eq!(project.id, Some(2));
    assert_eq!(project.end_date, NaiveDate::from_ymd_opt(2024, 6, 30));
    assert_eq!(project.description, "");

    let (shown, hidden) = project.tag_preview(3);
    assert_eq!(shown, ["home", "outdoor", "spring"]);
    assert_eq!(hidden, 1);
}
