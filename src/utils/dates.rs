use std::cmp::Ordering;

use chrono::{Datelike, Days, NaiveDate};

use crate::core::models::TaskRecord;

/// Short due-date label relative to `today`: `Today`, `Tomorrow`, the weekday
/// name within the current Sunday-started week, otherwise `Mar 05`.
#[must_use]
pub fn due_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if today.checked_add_days(Days::new(1)) == Some(date) {
        return "Tomorrow".to_string();
    }
    if week_start(date) == week_start(today) {
        return date.format("%A").to_string();
    }
    date.format("%b %d").to_string()
}

#[must_use]
pub fn full_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Due before today. A task due today is not overdue yet.
#[must_use]
pub fn is_overdue(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Earliest due date first; tasks without one go last. Stable.
pub fn sort_by_due_date(tasks: &mut [TaskRecord]) {
    tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}
