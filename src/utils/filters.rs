use std::collections::BTreeMap;

use crate::core::models::{CategoryRecord, Priority, TaskRecord};

/// Sidebar selection: a completion bucket or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Active,
    Completed,
    Category(i64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: String,
    pub selection: Selection,
    pub status: StatusFilter,
    /// Empty means every priority.
    pub priorities: Vec<Priority>,
}

impl TaskFilter {
    #[must_use]
    pub fn matches(&self, task: &TaskRecord) -> bool {
        let query = self.search.to_lowercase();
        if !query.is_empty()
            && !task.title.to_lowercase().contains(&query)
            && !task.description.to_lowercase().contains(&query)
        {
            return false;
        }

        let selected = match self.selection {
            Selection::All => true,
            Selection::Active => !task.completed,
            Selection::Completed => task.completed,
            Selection::Category(id) => task.category_id == Some(id),
        };
        if !selected {
            return false;
        }

        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        };

        status_ok && (self.priorities.is_empty() || self.priorities.contains(&task.priority))
    }

    /// Filters a list of tasks, retaining those matching every criterion.
    #[must_use]
    pub fn apply<'a>(&self, tasks: &'a [TaskRecord]) -> Vec<&'a TaskRecord> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }

    /// True when nothing narrows the list.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.selection == Selection::All
            && self.status == StatusFilter::All
            && self.priorities.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
    pub categories: BTreeMap<i64, usize>,
}

impl TaskCounts {
    /// Counts for the sidebar. Every stored category gets an entry, even at
    /// zero.
    #[must_use]
    pub fn tally(tasks: &[TaskRecord], categories: &[CategoryRecord]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        let categories = categories
            .iter()
            .filter_map(|c| c.id)
            .map(|id| {
                let n = tasks.iter().filter(|t| t.category_id == Some(id)).count();
                (id, n)
            })
            .collect();

        Self {
            all: tasks.len(),
            active: tasks.len() - completed,
            completed,
            categories,
        }
    }
}
