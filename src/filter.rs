// View filtering and ordering for tasks

use crate::models::{Priority, SortOrder, Task};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which priorities the view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Only(Priority),
}

impl FilterMode {
    pub fn admits(self, priority: Priority) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Only(p) => p == priority,
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Only(p) => write!(f, "{}", p),
        }
    }
}

/// Inputs of the derived view: keyword, sort order and filter mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Case-insensitive substring; empty matches everything
    pub search_keyword: String,
    pub sort_order: SortOrder,
    pub filter_mode: FilterMode,
}

impl ViewState {
    /// True if the task passes both the keyword and the priority filter
    pub fn matches(&self, task: &Task) -> bool {
        self.filter_mode.admits(task.priority) && contains_ignore_case(&task.text, &self.search_keyword)
    }

    /// Priority rank first, then text, both in the direction of `sort_order`
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ord = a.priority.rank().cmp(&b.priority.rank()).then_with(|| a.text.cmp(&b.text));
        match self.sort_order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }

    /// Filter then stable-sort the given tasks
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let mut view: Vec<&Task> = tasks.iter().filter(|t| self.matches(t)).collect();
        view.sort_by(|a, b| self.compare(a, b));
        view
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(text: &str, priority: Priority) -> Task {
        Task::new(text, priority)
    }

    fn texts(view: &[&Task]) -> Vec<String> {
        view.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_filter_mode_admits() {
        assert!(FilterMode::All.admits(Priority::High));
        assert!(FilterMode::Only(Priority::Low).admits(Priority::Low));
        assert!(!FilterMode::Only(Priority::Low).admits(Priority::Medium));
    }

    #[test]
    fn test_filter_mode_display() {
        assert_eq!(FilterMode::All.to_string(), "all");
        assert_eq!(FilterMode::Only(Priority::High).to_string(), "high");
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let state = ViewState {
            search_keyword: "BU".to_string(),
            ..ViewState::default()
        };
        assert!(state.matches(&task("Buy milk", Priority::Low)));
        assert!(state.matches(&task("Fix bug", Priority::Medium)));
        assert!(!state.matches(&task("Ship release", Priority::High)));
    }

    #[test]
    fn test_empty_keyword_matches_all() {
        let state = ViewState::default();
        assert!(state.matches(&task("anything", Priority::Medium)));
    }

    #[test]
    fn test_ties_follow_sort_direction() {
        let tasks = vec![
            task("beta", Priority::Medium),
            task("alpha", Priority::Medium),
            task("gamma", Priority::Low),
        ];

        let mut state = ViewState::default();
        assert_eq!(texts(&state.apply(&tasks)), vec!["gamma", "alpha", "beta"]);

        state.sort_order = SortOrder::Desc;
        assert_eq!(texts(&state.apply(&tasks)), vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn test_identical_tasks_keep_insertion_order() {
        let first = task("same", Priority::High);
        let second = task("same", Priority::High);
        let tasks = vec![first.clone(), second.clone()];

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let state = ViewState {
                sort_order: order,
                ..ViewState::default()
            };
            let view = state.apply(&tasks);
            assert_eq!(view[0].id, first.id);
            assert_eq!(view[1].id, second.id);
        }
    }

    #[test]
    fn test_apply_is_idempotent_for_keyword() {
        let tasks = vec![task("Buy milk", Priority::Low), task("Walk dog", Priority::High)];
        let state = ViewState {
            search_keyword: "milk".to_string(),
            ..ViewState::default()
        };

        let once: Vec<Task> = state.apply(&tasks).into_iter().cloned().collect();
        let twice = state.apply(&once);
        assert_eq!(texts(&twice), vec!["Buy milk"]);
        assert_eq!(once.len(), twice.len());
    }
}
