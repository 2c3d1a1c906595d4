// In-memory task list store with derived, filtered and sorted view

use crate::filter::{FilterMode, ViewState};
use crate::models::{Priority, SortOrder, Task};
use tracing::debug;
use uuid::Uuid;

/// Owns the task list and the inputs of its derived view
///
/// Every operation is total: out-of-range positions and unknown ids are
/// silently ignored, and an empty list derives an empty view.
#[derive(Debug, Clone, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    selected_priority: Priority,
    view: ViewState,
}

impl TaskListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a preset sort order
    pub fn with_sort_order(order: SortOrder) -> Self {
        let mut store = Self::new();
        store.view.sort_order = order;
        store
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Priority that `add_selected` assigns to new tasks
    pub fn selected_priority(&self) -> Priority {
        self.selected_priority
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a task; text is assumed to be validated by the caller
    pub fn add_task(&mut self, text: impl Into<String>, priority: Priority) -> Uuid {
        let task = Task::new(text, priority);
        let id = task.id;
        debug!(%id, text = %task.text, %priority, "add_task");
        self.tasks.push(task);
        id
    }

    /// Append a task with the currently selected priority
    pub fn add_selected(&mut self, text: impl Into<String>) -> Uuid {
        self.add_task(text, self.selected_priority)
    }

    /// Remove the task at `index` of the insertion-ordered list
    pub fn delete_task(&mut self, index: usize) -> Option<Task> {
        if index >= self.tasks.len() {
            debug!(index, len = self.tasks.len(), "delete_task: index out of range, ignoring");
            return None;
        }
        let task = self.tasks.remove(index);
        debug!(index, id = %task.id, "delete_task");
        Some(task)
    }

    /// Remove the task with the given stable id
    pub fn delete_by_id(&mut self, id: Uuid) -> Option<Task> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => self.delete_task(index),
            None => {
                debug!(%id, "delete_by_id: unknown id, ignoring");
                None
            }
        }
    }

    /// Remove the task displayed at `position` of the current derived view
    pub fn delete_visible(&mut self, position: usize) -> Option<Task> {
        let id = self.derive_view().get(position).map(|t| t.id)?;
        self.delete_by_id(id)
    }

    /// Restrict the view to one priority, which also becomes the selected priority
    pub fn set_priority_filter(&mut self, priority: Priority) {
        debug!(%priority, "set_priority_filter");
        self.view.filter_mode = FilterMode::Only(priority);
        self.selected_priority = priority;
    }

    pub fn set_search_keyword(&mut self, keyword: impl Into<String>) {
        self.view.search_keyword = keyword.into();
        debug!(keyword = %self.view.search_keyword, "set_search_keyword");
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        debug!(%order, "set_sort_order");
        self.view.sort_order = order;
    }

    /// Show every priority and reset the selected priority to `Low`
    pub fn show_all(&mut self) {
        debug!("show_all");
        self.view.filter_mode = FilterMode::All;
        self.selected_priority = Priority::Low;
    }

    // ========================================================================
    // Derived view
    // ========================================================================

    /// Filtered and sorted projection of the list, recomputed on every call
    pub fn derive_view(&self) -> Vec<&Task> {
        self.view.apply(&self.tasks)
    }
}
