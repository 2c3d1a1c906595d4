// TaskList - In-memory prioritized task list with search, filter and sort

pub mod command;
pub mod config;
pub mod filter;
pub mod models;
pub mod session;
pub mod store;

// Re-export main types for convenience
pub use command::Command;
pub use config::Config;
pub use filter::{FilterMode, ViewState};
pub use models::{MAX_TEXT_LEN, Priority, SortOrder, Task, now_ms, validate_text};
pub use session::{Flow, Session};
pub use store::TaskListStore;
