// Applies user commands to a store and renders the derived view

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::models::{Priority, Task, validate_text};
use crate::store::TaskListStore;
use colored::Colorize;
use eyre::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A single interactive session writing to `out`
pub struct Session<W: Write> {
    store: TaskListStore,
    config: Config,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self {
            store: TaskListStore::with_sort_order(config.sort_order),
            config,
            out,
        }
    }

    pub fn store(&self) -> &TaskListStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Apply one command. Errors are I/O failures on the output only.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add { priority, text } => self.add(priority, &text)?,
            Command::Delete(position) => {
                let removed = position.checked_sub(1).and_then(|i| self.store.delete_visible(i));
                self.report_delete(removed, position)?;
            }
            Command::Remove(index) => {
                let removed = index.checked_sub(1).and_then(|i| self.store.delete_task(i));
                self.report_delete(removed, index)?;
            }
            Command::Filter(priority) => {
                self.store.set_priority_filter(priority);
                writeln!(self.out, "Showing {} priority tasks", priority)?;
            }
            Command::ShowAll => {
                self.store.show_all();
                writeln!(self.out, "Showing all tasks")?;
            }
            Command::Search(keyword) => {
                if keyword.is_empty() {
                    writeln!(self.out, "Search cleared")?;
                } else {
                    writeln!(self.out, "Searching for '{}'", keyword)?;
                }
                self.store.set_search_keyword(keyword);
            }
            Command::Sort(order) => {
                self.store.set_sort_order(order);
                writeln!(self.out, "Sorting {}", order)?;
            }
            Command::List => self.render()?,
            Command::Export => self.export()?,
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parse and apply one line; parse errors are reported, not returned
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                warn!(line, error = %e, "Rejected input");
                writeln!(self.out, "error: {:#}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute every line from `reader` until it ends or a quit command
    ///
    /// With `prompt` set, writes `> ` before each read.
    pub fn run_lines<R: BufRead>(&mut self, reader: R, prompt: bool) -> Result<()> {
        info!("Session started");
        let mut lines = reader.lines();

        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input")?;

            if self.execute_line(&line)? == Flow::Quit {
                break;
            }
        }

        info!(tasks = self.store.len(), "Session ended");
        Ok(())
    }

    /// Write the current view, one numbered row per task
    pub fn render(&mut self) -> Result<()> {
        let view = self.store.derive_view();
        if view.is_empty() {
            writeln!(self.out, "(no tasks)")?;
            return Ok(());
        }

        for (i, task) in view.iter().enumerate() {
            let row = format!("{}. {} [{}]", i + 1, task.text, task.priority);
            if self.config.color {
                writeln!(self.out, "{}", colorize(&row, task.priority))?;
            } else {
                writeln!(self.out, "{}", row)?;
            }
        }
        Ok(())
    }

    /// Write the current view as a JSON array
    pub fn export(&mut self) -> Result<()> {
        let view = self.store.derive_view();
        let json = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        writeln!(self.out, "{}", json)?;
        Ok(())
    }

    fn add(&mut self, priority: Option<Priority>, text: &str) -> Result<()> {
        if let Err(e) = validate_text(text, self.config.max_text_len) {
            warn!(text, error = %e, "Rejected task text");
            writeln!(self.out, "error: {}", e)?;
            return Ok(());
        }

        let priority = priority.unwrap_or(self.store.selected_priority());
        self.store.add_task(text, priority);
        writeln!(self.out, "Added: {} [{}]", text, priority)?;
        Ok(())
    }

    fn report_delete(&mut self, removed: Option<Task>, position: usize) -> Result<()> {
        match removed {
            Some(task) => writeln!(self.out, "Deleted: {}", task.text)?,
            None => writeln!(self.out, "No task at position {}", position)?,
        }
        Ok(())
    }
}

fn colorize(row: &str, priority: Priority) -> String {
    match priority {
        Priority::Low => row.green().to_string(),
        Priority::Medium => row.yellow().to_string(),
        Priority::High => row.red().to_string(),
    }
}
