// Textual user actions understood by a session

use crate::models::{Priority, SortOrder};
use eyre::{Context, Result, eyre};

/// One discrete user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task; `None` uses the store's selected priority
    Add { priority: Option<Priority>, text: String },
    /// Delete by 1-based position in the displayed view
    Delete(usize),
    /// Delete by 1-based position in insertion order
    Remove(usize),
    Filter(Priority),
    ShowAll,
    Search(String),
    Sort(SortOrder),
    List,
    Export,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add [low|medium|high] <text>   add a task (default: selected priority)
  delete <n>                     delete the n-th task of the current view
  remove <n>                     delete the n-th task in insertion order
  filter <priority>              show only one priority (alias: priority)
  all                            show every priority, reset selection to low
  search [keyword]               case-insensitive search; no keyword clears it
  sort asc|desc                  set sort direction
  list                           print the current view
  export                         print the current view as JSON
  help                           show this message
  quit                           leave the session (alias: exit)";

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => Self::parse_add(rest)?,
            "delete" | "del" => Command::Delete(parse_position(rest)?),
            "remove" | "rm" => Command::Remove(parse_position(rest)?),
            "filter" | "priority" => {
                let priority = rest.parse::<Priority>().wrap_err("filter needs a priority")?;
                Command::Filter(priority)
            }
            "all" => Command::ShowAll,
            "search" => Command::Search(rest.to_string()),
            "sort" => Command::Sort(rest.parse::<SortOrder>().wrap_err("sort needs a direction")?),
            "list" | "ls" => Command::List,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(eyre!("Unknown command: {} (try 'help')", other)),
        };

        Ok(Some(command))
    }

    fn parse_add(rest: &str) -> Result<Self> {
        if rest.is_empty() {
            return Err(eyre!("add needs task text"));
        }

        // A leading priority word is optional
        if let Some((first, text)) = rest.split_once(char::is_whitespace)
            && let Ok(priority) = first.parse::<Priority>()
        {
            return Ok(Command::Add {
                priority: Some(priority),
                text: text.trim().to_string(),
            });
        }

        Ok(Command::Add {
            priority: None,
            text: rest.to_string(),
        })
    }
}

fn parse_position(arg: &str) -> Result<usize> {
    let n: usize = arg
        .parse()
        .with_context(|| format!("Invalid position: '{}' (expected a number from 1)", arg))?;
    if n == 0 {
        return Err(eyre!("Positions start at 1"));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_add_with_priority() {
        assert_eq!(
            parse("add high Ship release"),
            Command::Add {
                priority: Some(Priority::High),
                text: "Ship release".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_without_priority() {
        assert_eq!(
            parse("add Buy milk"),
            Command::Add {
                priority: None,
                text: "Buy milk".to_string(),
            }
        );
        // A lone word is text, even if it looks like a priority
        assert_eq!(
            parse("add high"),
            Command::Add {
                priority: None,
                text: "high".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_requires_text() {
        assert!(Command::parse("add").is_err());
    }

    #[test]
    fn test_parse_positions() {
        assert_eq!(parse("delete 2"), Command::Delete(2));
        assert_eq!(parse("rm 1"), Command::Remove(1));
        assert!(Command::parse("delete 0").is_err());
        assert!(Command::parse("delete x").is_err());
        assert!(Command::parse("delete").is_err());
    }

    #[test]
    fn test_parse_view_commands() {
        assert_eq!(parse("filter Medium"), Command::Filter(Priority::Medium));
        assert_eq!(parse("priority low"), Command::Filter(Priority::Low));
        assert_eq!(parse("ALL"), Command::ShowAll);
        assert_eq!(parse("search Bu"), Command::Search("Bu".to_string()));
        assert_eq!(parse("search"), Command::Search(String::new()));
        assert_eq!(parse("sort desc"), Command::Sort(SortOrder::Desc));
        assert!(Command::parse("sort up").is_err());
        assert!(Command::parse("filter urgent").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse("list"), Command::List);
        assert_eq!(parse("export"), Command::Export);
        assert_eq!(parse("?"), Command::Help);
        assert_eq!(parse("exit"), Command::Quit);
        assert!(Command::parse("frobnicate").is_err());
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert!(Command::parse("").unwrap().is_none());
        assert!(Command::parse("   ").unwrap().is_none());
        assert!(Command::parse("# setup").unwrap().is_none());
    }
}
