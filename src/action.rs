//! Commands typed at the prompt, turned into the actions the controller understands.

use std::str::FromStr;

use crate::error::AppError;
use crate::model::ServingsChange;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Search(String),
    Page(usize),
    /// Navigate to a recipe, like changing the location fragment
    Open(String),
    Servings(ServingsChange),
    AddToList,
    ToggleLike,
    DeleteItem(String),
    UpdateCount(String, f64),
    EmptyList,
    AddManualItem,
    ShowList,
    ShowLikes,
    Help,
    Quit,
}

fn required<'a>(arg: Option<&'a str>, usage: &str) -> Result<&'a str, AppError> {
    arg.map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::InvalidAction(format!("usage: {usage}")))
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (command, rest) = match s.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, Some(rest)),
            None => (s, None),
        };

        let action = match command.to_lowercase().as_str() {
            "search" | "s" => Action::Search(required(rest, "search <query>")?.to_string()),
            "page" | "p" => {
                let page = required(rest, "page <n>")?;
                let page = page
                    .parse()
                    .map_err(|_| AppError::InvalidAction(format!("not a page number: {page}")))?;
                Action::Page(page)
            }
            "open" | "o" => Action::Open(required(rest, "open <id>")?.trim_start_matches('#').to_string()),
            "inc" | "+" => Action::Servings(ServingsChange::Increase),
            "dec" | "-" => Action::Servings(ServingsChange::Decrease),
            "add" => Action::AddToList,
            "like" => Action::ToggleLike,
            "del" | "delete" => Action::DeleteItem(required(rest, "del <id>")?.to_string()),
            "count" => {
                let args = required(rest, "count <id> <n>")?;
                let (id, value) = args
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| AppError::InvalidAction("usage: count <id> <n>".to_string()))?;
                let value = value.trim();
                let count = value
                    .parse()
                    .map_err(|_| AppError::InvalidAction(format!("not a number: {value}")))?;
                Action::UpdateCount(id.to_string(), count)
            }
            "empty" => Action::EmptyList,
            "new" => Action::AddManualItem,
            "list" => Action::ShowList,
            "likes" => Action::ShowLikes,
            "help" | "?" => Action::Help,
            "quit" | "exit" | "q" => Action::Quit,
            other => return Err(AppError::InvalidAction(format!("unknown command: {other}"))),
        };
        Ok(action)
    }
}
