use std::path::PathBuf;
use std::str::FromStr;

use crate::api::error;

pub const USAGE: &str = "\
Commands:
  open <path>            pick an image file
  drop <path> [path...]  drop files (only the first is used)
  upload                 upload the selected card
  clear                  discard the selection
  search [text]          search the directory (empty clears)
  page <n> | next | prev navigate the directory
  refresh                reload the directory
  show                   print both widgets
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(PathBuf),
    Drop(Vec<PathBuf>),
    Upload,
    Clear,
    Search(String),
    Page(u32),
    Next,
    Prev,
    Refresh,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = error::SystemError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "open" if !rest.is_empty() => Command::Open(PathBuf::from(rest)),
            "drop" if !rest.is_empty() => {
                Command::Drop(rest.split_whitespace().map(PathBuf::from).collect())
            }
            "upload" => Command::Upload,
            "clear" => Command::Clear,
            "search" => Command::Search(rest.to_string()),
            "page" => {
                let page = rest
                    .parse::<u32>()
                    .map_err(|_| error::SystemError::bad_request("page expects a number"))?;
                Command::Page(page)
            }
            "next" => Command::Next,
            "prev" => Command::Prev,
            "refresh" => Command::Refresh,
            "show" | "" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "open" | "drop" => {
                return Err(error::SystemError::bad_request(format!("{name} expects a path")))
            }
            other => {
                return Err(error::SystemError::bad_request(format!("Unknown command: {other}")))
            }
        };
        Ok(command)
    }
}
