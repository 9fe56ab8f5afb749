use stories_core::ItemId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the pending search text.
    Type(String),
    /// Submit the pending search text.
    Submit,
    /// `Type` followed by `Submit`.
    Search(String),
    Remove(ItemId),
    /// Only show items whose title contains the text; empty clears it.
    Filter(String),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
commands:
  type <text>     edit the search input without searching
  submit          search for the current input
  search <text>   type and submit in one step
  remove <id>     dismiss a story
  filter [text]   show only stories whose title contains text
  show            redraw the list
  quit            leave";

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        // Typing may legitimately clear the input.
        "type" => Ok(Command::Type(rest.to_owned())),
        "submit" => Ok(Command::Submit),
        "search" => Ok(Command::Search(required(rest, "search")?.to_owned())),
        "remove" | "rm" => Ok(Command::Remove(ItemId::from(required(rest, "remove")?))),
        "filter" => Ok(Command::Filter(rest.to_owned())),
        "" | "show" | "ls" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(word.to_owned())),
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}
