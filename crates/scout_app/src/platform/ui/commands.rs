use scout_core::{Msg, SortOrder};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  q <text>        search repository names (empty clears)
  lang <name>     filter by language, `lang -` clears
  sort asc|desc   order by stars
  topic <name>    toggle a topic filter
  topics a,b,c    replace the topic selection (`topics -` clears)
  more            load the next page
  show            print current results
  langs           list suggested languages
  vocab           list selectable topics
  help            this text
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Show,
    Languages,
    Vocabulary,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "q" | "query" => Command::Dispatch(Msg::QueryChanged(rest.to_string())),
        "lang" | "language" => match rest {
            "" => return Err(CommandError::Usage("lang <name> | lang -")),
            "-" => Command::Dispatch(Msg::LanguageChanged(None)),
            name => Command::Dispatch(Msg::LanguageChanged(Some(name.to_string()))),
        },
        "sort" => match SortOrder::parse(rest) {
            Some(order) => Command::Dispatch(Msg::SortChanged(order)),
            None => return Err(CommandError::Usage("sort asc|desc")),
        },
        "topic" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("topic <name>"));
            }
            Command::Dispatch(Msg::TopicToggled(rest.to_string()))
        }
        "topics" => {
            let topics = match rest {
                "" => return Err(CommandError::Usage("topics a,b,c | topics -")),
                "-" => Vec::new(),
                list => list.split(',').map(|t| t.trim().to_string()).collect(),
            };
            Command::Dispatch(Msg::TopicsChanged(topics))
        }
        "more" | "m" => Command::Dispatch(Msg::LoadMoreClicked),
        "show" | "ls" => Command::Show,
        "langs" => Command::Languages,
        "vocab" => Command::Vocabulary,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
