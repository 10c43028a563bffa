use crate::error::{Error, Result};
use crate::query::{Command, FIND_USAGE, LIST_USAGE};

/// Parse one REPL line. The keyword is matched exactly; everything after the
/// first run of whitespace, trimmed, is the argument.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (keyword, arg) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword {
        ":help" if arg.is_empty() => Ok(Command::Help),
        ":quit" | "exit" if arg.is_empty() => Ok(Command::Quit),
        "find" => {
            if arg.is_empty() {
                return Err(Error::Usage(FIND_USAGE));
            }
            Ok(Command::Find { id: arg.to_string() })
        }
        "listInventory" => {
            if arg.is_empty() {
                return Err(Error::Usage(LIST_USAGE));
            }
            Ok(Command::ListInventory {
                category: arg.to_string(),
            })
        }
        _ => Err(Error::Unsupported(line.to_string())),
    }
}
