//! # Host Control Commands
//!
//! Lines starting with `:` are host commands rather than calculator keys.
//!
//! ## Command Set
//!
//! - `snapshot` - Print the calculator snapshot as JSON
//! - `settings` - Print the effective settings as JSON
//! - `help` - Print the key map
//! - `quit` - Exit the host

use thiserror::Error;

/// Host command error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostCommandError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Host commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Print the calculator snapshot
    Snapshot,

    /// Print the effective settings
    Settings,

    /// Print the key map
    Help,

    /// Quit the host
    Quit,
}

/// Host command parser
pub struct HostCommandParser;

impl HostCommandParser {
    /// Parses a command string (without the leading `:`)
    pub fn parse(input: &str) -> Result<HostCommand, HostCommandError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(HostCommandError::InvalidCommand(
                "Empty command".to_string(),
            ));
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        if parts.len() > 1 {
            return Err(HostCommandError::InvalidCommand(format!(
                "{} takes no arguments",
                cmd
            )));
        }

        match cmd.as_str() {
            "snapshot" | "snap" => Ok(HostCommand::Snapshot),
            "settings" => Ok(HostCommand::Settings),
            "help" | "?" => Ok(HostCommand::Help),
            "quit" | "exit" | "q" => Ok(HostCommand::Quit),
            _ => Err(HostCommandError::UnknownCommand(cmd)),
        }
    }
}

/// Key map shown by the `help` command
pub const HELP_TEXT: &str = "\
keys:     0-9 digits, . decimal point, + - * / operators, = evaluate, % percent
buttons:  clear, sign, percent, decimal, add, subtract, multiply, divide, equals
keys by name: Enter (evaluate), Escape (clear)
commands: :snapshot, :settings, :help, :quit
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(HostCommandParser::parse("snapshot").unwrap(), HostCommand::Snapshot);
        assert_eq!(HostCommandParser::parse("snap").unwrap(), HostCommand::Snapshot);
        assert_eq!(HostCommandParser::parse("settings").unwrap(), HostCommand::Settings);
        assert_eq!(HostCommandParser::parse("help").unwrap(), HostCommand::Help);
        assert_eq!(HostCommandParser::parse("  QUIT ").unwrap(), HostCommand::Quit);
        assert_eq!(HostCommandParser::parse("exit").unwrap(), HostCommand::Quit);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            HostCommandParser::parse("   "),
            Err(HostCommandError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            HostCommandParser::parse("undo"),
            Err(HostCommandError::UnknownCommand("undo".to_string()))
        );
    }

    #[test]
    fn test_parse_extra_arguments() {
        assert!(matches!(
            HostCommandParser::parse("quit now"),
            Err(HostCommandError::InvalidCommand(_))
        ));
    }
}
