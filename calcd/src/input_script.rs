//! # Input Script Parser
//!
//! Provides a simple scripted input format for deterministic sessions and demos.
//!
//! ## Format
//!
//! Scripts are line-based:
//! - Key runs: `12+3=` (each character is one key press, spaces ignored)
//! - Key names: `Enter`, `Return`, `Escape`, `Esc`
//! - Button names: `clear`, `sign`, `percent`, `decimal`, `equals`,
//!   `add`, `subtract`, `multiply`, `divide`
//! - Quoted strings: `"12.5*2"` (expanded to individual key presses)
//! - Host commands: `:snapshot`, `:quit`
//! - Comments: `# This is a comment`, also after an entry
//!
//! ## Example
//!
//! ```text
//! # 12.5 * -2
//! 12.5*2
//! sign        # flip the second operand
//! Enter
//! :snapshot
//! ```

use crate::commands::{HostCommand, HostCommandError, HostCommandParser};
use calc_core::Action;
use std::collections::VecDeque;
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Invalid key name: {0}")]
    InvalidKeyName(String),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,

    #[error(transparent)]
    InvalidCommand(#[from] HostCommandError),
}

/// A single scripted input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedInput {
    /// A calculator action
    Action(Action),
    /// A host command
    Command(HostCommand),
}

/// Input script
///
/// Parses and provides scripted inputs for deterministic sessions.
#[derive(Debug, Clone)]
pub struct InputScript {
    inputs: VecDeque<ScriptedInput>,
}

impl InputScript {
    /// Creates a new empty input script
    pub fn new() -> Self {
        Self {
            inputs: VecDeque::new(),
        }
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let mut inputs = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let parsed = Self::parse_line(line).map_err(|e| match e {
                InputScriptError::ParseError { .. } => e,
                other => InputScriptError::ParseError {
                    line: line_num + 1,
                    message: other.to_string(),
                },
            })?;
            inputs.extend(parsed);
        }

        if inputs.is_empty() {
            return Err(InputScriptError::EmptyScript);
        }

        Ok(Self { inputs })
    }

    /// Parses a single line of input.
    ///
    /// Blank and comment-only lines yield no inputs.
    pub fn parse_line(line: &str) -> Result<Vec<ScriptedInput>, InputScriptError> {
        let line = line.trim();

        // Host command
        if let Some(command) = line.strip_prefix(':') {
            let command = strip_comment(command);
            let command = HostCommandParser::parse(command)?;
            return Ok(vec![ScriptedInput::Command(command)]);
        }

        // Quoted key string
        if let Some(rest) = line.strip_prefix('"') {
            let Some(end) = rest.find('"') else {
                return Err(InputScriptError::InvalidKeyName(line.to_string()));
            };
            if !strip_comment(&rest[end + 1..]).is_empty() {
                return Err(InputScriptError::InvalidKeyName(line.to_string()));
            }
            return Self::parse_key_run(&rest[..end]);
        }

        let line = strip_comment(line);
        if line.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(action) = Self::parse_name(line) {
            return Ok(vec![ScriptedInput::Action(action)]);
        }

        Self::parse_key_run(line)
    }

    /// Parses a named key or button
    fn parse_name(name: &str) -> Option<Action> {
        match name.to_lowercase().as_str() {
            "enter" | "return" => Some(Action::Evaluate),
            "escape" | "esc" => Some(Action::Clear),
            // Digit buttons are typed as keys
            "digit" => None,
            other => Action::from_button(other, ""),
        }
    }

    /// Parses a run of key characters
    fn parse_key_run(text: &str) -> Result<Vec<ScriptedInput>, InputScriptError> {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Action::from_key(c)
                    .map(ScriptedInput::Action)
                    .ok_or_else(|| InputScriptError::InvalidKeyName(text.to_string()))
            })
            .collect()
    }

    /// Returns the next input, if any
    pub fn next_input(&mut self) -> Option<ScriptedInput> {
        self.inputs.pop_front()
    }

    /// Returns the number of remaining inputs
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Default for InputScript {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_comment(text: &str) -> &str {
    match text.find('#') {
        Some(idx) => text[..idx].trim(),
        None => text.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::Operator;

    #[test]
    fn test_parse_key_run() {
        let mut script = InputScript::from_text("12+3=").unwrap();
        assert_eq!(script.remaining(), 5);
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Action(Action::Digit('1'))
        );
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Action(Action::Digit('2'))
        );
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Action(Action::Operator(Operator::Add))
        );
    }

    #[test]
    fn test_spaces_in_key_run_are_ignored() {
        let script = InputScript::from_text("1 + 2 =").unwrap();
        assert_eq!(script.remaining(), 4);
    }

    #[test]
    fn test_parse_named_keys() {
        let mut script = InputScript::from_text("Enter\nEscape\nsign\nPercent\ndivide").unwrap();
        assert_eq!(script.remaining(), 5);
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Action(Action::Evaluate)
        );
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Action(Action::Clear)
        );
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Action(Action::Negate)
        );
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Action(Action::Percent)
        );
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Action(Action::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_parse_quoted_string() {
        let script = InputScript::from_text(r#""12.5*2"   # comment"#).unwrap();
        assert_eq!(script.remaining(), 6);
    }

    #[test]
    fn test_parse_commands() {
        let mut script = InputScript::from_text("5\n:snapshot\n:quit").unwrap();
        assert_eq!(script.remaining(), 3);
        script.next_input();
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Command(HostCommand::Snapshot)
        );
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Command(HostCommand::Quit)
        );
    }

    #[test]
    fn test_parse_comments() {
        let script = InputScript::from_text("# Comment\n1\n# Another comment\n2 # trailing").unwrap();
        assert_eq!(script.remaining(), 2);
    }

    #[test]
    fn test_parse_empty_lines() {
        let script = InputScript::from_text("1\n\n+\n\n\n2").unwrap();
        assert_eq!(script.remaining(), 3);
    }

    #[test]
    fn test_empty_script_error() {
        let result = InputScript::from_text("");
        assert!(matches!(result, Err(InputScriptError::EmptyScript)));
    }

    #[test]
    fn test_empty_script_with_comments() {
        let result = InputScript::from_text("# Just comments\n# Nothing else");
        assert!(matches!(result, Err(InputScriptError::EmptyScript)));
    }

    #[test]
    fn test_invalid_key_name() {
        let result = InputScript::from_text("1\nhello");
        assert!(matches!(
            result,
            Err(InputScriptError::ParseError { line: 2, .. })
        ));
    }

    #[test]
    fn test_digit_is_not_a_name() {
        assert!(InputScript::parse_line("digit").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let result = InputScript::from_text(":undo");
        assert!(matches!(result, Err(InputScriptError::ParseError { line: 1, .. })));
    }

    #[test]
    fn test_unknown_command_in_line() {
        assert_eq!(
            InputScript::parse_line(":undo"),
            Err(InputScriptError::InvalidCommand(
                HostCommandError::UnknownCommand("undo".to_string())
            ))
        );
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(InputScript::parse_line("\"12").is_err());
    }
}
