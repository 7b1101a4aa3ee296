//! # Display Renderer
//!
//! Turns engine state into the three display lines: history, primary
//! display, status.
//!
//! ## Philosophy
//!
//! - Engine entries stay raw; grouping is applied only here
//! - Redraws on revision change

use calc_core::{number::parse_operand, CalculatorEngine, ERROR_MARKER};

/// One rendered display state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    pub history: String,
    pub display: String,
    pub status: String,
    pub revision: u64,
}

/// Display renderer
pub struct DisplayRenderer {
    thousands_separator: String,
    show_history: bool,
    /// Last rendered revision (to detect changes)
    last_revision: Option<u64>,
}

impl DisplayRenderer {
    pub fn new(thousands_separator: impl Into<String>, show_history: bool) -> Self {
        Self {
            thousands_separator: thousands_separator.into(),
            show_history,
            last_revision: None,
        }
    }

    /// Formats an entry for display.
    ///
    /// The integer part is grouped, the fractional part is kept as typed.
    /// Anything that is not a finite number renders as the error marker.
    pub fn format_number(&self, value: &str) -> String {
        if parse_operand(value).is_err() {
            return ERROR_MARKER.to_string();
        }

        let (integer, fraction) = match value.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (value, None),
        };
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", integer),
        };
        let digits = if digits.is_empty() { "0" } else { digits };

        let mut out = String::from(sign);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(&self.thousands_separator);
            }
            out.push(ch);
        }
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Builds the frame for the engine's current state
    pub fn frame(&self, engine: &CalculatorEngine) -> DisplayFrame {
        let history = match (engine.pending_value(), engine.pending_operator()) {
            (Some(value), Some(op)) => format!("{} {}", self.format_number(value), op.symbol()),
            _ => String::from("0"),
        };

        DisplayFrame {
            history,
            display: self.format_number(engine.current_entry()),
            status: engine.status().as_str().to_string(),
            revision: engine.revision(),
        }
    }

    /// Checks if a redraw is needed based on revision changes
    pub fn needs_redraw(&self, engine: &CalculatorEngine) -> bool {
        self.last_revision != Some(engine.revision())
    }

    /// Renders the current state and records its revision
    pub fn render(&mut self, engine: &CalculatorEngine) -> String {
        let frame = self.frame(engine);
        self.last_revision = Some(frame.revision);

        let mut output = String::new();
        if self.show_history {
            output.push_str(&format!("  {}\n", frame.history));
        }
        output.push_str(&format!("> {}\n", frame.display));
        output.push_str(&format!("  [{}]\n", frame.status));
        output
    }
}

impl Default for DisplayRenderer {
    fn default() -> Self {
        Self::new(",", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{Action, Operator};

    fn engine_after(keys: &str) -> CalculatorEngine {
        let mut engine = CalculatorEngine::new();
        for ch in keys.chars() {
            if let Some(action) = Action::from_key(ch) {
                engine.apply(action);
            }
        }
        engine
    }

    #[test]
    fn test_grouping() {
        let renderer = DisplayRenderer::default();
        assert_eq!(renderer.format_number("0"), "0");
        assert_eq!(renderer.format_number("999"), "999");
        assert_eq!(renderer.format_number("1000"), "1,000");
        assert_eq!(renderer.format_number("1234567.891"), "1,234,567.891");
        assert_eq!(renderer.format_number("-1234.5"), "-1,234.5");
        assert_eq!(renderer.format_number("-0.5"), "-0.5");
    }

    #[test]
    fn test_partial_entries_keep_point() {
        let renderer = DisplayRenderer::default();
        assert_eq!(renderer.format_number("1000."), "1,000.");
        assert_eq!(renderer.format_number("0.00"), "0.00");
    }

    #[test]
    fn test_error_marker() {
        let renderer = DisplayRenderer::default();
        assert_eq!(renderer.format_number("Error"), "Error");
        assert_eq!(renderer.format_number("inf"), "Error");
    }

    #[test]
    fn test_custom_separator() {
        let renderer = DisplayRenderer::new(" ", true);
        assert_eq!(renderer.format_number("12345678"), "12 345 678");
    }

    #[test]
    fn test_frame_history() {
        let renderer = DisplayRenderer::default();
        let engine = engine_after("1234+");
        let frame = renderer.frame(&engine);
        assert_eq!(frame.history, "1,234 +");
        assert_eq!(frame.display, "1,234");
        assert_eq!(frame.status, "Operator selected");

        let frame = renderer.frame(&engine_after("12"));
        assert_eq!(frame.history, "0");
    }

    #[test]
    fn test_frame_for_every_operator_symbol() {
        let renderer = DisplayRenderer::default();
        let mut engine = engine_after("8");
        engine.choose_operator(Operator::Divide);
        assert_eq!(renderer.frame(&engine).history, "8 ÷");
    }

    #[test]
    fn test_needs_redraw() {
        let mut renderer = DisplayRenderer::default();
        let mut engine = CalculatorEngine::new();
        assert!(renderer.needs_redraw(&engine));

        renderer.render(&engine);
        assert!(!renderer.needs_redraw(&engine));

        engine.digit('4');
        assert!(renderer.needs_redraw(&engine));
    }

    #[test]
    fn test_render_layout() {
        let mut renderer = DisplayRenderer::default();
        let output = renderer.render(&engine_after("5+3="));
        assert_eq!(output, "  0\n> 8\n  [Result]\n");

        let mut renderer = DisplayRenderer::new(",", false);
        let output = renderer.render(&engine_after("5+3="));
        assert_eq!(output, "> 8\n  [Result]\n");
    }
}
