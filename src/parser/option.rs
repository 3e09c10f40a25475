//! Option-line grammars.
//!
//! An option line is split positionally: an optional leading correct-answer
//! marker, one label character, one separator character (not checked), and
//! the remaining text. Grammars differ only in which lines they accept.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::QuestionOption;

/// Leading character that flags an option as the correct answer.
pub const CORRECT_MARKER: char = '*';

/// Labels accepted by [`StrictGrammar`], each followed by `)`.
const STRICT_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Trims whitespace and byte-order marks from both ends of `text`.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Turns a trimmed, non-empty line inside an open question into an option.
///
/// Returning `None` drops the line.
pub trait OptionGrammar {
    fn parse_option(&self, line: &str) -> Option<QuestionOption>;
}

/// Splits an option line by fixed offsets.
///
/// Never fails: a line too short for a label or text yields empty fields.
pub fn split_option_line(line: &str) -> QuestionOption {
    let (is_correct, rest) = match line.strip_prefix(CORRECT_MARKER) {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let mut chars = rest.chars();
    let letter = chars.next().map(String::from).unwrap_or_default();
    // Separator, typically ')'.
    chars.next();

    QuestionOption {
        letter,
        text: trim_text(chars.as_str()).to_string(),
        is_correct,
    }
}

/// Accepts every line, splitting it with [`split_option_line`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalGrammar;

impl OptionGrammar for PositionalGrammar {
    fn parse_option(&self, line: &str) -> Option<QuestionOption> {
        Some(split_option_line(line))
    }
}

/// Accepts only marked lines or lines starting with `A)` through `D)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictGrammar;

impl StrictGrammar {
    fn accepts(line: &str) -> bool {
        if line.starts_with(CORRECT_MARKER) {
            return true;
        }
        let mut chars = line.chars();
        matches!(
            (chars.next(), chars.next()),
            (Some(label), Some(')')) if STRICT_LABELS.contains(&label)
        )
    }
}

impl OptionGrammar for StrictGrammar {
    fn parse_option(&self, line: &str) -> Option<QuestionOption> {
        Self::accepts(line).then(|| split_option_line(line))
    }
}

/// Grammar selectable from the command line and server configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    #[default]
    Positional,
    Strict,
}

impl OptionGrammar for Grammar {
    fn parse_option(&self, line: &str) -> Option<QuestionOption> {
        match self {
            Grammar::Positional => PositionalGrammar.parse_option(line),
            Grammar::Strict => StrictGrammar.parse_option(line),
        }
    }
}
