//! MCQ text parser.
//!
//! Converts extracted plain text into an ordered list of [`Question`]s.
//! The grammar is line oriented:
//!
//! ```text
//! Q: What is 2+2?
//! A) 3
//! *B) 4
//! C) 5
//! ```
//!
//! A line starting with `Q:` opens a new question and closes the previous
//! one. Every other line inside an open question is handed to an
//! [`OptionGrammar`]. Lines before the first `Q:` are dropped. Parsing never
//! fails; unrecognized input is skipped or yields empty fields.

mod option;

use tracing::{debug, trace};

use crate::models::Question;

pub use option::{
    split_option_line, trim_text, Grammar, OptionGrammar, PositionalGrammar, StrictGrammar,
    CORRECT_MARKER,
};

/// Prefix that starts a new question.
pub const QUESTION_PREFIX: &str = "Q:";

/// Parser state between lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParserState {
    /// No question seen yet.
    #[default]
    Idle,
    /// Options are being collected for this question.
    Open(Question),
}

impl ParserState {
    /// Feeds one trimmed, non-empty line.
    ///
    /// Returns the finished question when `line` opens a new one.
    pub fn step<G: OptionGrammar + ?Sized>(&mut self, line: &str, grammar: &G) -> Option<Question> {
        if let Some(prompt) = line.strip_prefix(QUESTION_PREFIX) {
            let opened = ParserState::Open(Question::new(trim_text(prompt)));
            return match std::mem::replace(self, opened) {
                ParserState::Open(finished) => Some(finished),
                ParserState::Idle => None,
            };
        }

        match self {
            ParserState::Idle => trace!(line, "dropping line before first question"),
            ParserState::Open(question) => match grammar.parse_option(line) {
                Some(option) => question.options.push(option),
                None => trace!(line, "grammar rejected option line"),
            },
        }
        None
    }

    /// Closes the state at end of input, yielding the trailing question.
    pub fn finish(self) -> Option<Question> {
        match self {
            ParserState::Open(question) => Some(question),
            ParserState::Idle => None,
        }
    }
}

/// Parses `text` with the default positional grammar.
pub fn parse(text: &str) -> Vec<Question> {
    parse_with(text, &PositionalGrammar)
}

/// Parses `text`, splitting option lines with `grammar`.
pub fn parse_with<G: OptionGrammar + ?Sized>(text: &str, grammar: &G) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut state = ParserState::default();

    for line in text.lines().map(trim_text).filter(|line| !line.is_empty()) {
        if let Some(finished) = state.step(line, grammar) {
            questions.push(finished);
        }
    }
    questions.extend(state.finish());

    debug!(
        questions = questions.len(),
        options = questions.iter().map(|q| q.options.len()).sum::<usize>(),
        "parsed MCQ text"
    );
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionOption;

    #[test]
    fn test_single_question_with_marked_answer() {
        let questions = parse("Q: 2+2?\nA) 3\n*B) 4\nC) 5\n");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "2+2?");
        assert_eq!(
            questions[0].options,
            vec![
                QuestionOption::new("A", "3", false),
                QuestionOption::new("B", "4", true),
                QuestionOption::new("C", "5", false),
            ]
        );
    }

    #[test]
    fn test_no_question_marker_yields_nothing() {
        assert!(parse("A) 3\n*B) 4\nsome heading\n").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn test_bare_marker_gives_empty_prompt() {
        let questions = parse("Q:\n");
        assert_eq!(questions, vec![Question::new("")]);
    }

    #[test]
    fn test_back_to_back_questions() {
        let questions = parse("Q: first\nQ: second\n");
        assert_eq!(questions, vec![Question::new("first"), Question::new("second")]);
    }

    #[test]
    fn test_multiple_correct_flags_are_kept() {
        let questions = parse("Q: pick\n*A) one\n*B) two\nC) three");
        let flags: Vec<bool> = questions[0].options.iter().map(|o| o.is_correct).collect();
        assert_eq!(flags, vec![true, true, false]);
        assert_eq!(questions[0].correct_letter(), Some("A"));
    }

    #[test]
    fn test_options_before_first_question_are_dropped() {
        let questions = parse("A) orphan\n*B) orphan\nQ: real\nA) kept");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options, vec![QuestionOption::new("A", "kept", false)]);
    }

    #[test]
    fn test_trailing_question_is_finalized() {
        let questions = parse("Q: one\nA) x\nQ: two\nA) y\nB) z");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].options.len(), 2);
    }

    #[test]
    fn test_lines_are_trimmed_and_blank_lines_skipped() {
        let questions = parse("   Q:   spaced   \r\n\r\n   *A)  yes  \r\n");
        assert_eq!(questions[0].text, "spaced");
        assert_eq!(questions[0].options, vec![QuestionOption::new("A", "yes", true)]);
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let questions = parse("\u{FEFF}Q: 2+2?\nA) 3\n*B) 4\n");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "2+2?");
        assert_eq!(questions[0].correct_letter(), Some("B"));
    }

    #[test]
    fn test_order_follows_source() {
        let text = (1..=5)
            .map(|n| format!("Q: q{n}\nA) a"))
            .collect::<Vec<_>>()
            .join("\n");
        let prompts: Vec<String> = parse(&text).into_iter().map(|q| q.text).collect();
        assert_eq!(prompts, vec!["q1", "q2", "q3", "q4", "q5"]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "intro\nQ: a?\n*A) x\nB) y\nQ:\nnoise";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn test_strict_grammar_drops_prose() {
        let text = "Q: capital?\nA) Paris\ncontinued prose\n*B) Rome";
        let lenient = parse(text);
        let strict = parse_with(text, &StrictGrammar);
        assert_eq!(lenient[0].options.len(), 3);
        assert_eq!(strict[0].options.len(), 2);
        assert_eq!(strict[0].correct_letter(), Some("B"));
    }

    #[test]
    fn test_step_transitions() {
        let mut state = ParserState::default();
        assert_eq!(state.step("A) orphan", &PositionalGrammar), None);
        assert_eq!(state, ParserState::Idle);

        assert_eq!(state.step("Q: one", &PositionalGrammar), None);
        assert_eq!(state.step("A) x", &PositionalGrammar), None);

        let finished = state.step("Q: two", &PositionalGrammar).unwrap();
        assert_eq!(finished.text, "one");
        assert_eq!(finished.options.len(), 1);

        assert_eq!(state.finish(), Some(Question::new("two")));
    }

    #[test]
    fn test_finish_idle() {
        assert_eq!(ParserState::Idle.finish(), None);
    }
}
