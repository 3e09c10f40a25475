use serde::{Deserialize, Serialize};

/// A parsed multiple-choice question.
///
/// Serializes as `{"question": ..., "options": [...]}`, the shape returned
/// by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

/// One labeled option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    /// Verbatim first character of the option line. Empty when the line
    /// held nothing after the correct-answer marker.
    pub letter: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
        }
    }

    /// Letter of the first option flagged correct, scanning in parse order.
    pub fn correct_letter(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.is_correct)
            .map(|option| option.letter.as_str())
    }

    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.is_correct).count()
    }
}

impl QuestionOption {
    pub fn new(letter: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            letter: letter.into(),
            text: text.into(),
            is_correct,
        }
    }
}
