use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Question-type discriminants as they appear on the wire.
/// Values outside the five known kinds deserialize to `Unknown` so a bad
/// payload never aborts quiz loading; the evaluator rejects them later.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum QuestionType {
    #[serde(rename = "wordIntroduction")]
    WordIntroduction,
    #[serde(rename = "wordLearning")]
    WordLearning,
    #[serde(rename = "multipleChoice")]
    MultipleChoice,
    #[serde(rename = "sentenceUse")]
    SentenceUse,
    #[serde(rename = "matching")]
    Matching,
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// One vocabulary pair. Correctness in the matching game is defined by the
/// Amharic+English association, never by presentation order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordPair {
    #[serde(rename = "Amharic")]
    pub amharic: String,
    #[serde(rename = "English")]
    pub english: String,
    #[serde(rename = "Pronunciation", default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(rename = "ExampleSentence", default, skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
}

/// Choice options arrive as strings or bare numbers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ChoiceOption {
    Text(String),
    Number(i64),
}

impl fmt::Display for ChoiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceOption::Text(text) => write!(f, "{}", text),
            ChoiceOption::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Option payload shape depends on the question type: plain choices for
/// multipleChoice/sentenceUse, word pairs for the vocabulary types.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum QuestionOptions {
    Pairs(Vec<WordPair>),
    Choices(Vec<ChoiceOption>),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub question_type: QuestionType,
    pub question_text: String,
    #[serde(default)]
    pub options: Option<QuestionOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<ChoiceOption>,
    // Display-only context sentence carried by sentenceUse questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
}

impl Question {
    pub fn choices(&self) -> AppResult<&[ChoiceOption]> {
        match &self.options {
            Some(QuestionOptions::Choices(choices)) if !choices.is_empty() => Ok(choices),
            _ => Err(AppError::ValidationError(format!(
                "Question '{}' is missing its answer options",
                self.id
            ))),
        }
    }

    pub fn pairs(&self) -> AppResult<&[WordPair]> {
        match &self.options {
            Some(QuestionOptions::Pairs(pairs)) if !pairs.is_empty() => Ok(pairs),
            _ => Err(AppError::ValidationError(format!(
                "Question '{}' is missing its word pairs",
                self.id
            ))),
        }
    }

    pub fn required_correct_answer(&self) -> AppResult<&ChoiceOption> {
        self.correct_answer.as_ref().ok_or_else(|| {
            AppError::ValidationError(format!(
                "Question '{}' has no correct answer defined",
                self.id
            ))
        })
    }
}
