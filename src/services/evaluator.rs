use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Question, QuestionType};
use crate::services::matching::{MatchOutcome, MatchSide, MatchingGame};

/// A discrete learner action against the active question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LearnerAction {
    /// "Mark as complete" on an introduction card.
    Acknowledge,
    /// Pick one presented option (multipleChoice / sentenceUse).
    SelectOption(String),
    /// Pick one matching-column item.
    SelectMatchItem { side: MatchSide, token: String },
}

/// Outcome of evaluating one learner action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The question is resolved by this action.
    Resolved { correct: bool },
    /// Action consumed, question still open (matching mid-game).
    Pending,
    /// Input arrived after resolution; ignored, not an error.
    AlreadyResolved,
}

/// Selection state for a choice-style question. The presented order is
/// fixed at activation; for multipleChoice it is shuffled, for sentenceUse
/// it stays as authored.
#[derive(Debug)]
pub struct ChoiceState {
    presented: Vec<String>,
    correct_answer: String,
    selected: Option<String>,
}

impl ChoiceState {
    fn activate<R: Rng + ?Sized>(
        question: &Question,
        shuffle: bool,
        rng: &mut R,
    ) -> AppResult<Self> {
        let mut presented: Vec<String> = question
            .choices()?
            .iter()
            .map(|choice| choice.to_string())
            .collect();
        let correct_answer = question.required_correct_answer()?.to_string();

        if shuffle {
            presented.shuffle(rng);
        }

        Ok(Self {
            presented,
            correct_answer,
            selected: None,
        })
    }

    fn select(&mut self, option: &str) -> AppResult<Verdict> {
        if self.selected.is_some() {
            return Ok(Verdict::AlreadyResolved);
        }
        if !self.presented.iter().any(|p| p == option) {
            return Err(AppError::StateViolation(format!(
                "Option '{}' was not presented",
                option
            )));
        }

        self.selected = Some(option.to_string());
        Ok(Verdict::Resolved {
            correct: option == self.correct_answer,
        })
    }
}

/// Per-question evaluation state, built fresh each time a question becomes
/// the active one and dropped when the session moves on.
#[derive(Debug)]
pub enum ActiveQuestion {
    Introduction { acknowledged: bool },
    Learning { resolved: bool },
    MultipleChoice(ChoiceState),
    SentenceUse(ChoiceState),
    Matching(MatchingGame),
}

impl ActiveQuestion {
    /// Validate the question payload and set up type-specific state.
    /// Presentation shuffles here are independent of quiz sequencing.
    pub fn activate<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> AppResult<Self> {
        match question.question_type {
            QuestionType::WordIntroduction => {
                question.pairs()?;
                Ok(ActiveQuestion::Introduction {
                    acknowledged: false,
                })
            }
            QuestionType::WordLearning => {
                question.pairs()?;
                Ok(ActiveQuestion::Learning { resolved: false })
            }
            QuestionType::MultipleChoice => Ok(ActiveQuestion::MultipleChoice(
                ChoiceState::activate(question, true, rng)?,
            )),
            QuestionType::SentenceUse => Ok(ActiveQuestion::SentenceUse(ChoiceState::activate(
                question, false, rng,
            )?)),
            QuestionType::Matching => Ok(ActiveQuestion::Matching(MatchingGame::new(
                question.pairs()?,
                rng,
            )?)),
            QuestionType::Unknown => Err(AppError::UnrecognizedType(format!(
                "Question '{}' has a question type this client does not know",
                question.id
            ))),
        }
    }

    /// Hook fired when the question is first shown. Word-learning cards
    /// are timed exposure, not a test, so they resolve immediately.
    pub fn on_present(&mut self) -> Option<Verdict> {
        match self {
            ActiveQuestion::Learning { resolved } if !*resolved => {
                *resolved = true;
                Some(Verdict::Resolved { correct: true })
            }
            _ => None,
        }
    }

    pub fn evaluate(&mut self, action: &LearnerAction) -> AppResult<Verdict> {
        match (self, action) {
            (ActiveQuestion::Introduction { acknowledged }, LearnerAction::Acknowledge) => {
                // Exposition, not assessment: acknowledging again simply
                // re-signals resolution.
                *acknowledged = true;
                Ok(Verdict::Resolved { correct: true })
            }
            (ActiveQuestion::Learning { resolved }, LearnerAction::Acknowledge) => {
                if *resolved {
                    Ok(Verdict::AlreadyResolved)
                } else {
                    *resolved = true;
                    Ok(Verdict::Resolved { correct: true })
                }
            }
            (ActiveQuestion::MultipleChoice(state), LearnerAction::SelectOption(option))
            | (ActiveQuestion::SentenceUse(state), LearnerAction::SelectOption(option)) => {
                state.select(option)
            }
            (ActiveQuestion::Matching(game), LearnerAction::SelectMatchItem { side, token }) => {
                if game.is_complete() {
                    return Ok(Verdict::AlreadyResolved);
                }
                match game.select(*side, token)? {
                    // Matching has no fail outcome: wrong guesses just
                    // leave the game unresolved.
                    MatchOutcome::Completed => Ok(Verdict::Resolved { correct: true }),
                    MatchOutcome::Recorded | MatchOutcome::Matched | MatchOutcome::Rejected => {
                        Ok(Verdict::Pending)
                    }
                }
            }
            _ => Err(AppError::StateViolation(
                "Learner action does not apply to the active question type".to_string(),
            )),
        }
    }

    pub fn is_resolved(&self) -> bool {
        match self {
            ActiveQuestion::Introduction { acknowledged } => *acknowledged,
            ActiveQuestion::Learning { resolved } => *resolved,
            ActiveQuestion::MultipleChoice(state) | ActiveQuestion::SentenceUse(state) => {
                state.selected.is_some()
            }
            ActiveQuestion::Matching(game) => game.is_complete(),
        }
    }

    /// The options as the learner sees them, for choice-style questions.
    pub fn presented_options(&self) -> Option<&[String]> {
        match self {
            ActiveQuestion::MultipleChoice(state) | ActiveQuestion::SentenceUse(state) => {
                Some(&state.presented)
            }
            _ => None,
        }
    }
}
