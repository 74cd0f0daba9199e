use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Question, Quiz};
use crate::models::dto::response::CompletionResponse;
use crate::services::evaluator::ActiveQuestion;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    Completed,
    /// Halted on malformed question data; recoverable, unlike Completed.
    Faulted,
}

/// The record emitted once when the last question is advanced past.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionRecord {
    pub lesson_id: String,
    pub score: u32,
    pub total_questions: u32,
}

/// Result of an `advance` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Next(usize),
    /// The session just completed; submit this record.
    Finished(CompletionRecord),
    /// The session was already complete; nothing to do and nothing to
    /// re-submit.
    AlreadyCompleted,
}

/// Mutable state of one quiz run. Owned exclusively by the active quiz
/// screen and discarded when the learner navigates away.
pub struct QuizSession {
    id: Uuid,
    quiz_id: String,
    quiz: Quiz,
    index: usize,
    score: u32,
    attempted: u32,
    answered: bool,
    phase: SessionPhase,
    fault: Option<String>,
    record_emitted: bool,
    award: Option<CompletionResponse>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Build a session over an already-sequenced quiz.
    pub fn new(quiz_id: impl Into<String>, quiz: Quiz) -> AppResult<Self> {
        if quiz.questions.is_empty() {
            return Err(AppError::ValidationError(
                "Quiz has no questions".to_string(),
            ));
        }

        let quiz_id = quiz_id.into();
        let id = Uuid::new_v4();
        log::info!(
            "Quiz session {} started for quiz {} ({} questions)",
            id,
            quiz_id,
            quiz.questions.len()
        );

        Ok(Self {
            id,
            quiz_id,
            quiz,
            index: 0,
            score: 0,
            attempted: 0,
            answered: false,
            phase: SessionPhase::InProgress,
            fault: None,
            record_emitted: false,
            award: None,
            started_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.index]
    }

    pub fn total_questions(&self) -> u32 {
        self.quiz.questions.len() as u32
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Completion percentage of the locally held score, rounded.
    /// Computable whether or not the XP submission ever succeeds.
    pub fn percentage(&self) -> u32 {
        ((self.score as f64 / self.total_questions() as f64) * 100.0).round() as u32
    }

    /// Set up the evaluator for the current question. A malformed or
    /// unrecognized question halts the session in its recoverable
    /// `Faulted` substate instead of crashing the quiz.
    pub fn activate_current<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> AppResult<ActiveQuestion> {
        if self.phase == SessionPhase::Completed {
            return Err(AppError::StateViolation(
                "Quiz session is already completed".to_string(),
            ));
        }

        match ActiveQuestion::activate(self.current_question(), rng) {
            Ok(active) => Ok(active),
            Err(err) => {
                log::warn!(
                    "Quiz session {} halted at question {}: {}",
                    self.id,
                    self.index,
                    err
                );
                self.phase = SessionPhase::Faulted;
                self.fault = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    /// Return a faulted session to `InProgress` so the caller can retry
    /// or skip past the offending question.
    pub fn recover(&mut self) -> AppResult<()> {
        if self.phase != SessionPhase::Faulted {
            return Err(AppError::StateViolation(
                "Quiz session is not faulted".to_string(),
            ));
        }
        self.phase = SessionPhase::InProgress;
        self.fault = None;
        Ok(())
    }

    /// Record the verdict for the current question. One resolution per
    /// question: answering twice is a contract violation.
    pub fn submit_answer(&mut self, correct: bool) -> AppResult<()> {
        if self.phase != SessionPhase::InProgress {
            return Err(AppError::StateViolation(
                "Quiz session is not in progress".to_string(),
            ));
        }
        if self.answered {
            return Err(AppError::StateViolation(
                "Current question was already answered".to_string(),
            ));
        }

        self.attempted += 1;
        if correct {
            self.score += 1;
        }
        self.answered = true;

        debug_assert!(self.score <= self.attempted);
        debug_assert!(self.attempted <= self.total_questions());
        Ok(())
    }

    /// Move past an answered question. On the last question this
    /// transitions to `Completed` and hands back the completion record
    /// exactly once; calling again afterwards is a no-op so a duplicate
    /// UI event can never double-submit.
    pub fn advance(&mut self) -> AppResult<Advance> {
        match self.phase {
            SessionPhase::Completed => return Ok(Advance::AlreadyCompleted),
            SessionPhase::Faulted => {
                return Err(AppError::StateViolation(
                    "Quiz session is faulted".to_string(),
                ))
            }
            SessionPhase::InProgress => {}
        }
        if !self.answered {
            return Err(AppError::StateViolation(
                "Cannot advance past an unanswered question".to_string(),
            ));
        }

        if self.index + 1 < self.quiz.questions.len() {
            self.index += 1;
            self.answered = false;
            return Ok(Advance::Next(self.index));
        }

        self.phase = SessionPhase::Completed;
        debug_assert!(!self.record_emitted);
        self.record_emitted = true;
        log::info!(
            "Quiz session {} completed with score {}/{}",
            self.id,
            self.score,
            self.total_questions()
        );

        Ok(Advance::Finished(self.completion_record()))
    }

    fn completion_record(&self) -> CompletionRecord {
        CompletionRecord {
            lesson_id: self.quiz.lesson_id.id().to_string(),
            score: self.score,
            total_questions: self.total_questions(),
        }
    }

    /// Store the XP award returned by the backend. At most one award per
    /// session; the guard is what makes completion submission safe to
    /// retry.
    pub fn record_award(&mut self, award: CompletionResponse) -> AppResult<()> {
        if self.phase != SessionPhase::Completed {
            return Err(AppError::StateViolation(
                "Cannot record an award before completion".to_string(),
            ));
        }
        if self.award.is_some() {
            return Err(AppError::StateViolation(
                "Completion award was already recorded".to_string(),
            ));
        }
        self.award = Some(award);
        Ok(())
    }

    pub fn award(&self) -> Option<&CompletionResponse> {
        self.award.as_ref()
    }
}
