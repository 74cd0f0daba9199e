use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{AppError, AppResult};
use crate::models::domain::WordPair;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchSide {
    Amharic,
    English,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    /// No pending selection.
    Idle,
    /// One side chosen, waiting for the opposite column.
    OneSelected,
    /// All pairs matched; terminal.
    Complete,
}

/// Result of one selection event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Selection recorded; the opposite side is still open.
    Recorded,
    /// Both sides chosen and the pair was correct.
    Matched,
    /// Both sides chosen but the pair was wrong; no penalty, selections
    /// cleared.
    Rejected,
    /// The final pair just matched. Emitted exactly once per game.
    Completed,
}

/// The pair-matching mini-game for one matching question.
///
/// Presentation order of each column is shuffled independently at
/// activation; correctness always goes through the underlying pair data.
/// State is reset in full by building a new game when the active question
/// changes.
#[derive(Debug)]
pub struct MatchingGame {
    pairs: Vec<WordPair>,
    amharic_order: Vec<String>,
    english_order: Vec<String>,
    pending_amharic: Option<String>,
    pending_english: Option<String>,
    matched: HashSet<String>,
    signaled: bool,
}

impl MatchingGame {
    pub fn new<R: Rng + ?Sized>(pairs: &[WordPair], rng: &mut R) -> AppResult<Self> {
        if pairs.is_empty() {
            return Err(AppError::ValidationError(
                "Matching question has no word pairs".to_string(),
            ));
        }

        let mut amharic_seen = HashSet::new();
        let mut english_seen = HashSet::new();
        for pair in pairs {
            if !amharic_seen.insert(pair.amharic.as_str())
                || !english_seen.insert(pair.english.as_str())
            {
                return Err(AppError::ValidationError(format!(
                    "Matching question repeats the word '{}' / '{}'",
                    pair.amharic, pair.english
                )));
            }
        }

        let mut amharic_order: Vec<String> = pairs.iter().map(|p| p.amharic.clone()).collect();
        let mut english_order: Vec<String> = pairs.iter().map(|p| p.english.clone()).collect();
        amharic_order.shuffle(rng);
        english_order.shuffle(rng);

        Ok(Self {
            pairs: pairs.to_vec(),
            amharic_order,
            english_order,
            pending_amharic: None,
            pending_english: None,
            matched: HashSet::new(),
            signaled: false,
        })
    }

    pub fn phase(&self) -> MatchPhase {
        if self.is_complete() {
            MatchPhase::Complete
        } else if self.pending_amharic.is_some() || self.pending_english.is_some() {
            MatchPhase::OneSelected
        } else {
            MatchPhase::Idle
        }
    }

    pub fn is_complete(&self) -> bool {
        self.matched.len() == 2 * self.pairs.len()
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn is_matched(&self, token: &str) -> bool {
        self.matched.contains(token)
    }

    /// Column orders for presentation, already shuffled.
    pub fn amharic_order(&self) -> &[String] {
        &self.amharic_order
    }

    pub fn english_order(&self) -> &[String] {
        &self.english_order
    }

    /// Handle one selection event. Selecting the same side again replaces
    /// the pending choice; completing a pair evaluates it and returns to
    /// idle either way. Matched tokens are unselectable.
    pub fn select(&mut self, side: MatchSide, token: &str) -> AppResult<MatchOutcome> {
        if self.is_complete() {
            return Err(AppError::StateViolation(
                "Matching game is already complete".to_string(),
            ));
        }
        if self.matched.contains(token) {
            return Err(AppError::StateViolation(format!(
                "Token '{}' is already matched",
                token
            )));
        }

        let column = match side {
            MatchSide::Amharic => &self.amharic_order,
            MatchSide::English => &self.english_order,
        };
        if !column.iter().any(|t| t == token) {
            return Err(AppError::StateViolation(format!(
                "Token '{}' is not part of this question",
                token
            )));
        }

        match side {
            MatchSide::Amharic => self.pending_amharic = Some(token.to_string()),
            MatchSide::English => self.pending_english = Some(token.to_string()),
        }

        let (amharic, english) = match (&self.pending_amharic, &self.pending_english) {
            (Some(a), Some(e)) => (a.clone(), e.clone()),
            _ => return Ok(MatchOutcome::Recorded),
        };

        // Both sides chosen: evaluate against the pairing data and clear
        // the pending selections no matter the outcome.
        self.pending_amharic = None;
        self.pending_english = None;

        let is_pair = self
            .pairs
            .iter()
            .any(|pair| pair.amharic == amharic && pair.english == english);

        if !is_pair {
            return Ok(MatchOutcome::Rejected);
        }

        self.matched.insert(amharic);
        self.matched.insert(english);

        if self.is_complete() && !self.signaled {
            self.signaled = true;
            return Ok(MatchOutcome::Completed);
        }

        Ok(MatchOutcome::Matched)
    }
}
