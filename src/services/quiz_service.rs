use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::{
    api::QuizApi,
    auth::SessionContext,
    config::Config,
    errors::{AppError, AppResult},
    models::dto::{request::CompleteQuizRequest, response::CompletionResponse},
    services::sequencer,
    services::session::{QuizSession, SessionPhase},
};

/// Orchestrates quiz loading and completion submission around the engine.
pub struct QuizService {
    api: Arc<dyn QuizApi>,
    submit_max_retries: u32,
    submit_retry_base_delay: Duration,
}

impl QuizService {
    pub fn new(api: Arc<dyn QuizApi>, config: &Config) -> Self {
        Self {
            api,
            submit_max_retries: config.submit_max_retries,
            submit_retry_base_delay: config.submit_retry_base_delay(),
        }
    }

    /// Fetch a quiz and open a session over its sequenced questions.
    pub async fn load_session<R: Rng + ?Sized>(
        &self,
        quiz_id: &str,
        rng: &mut R,
    ) -> AppResult<QuizSession> {
        let mut quiz = self.api.fetch_quiz(quiz_id).await?;
        quiz.questions = sequencer::sequence(&quiz.questions, rng);
        QuizSession::new(quiz_id, quiz)
    }

    /// Submit the session's completion record and store the XP award.
    ///
    /// At most one submission ever reaches the backend per session: a
    /// session that already holds an award returns it again without a new
    /// request. Transient network failures are retried with exponential
    /// backoff; on final failure the session stays completed locally and
    /// the error is surfaced as retryable.
    pub async fn submit_completion(
        &self,
        session: &mut QuizSession,
        ctx: &SessionContext,
    ) -> AppResult<CompletionResponse> {
        if session.phase() != SessionPhase::Completed {
            return Err(AppError::StateViolation(
                "Cannot submit an unfinished quiz session".to_string(),
            ));
        }
        if let Some(award) = session.award() {
            log::info!(
                "Quiz session {} already credited; skipping re-submission",
                session.id()
            );
            return Ok(award.clone());
        }

        let request = CompleteQuizRequest {
            user_id: ctx.user_id().to_string(),
            lesson_id: session.quiz().lesson_id.id().to_string(),
            score: session.score(),
            total_questions: session.total_questions(),
        };

        let mut attempt: u32 = 0;
        loop {
            match self
                .api
                .submit_completion(session.quiz_id(), &request)
                .await
            {
                Ok(award) => {
                    session.record_award(award.clone())?;
                    return Ok(award);
                }
                Err(err) if err.is_retryable() && attempt < self.submit_max_retries => {
                    let delay = self.submit_retry_base_delay * 2u32.pow(attempt);
                    attempt += 1;
                    log::warn!(
                        "Completion submission attempt {} for session {} failed ({}); retrying in {:?}",
                        attempt,
                        session.id(),
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    // The local score survives; the caller may retry later.
                    log::error!(
                        "Completion submission for session {} failed: {}",
                        session.id(),
                        err
                    );
                    return Err(err);
                }
            }
        }
    }
}
