use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    api::http::ApiConnection,
    errors::AppResult,
    models::{
        domain::Quiz,
        dto::{request::CompleteQuizRequest, response::CompletionResponse},
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizApi: Send + Sync {
    async fn fetch_quiz(&self, quiz_id: &str) -> AppResult<Quiz>;
    async fn submit_completion(
        &self,
        quiz_id: &str,
        request: &CompleteQuizRequest,
    ) -> AppResult<CompletionResponse>;
}

pub struct HttpQuizApi {
    conn: ApiConnection,
}

impl HttpQuizApi {
    pub fn new(conn: ApiConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn fetch_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        log::info!("Fetching quiz {}", quiz_id);
        self.conn
            .get_json(&format!("quiz-completion/{}", quiz_id), None)
            .await
    }

    async fn submit_completion(
        &self,
        quiz_id: &str,
        request: &CompleteQuizRequest,
    ) -> AppResult<CompletionResponse> {
        log::info!(
            "Submitting completion for quiz {} (score {}/{})",
            quiz_id,
            request.score,
            request.total_questions
        );
        self.conn
            .post_json(
                &format!("quiz-completion/{}/complete", quiz_id),
                request,
                None,
            )
            .await
    }
}
