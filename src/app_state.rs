use std::sync::Arc;

use crate::{
    api::{ApiConnection, HttpLessonApi, HttpQuizApi, HttpUserApi},
    config::Config,
    errors::AppResult,
    services::{LessonService, QuizService, UserService},
};

/// Wired-up client: one HTTP connection shared by every gateway, one
/// service per view family.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub lesson_service: Arc<LessonService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let conn = ApiConnection::connect(&config)?;

        let user_api = Arc::new(HttpUserApi::new(conn.clone()));
        let user_service = Arc::new(UserService::new(user_api.clone()));

        let quiz_api = Arc::new(HttpQuizApi::new(conn.clone()));
        let quiz_service = Arc::new(QuizService::new(quiz_api, &config));

        let lesson_api = Arc::new(HttpLessonApi::new(conn));
        let lesson_service = Arc::new(LessonService::new(lesson_api, user_api));

        Ok(Self {
            user_service,
            quiz_service,
            lesson_service,
            config: Arc::new(config),
        })
    }
}
