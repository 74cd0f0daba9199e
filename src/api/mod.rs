pub mod http;
pub mod lesson_api;
pub mod quiz_api;
pub mod user_api;

pub use http::ApiConnection;
pub use lesson_api::{HttpLessonApi, LessonApi};
pub use quiz_api::{HttpQuizApi, QuizApi};
pub use user_api::{HttpUserApi, UserApi};
