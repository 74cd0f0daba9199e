pub mod evaluator;
pub mod lesson_service;
pub mod leveling;
pub mod matching;
pub mod quiz_service;
pub mod sequencer;
pub mod session;
pub mod unlock;
pub mod user_service;

pub use lesson_service::{LessonOverview, LessonService, SectionOverview};
pub use quiz_service::QuizService;
pub use session::{Advance, CompletionRecord, QuizSession, SessionPhase};
pub use user_service::{ProfileView, UserService};
