pub mod lesson;
pub mod level;
pub mod progress;
pub mod question;
pub mod quiz;
pub mod user;
pub use lesson::{Lesson, Section};
pub use level::LevelInfo;
pub use progress::LessonProgressRecord;
pub use question::{ChoiceOption, Question, QuestionOptions, QuestionType, WordPair};
pub use quiz::Quiz;
pub use user::{LeaderboardEntry, UserProfile};
