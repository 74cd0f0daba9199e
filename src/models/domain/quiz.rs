use serde::{Deserialize, Serialize};

use crate::models::domain::question::Question;

/// Lesson reference on a fetched quiz. The backend sometimes populates the
/// reference into an embedded document, sometimes sends the raw id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LessonRef {
    Id(String),
    Embedded(EmbeddedLesson),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmbeddedLesson {
    #[serde(rename = "_id")]
    pub id: String,
}

impl LessonRef {
    pub fn id(&self) -> &str {
        match self {
            LessonRef::Id(id) => id,
            LessonRef::Embedded(lesson) => &lesson.id,
        }
    }
}

/// A quiz as fetched from the backend. Immutable once loaded; sequencing
/// produces a new ordered question list rather than reordering in place.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub lesson_id: LessonRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_title: Option<String>,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn title(&self) -> &str {
        self.lesson_title.as_deref().unwrap_or("Quiz")
    }
}
