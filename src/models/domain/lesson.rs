use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_id: Option<String>,
}

/// An ordered curriculum unit. `order` is the unlock and sequencing key;
/// ties keep their incoming relative order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub lessons: Vec<Lesson>,
}

impl Section {
    /// Lessons sorted ascending by `order`, stable on ties.
    pub fn sorted_lessons(&self) -> Vec<Lesson> {
        let mut lessons = self.lessons.clone();
        lessons.sort_by_key(|lesson| lesson.order);
        lessons
    }
}
