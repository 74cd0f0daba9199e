use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Server-of-record completion state for one lesson. The client only ever
/// reads these; mutating progress is the backend's job.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgressRecord {
    pub lesson_id: String,
    pub completed: bool,
}

/// Derive the set of completed lesson ids from raw progress records.
pub fn completed_lesson_ids(records: &[LessonProgressRecord]) -> HashSet<String> {
    records
        .iter()
        .filter(|record| record.completed)
        .map(|record| record.lesson_id.clone())
        .collect()
}
