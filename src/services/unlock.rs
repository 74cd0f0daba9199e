use std::collections::HashSet;

use crate::models::domain::Lesson;

/// Whether a lesson may be attempted, given its section's lessons and the
/// learner's completed-lesson set.
///
/// Progression is strictly linear within a section: sort by `order`, count
/// the completed lessons, and a lesson at sorted position `p` is unlocked
/// iff `p <= completed_in_section`. Position 0 is therefore always open.
/// Sections are evaluated independently of each other.
pub fn is_lesson_unlocked(
    lesson: &Lesson,
    section_lessons: &[Lesson],
    completed_ids: &HashSet<String>,
) -> bool {
    if section_lessons.is_empty() {
        return false;
    }

    let mut sorted: Vec<&Lesson> = section_lessons.iter().collect();
    sorted.sort_by_key(|l| l.order);

    let completed_in_section = sorted
        .iter()
        .filter(|l| completed_ids.contains(&l.id))
        .count();

    match sorted.iter().position(|l| l.id == lesson.id) {
        Some(position) => position <= completed_in_section,
        // A lesson outside its own section list is never unlocked.
        None => false,
    }
}
