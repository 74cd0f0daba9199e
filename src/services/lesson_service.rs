use std::sync::Arc;

use crate::{
    api::{LessonApi, UserApi},
    auth::SessionContext,
    errors::AppResult,
    models::domain::{progress::completed_lesson_ids, Lesson},
    services::unlock,
};

/// One lesson row as the lesson list renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonOverview {
    pub lesson: Lesson,
    pub unlocked: bool,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionOverview {
    pub title: Option<String>,
    pub lessons: Vec<LessonOverview>,
}

/// Builds the sectioned lesson list with unlock/completion state derived
/// from the learner's server-side progress.
pub struct LessonService {
    lessons: Arc<dyn LessonApi>,
    users: Arc<dyn UserApi>,
}

impl LessonService {
    pub fn new(lessons: Arc<dyn LessonApi>, users: Arc<dyn UserApi>) -> Self {
        Self { lessons, users }
    }

    pub async fn section_overviews(
        &self,
        ctx: &SessionContext,
    ) -> AppResult<Vec<SectionOverview>> {
        let (sections, profile) = tokio::join!(
            self.lessons.fetch_sections(),
            self.users.fetch_profile(ctx.bearer_token())
        );
        let sections = sections?;
        let profile = profile?;

        let completed = completed_lesson_ids(&profile.progress);
        log::info!(
            "Building overview for {} sections ({} lessons completed)",
            sections.len(),
            completed.len()
        );

        let overviews = sections
            .into_iter()
            .map(|section| {
                let sorted = section.sorted_lessons();
                let lessons = sorted
                    .iter()
                    .map(|lesson| LessonOverview {
                        unlocked: unlock::is_lesson_unlocked(lesson, &sorted, &completed),
                        completed: completed.contains(&lesson.id),
                        lesson: lesson.clone(),
                    })
                    .collect();
                SectionOverview {
                    title: section.title,
                    lessons,
                }
            })
            .collect();

        Ok(overviews)
    }
}
