//! Where a roadmap action sends the user.

use crate::model::{Exercise, ExerciseId, ExerciseType};
use crate::roadmap::{DayData, Roadmap};

/// Lesson page for an exercise, chosen by modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessonRoute {
    Reading(ExerciseId),
    Listening(ExerciseId),
    Writing(ExerciseId),
    Speaking(ExerciseId),
    /// Any modality without a dedicated page.
    Lesson(ExerciseId),
}

impl LessonRoute {
    #[must_use]
    pub fn for_exercise(exercise: &Exercise) -> Self {
        let id = exercise.id;
        match exercise.exercise_type {
            ExerciseType::Reading => LessonRoute::Reading(id),
            ExerciseType::Listening => LessonRoute::Listening(id),
            ExerciseType::Writing => LessonRoute::Writing(id),
            ExerciseType::Speaking => LessonRoute::Speaking(id),
            ExerciseType::Other => LessonRoute::Lesson(id),
        }
    }

    /// Destination for a roadmap day, or `None` if its exercise never resolved.
    #[must_use]
    pub fn for_day(day: &DayData) -> Option<Self> {
        day.exercise.as_ref().map(Self::for_exercise)
    }

    #[must_use]
    pub fn exercise_id(self) -> ExerciseId {
        match self {
            LessonRoute::Reading(id)
            | LessonRoute::Listening(id)
            | LessonRoute::Writing(id)
            | LessonRoute::Speaking(id)
            | LessonRoute::Lesson(id) => id,
        }
    }

    #[must_use]
    pub fn path(self) -> String {
        let prefix = match self {
            LessonRoute::Reading(_) => "reading-lesson",
            LessonRoute::Listening(_) => "listening-lesson",
            LessonRoute::Writing(_) => "writing-lesson",
            LessonRoute::Speaking(_) => "speaking-challenge",
            LessonRoute::Lesson(_) => "lesson",
        };
        format!("/{prefix}/{}", self.exercise_id())
    }
}

/// Target of the "continue learning" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueTarget {
    Lesson(LessonRoute),
    Dashboard,
}

impl ContinueTarget {
    /// Opens the first in-progress day, or the dashboard when nothing is in
    /// progress.
    ///
    /// Returns `None` when the in-progress day has no resolved exercise: the
    /// action does nothing rather than falling through to the dashboard.
    #[must_use]
    pub fn for_roadmap(roadmap: &Roadmap) -> Option<Self> {
        match roadmap.current_day() {
            Some(day) => LessonRoute::for_day(day).map(ContinueTarget::Lesson),
            None => Some(ContinueTarget::Dashboard),
        }
    }
}
