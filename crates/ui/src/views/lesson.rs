use ace_core::model::{Exercise, ExerciseId};
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct LessonData {
    title: String,
    kind: &'static str,
    description: Option<String>,
    question_count: usize,
}

impl From<Exercise> for LessonData {
    fn from(exercise: Exercise) -> Self {
        Self {
            title: exercise.display_name().unwrap_or_default().to_string(),
            kind: exercise.exercise_type.as_str(),
            description: exercise.description,
            question_count: exercise.questions.map_or(0, |q| q.len()),
        }
    }
}

#[component]
fn LessonPage(heading: &'static str, id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services();
    let exercise_id = ExerciseId::new(id);

    let resource = use_resource(move || {
        let services = services.clone();
        async move {
            let exercise = services
                .load_exercise(exercise_id)
                .await
                .map_err(ViewError::from)?;
            Ok::<_, ViewError>(LessonData::from(exercise))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page lesson",
            h2 { "{heading}" }
            p { class: "muted", "Bài tập #{id}" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Đang tải..." }
                },
                ViewState::Error(_) => rsx! {
                    p { class: "notice notice--error", "Không thể tải bài học." }
                },
                ViewState::Ready(data) => rsx! {
                    section { class: "card",
                        h3 { "{data.title}" }
                        span { class: "badge", "{data.kind}" }
                        if let Some(description) = &data.description {
                            p { "{description}" }
                        }
                        p { class: "muted", "{data.question_count} câu hỏi" }
                    }
                },
            }

            Link { class: "btn btn-ghost", to: Route::StudyPlan {}, "Quay lại lộ trình" }
        }
    }
}

#[component]
pub fn ReadingLessonView(id: u64) -> Element {
    rsx! { LessonPage { heading: "Bài đọc", id } }
}

#[component]
pub fn ListeningLessonView(id: u64) -> Element {
    rsx! { LessonPage { heading: "Bài nghe", id } }
}

#[component]
pub fn WritingLessonView(id: u64) -> Element {
    rsx! { LessonPage { heading: "Bài viết", id } }
}

#[component]
pub fn SpeakingChallengeView(id: u64) -> Element {
    rsx! { LessonPage { heading: "Thử thách nói", id } }
}

#[component]
pub fn LessonView(id: u64) -> Element {
    rsx! { LessonPage { heading: "Bài học", id } }
}
