use ace_core::LessonRoute;
use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{
    AllInterfacesView, AssessmentView, DashboardView, Header, HomeView, LessonView,
    ListeningLessonView, ReadingLessonView, RoadmapView, SpeakingChallengeView, WritingLessonView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/assessment", AssessmentView)] Assessment {},
        #[route("/study-plan", RoadmapView)] StudyPlan {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/all-interfaces", AllInterfacesView)] AllInterfaces {},
        #[route("/reading-lesson/:id", ReadingLessonView)] ReadingLesson { id: u64 },
        #[route("/listening-lesson/:id", ListeningLessonView)] ListeningLesson { id: u64 },
        #[route("/writing-lesson/:id", WritingLessonView)] WritingLesson { id: u64 },
        #[route("/speaking-challenge/:id", SpeakingChallengeView)] SpeakingChallenge { id: u64 },
        #[route("/lesson/:id", LessonView)] Lesson { id: u64 },
}

impl From<LessonRoute> for Route {
    fn from(route: LessonRoute) -> Self {
        let id = route.exercise_id().value();
        match route {
            LessonRoute::Reading(_) => Route::ReadingLesson { id },
            LessonRoute::Listening(_) => Route::ListeningLesson { id },
            LessonRoute::Writing(_) => Route::WritingLesson { id },
            LessonRoute::Speaking(_) => Route::SpeakingChallenge { id },
            LessonRoute::Lesson(_) => Route::Lesson { id },
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_core::model::ExerciseId;

    #[test]
    fn lesson_routes_match_core_paths() {
        let id = ExerciseId::new(12);
        for lesson in [
            LessonRoute::Reading(id),
            LessonRoute::Listening(id),
            LessonRoute::Writing(id),
            LessonRoute::Speaking(id),
            LessonRoute::Lesson(id),
        ] {
            assert_eq!(Route::from(lesson).to_string(), lesson.path());
        }
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
    }
}
