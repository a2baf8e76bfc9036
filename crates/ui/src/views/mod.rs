mod dashboard;
mod header;
mod home;
mod lesson;
mod roadmap;
mod state;

pub use dashboard::DashboardView;
pub use header::Header;
pub use home::{AllInterfacesView, AssessmentView, HomeView};
pub use lesson::{
    LessonView, ListeningLessonView, ReadingLessonView, SpeakingChallengeView, WritingLessonView,
};
pub use roadmap::RoadmapView;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
