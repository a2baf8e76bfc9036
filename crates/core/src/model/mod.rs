mod badge;
mod dashboard;
mod exercise;
mod ids;
mod plan;
mod submission;
mod user;

pub use badge::Badge;
pub use dashboard::{DashboardStats, DashboardSummary, RecentResult, SkillProgress};
pub use exercise::{
    AnswerOption, Exercise, ExerciseType, Material, MaterialType, Question, TopicExercises,
};
pub use ids::{
    BadgeId, ExerciseId, MaterialId, OptionId, ParseIdError, PlanId, QuestionId, SubmissionId,
    UserId,
};
pub use plan::{LearningPlan, PlanStatus};
pub use submission::{AnswerSelection, NewSubmission, Submission};
pub use user::{Credentials, LoginGrant, Registration, User};
