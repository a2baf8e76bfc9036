use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{ExerciseId, OptionId, QuestionId, SubmissionId, UserId};
use crate::time::wire_timestamp;

/// A graded attempt at an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: SubmissionId,
    pub score: f64,
    pub is_completed: bool,
    #[serde(with = "wire_timestamp")]
    pub submitted_at: DateTime<Utc>,
}

/// One chosen option for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSelection {
    pub question_id: QuestionId,
    pub option_id: OptionId,
}

/// Body of `POST /submissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
    pub user_id: UserId,
    pub exercise_id: ExerciseId,
    pub answers: Vec<AnswerSelection>,
}
