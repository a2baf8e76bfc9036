use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{ExerciseId, PlanId};
use crate::time::wire_timestamp;

/// Lifecycle of a scheduled exercise (and of an exercise itself).
///
/// Values the client does not recognise decode as `Unknown` instead of
/// failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanStatus {
    Pending,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

/// A scheduled occurrence of an exercise for one user.
///
/// Owned by the remote service; the client only ever holds a request-scoped copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub plan_id: PlanId,
    pub exercise_id: ExerciseId,
    pub status: PlanStatus,
    #[serde(with = "wire_timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "wire_timestamp")]
    pub end_time: DateTime<Utc>,
}
