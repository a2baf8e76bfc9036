use std::collections::HashMap;
use std::sync::Arc;

use ace_core::model::{Exercise, ExerciseId, LearningPlan, UserId};
use ace_core::{Roadmap, build_roadmap};
use async_trait::async_trait;

use crate::api_client::ApiClient;
use crate::error::{ApiError, LoadError};

/// Lookups the roadmap needs from the API.
#[async_trait]
pub trait RoadmapSource: Send + Sync {
    /// All plans scheduled for `user_id`, in server order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the plans cannot be fetched.
    async fn learning_plans(&self, user_id: UserId) -> Result<Vec<LearningPlan>, ApiError>;

    /// One exercise by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the exercise cannot be fetched.
    async fn exercise(&self, exercise_id: ExerciseId) -> Result<Exercise, ApiError>;
}

#[async_trait]
impl RoadmapSource for ApiClient {
    async fn learning_plans(&self, user_id: UserId) -> Result<Vec<LearningPlan>, ApiError> {
        ApiClient::learning_plans(self, user_id).await
    }

    async fn exercise(&self, exercise_id: ExerciseId) -> Result<Exercise, ApiError> {
        ApiClient::exercise(self, exercise_id).await
    }
}

/// Loads plans and exercises and derives the roadmap.
#[derive(Clone)]
pub struct RoadmapService {
    source: Arc<dyn RoadmapSource>,
}

impl RoadmapService {
    #[must_use]
    pub fn new(source: Arc<dyn RoadmapSource>) -> Self {
        Self { source }
    }

    /// Build the roadmap for `user_id`.
    ///
    /// Exercises are looked up one at a time, in plan order. An id that
    /// resolved is not fetched again; an id whose lookup failed is logged and
    /// tried again for the next plan that uses it, so only the plans whose
    /// own attempt failed are left without an exercise. An empty roadmap (no
    /// plans) is a successful result.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NotSignedIn` without touching the source when
    /// `user_id` is `None`, and `LoadError::Api` if the plans cannot be
    /// fetched.
    pub async fn load(&self, user_id: Option<UserId>) -> Result<Roadmap, LoadError> {
        let user_id = user_id.ok_or(LoadError::NotSignedIn)?;

        let plans = self.source.learning_plans(user_id).await?;

        let mut exercises: HashMap<ExerciseId, Exercise> = HashMap::new();
        let mut failed = 0_usize;
        for plan in &plans {
            if exercises.contains_key(&plan.exercise_id) {
                continue;
            }
            match self.source.exercise(plan.exercise_id).await {
                Ok(exercise) => {
                    exercises.insert(plan.exercise_id, exercise);
                }
                Err(err) => {
                    failed += 1;
                    tracing::warn!(
                        exercise_id = %plan.exercise_id,
                        plan_id = %plan.plan_id,
                        error = %err,
                        "failed to fetch exercise for roadmap"
                    );
                }
            }
        }

        let roadmap = build_roadmap(plans, &exercises);
        tracing::debug!(
            %user_id,
            days = roadmap.total_days(),
            weeks = roadmap.weeks().len(),
            unresolved = failed,
            "roadmap built"
        );
        Ok(roadmap)
    }
}
