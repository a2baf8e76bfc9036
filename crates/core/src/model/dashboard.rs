use serde::{Deserialize, Serialize};

use crate::model::plan::LearningPlan;

/// Headline numbers of `GET /dashboard/{user}/summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub total_score: f64,
    #[serde(default)]
    pub completed_exercises: u32,
    #[serde(default)]
    pub total_exercises: u32,
    #[serde(default)]
    pub study_hours: f64,
}

/// Per-skill completion percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProgress {
    #[serde(default)]
    pub listening: f64,
    #[serde(default)]
    pub reading: f64,
    #[serde(default)]
    pub writing: f64,
    #[serde(default)]
    pub speaking: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentResult {
    pub exercise: String,
    pub score: f64,
}

/// Everything the dashboard page shows, merged from the four dashboard endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub summary: DashboardSummary,
    pub progress: SkillProgress,
    pub today: Vec<LearningPlan>,
    pub recent_results: Vec<RecentResult>,
}

impl DashboardStats {
    /// Share of exercises completed, rounded to a whole percent.
    #[must_use]
    pub fn completion_percentage(&self) -> u8 {
        crate::roadmap::percentage(
            self.summary.completed_exercises as usize,
            self.summary.total_exercises as usize,
        )
    }
}
