use serde::{Deserialize, Serialize};

use crate::model::ids::{ExerciseId, MaterialId, OptionId, QuestionId};
use crate::model::plan::PlanStatus;

//
// ─── MODALITY ─────────────────────────────────────────────────────────────────
//

/// Skill category of an exercise.
///
/// Selects the lesson page an exercise opens in. Unrecognised values decode
/// as `Other` and open in the generic lesson page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseType {
    Reading,
    Listening,
    Writing,
    Speaking,
    #[serde(other)]
    Other,
}

impl ExerciseType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseType::Reading => "Reading",
            ExerciseType::Listening => "Listening",
            ExerciseType::Writing => "Writing",
            ExerciseType::Speaking => "Speaking",
            ExerciseType::Other => "Other",
        }
    }
}

//
// ─── CONTENT ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialType {
    Text,
    Audio,
    Video,
    #[serde(other)]
    Other,
}

/// Reading passage, audio clip or video attached to an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: MaterialId,
    pub material_type: MaterialType,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: OptionId,
    pub option_label: String,
    pub option_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

//
// ─── EXERCISE ─────────────────────────────────────────────────────────────────
//

/// A content unit of a given modality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub exercise_type: ExerciseType,
    #[serde(default)]
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PlanStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<Material>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
}

impl Exercise {
    /// Label shown for the exercise: its title, else its topic.
    ///
    /// Returns `None` when both are empty.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        [self.title.as_str(), self.topic.as_str()]
            .into_iter()
            .find(|value| !value.is_empty())
    }
}

/// Exercises grouped under one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicExercises {
    pub topic: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}
