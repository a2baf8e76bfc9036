//! Week-by-week roadmap derived from a user's learning plans.

use std::collections::HashMap;

use crate::model::{Exercise, ExerciseId, LearningPlan, PlanStatus};

/// Days grouped into one roadmap week.
pub const DAYS_PER_WEEK: usize = 7;

const WEEK_THEMES: [&str; 4] = [
    "Nền tảng từ vựng",
    "Giao tiếp thường ngày",
    "Kỹ năng nghe nâng cao",
    "Tổng hợp và thực hành",
];
const FALLBACK_THEME: &str = "Học tập";

//
// ─── DAY STATUS ───────────────────────────────────────────────────────────────
//

/// Display status of one roadmap day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayStatus {
    Completed,
    Current,
    Locked,
}

impl From<PlanStatus> for DayStatus {
    fn from(status: PlanStatus) -> Self {
        match status {
            PlanStatus::Completed => DayStatus::Completed,
            PlanStatus::InProgress => DayStatus::Current,
            PlanStatus::Pending | PlanStatus::Unknown => DayStatus::Locked,
        }
    }
}

impl DayStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DayStatus::Completed => "completed",
            DayStatus::Current => "current",
            DayStatus::Locked => "locked",
        }
    }
}

//
// ─── DAY / WEEK ───────────────────────────────────────────────────────────────
//

/// One scheduled plan, placed on the roadmap.
#[derive(Debug, Clone, PartialEq)]
pub struct DayData {
    /// 1-based position in start-time order.
    pub day: u32,
    pub topic: String,
    pub status: DayStatus,
    /// Reserved for a submission score. Status never reads it and the
    /// derivation leaves it unset.
    pub score: Option<f64>,
    pub plan: LearningPlan,
    /// `None` when the exercise lookup failed.
    pub exercise: Option<Exercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekData {
    /// 1-based week index.
    pub week: u32,
    pub title: String,
    pub days: Vec<DayData>,
}

impl WeekData {
    #[must_use]
    pub fn first_day(&self) -> Option<u32> {
        self.days.first().map(|d| d.day)
    }

    #[must_use]
    pub fn last_day(&self) -> Option<u32> {
        self.days.last().map(|d| d.day)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.days
            .iter()
            .filter(|d| d.status == DayStatus::Completed)
            .count()
    }
}

//
// ─── ROADMAP ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roadmap {
    weeks: Vec<WeekData>,
    completed_days: usize,
    total_days: usize,
}

impl Roadmap {
    #[must_use]
    pub fn weeks(&self) -> &[WeekData] {
        &self.weeks
    }

    #[must_use]
    pub fn completed_days(&self) -> usize {
        self.completed_days
    }

    #[must_use]
    pub fn total_days(&self) -> usize {
        self.total_days
    }

    #[must_use]
    pub fn remaining_days(&self) -> usize {
        self.total_days - self.completed_days
    }

    /// Rounded share of completed days; 0 for an empty roadmap.
    #[must_use]
    pub fn progress_percentage(&self) -> u8 {
        percentage(self.completed_days, self.total_days)
    }

    /// True when the user has no plans yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_days == 0
    }

    pub fn days(&self) -> impl Iterator<Item = &DayData> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    /// First day whose plan is in progress.
    #[must_use]
    pub fn current_day(&self) -> Option<&DayData> {
        self.days().find(|d| d.status == DayStatus::Current)
    }
}

/// `round(100 * part / whole)`, or 0 when `whole` is 0.
#[must_use]
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let ratio = (part.min(whole) as f64 * 100.0 / whole as f64).round();
    ratio as u8
}

/// Title of the 1-based `week`: `"Tuần {week}: {theme}"`.
#[must_use]
pub fn week_title(week: u32) -> String {
    let theme = usize::try_from(week)
        .ok()
        .and_then(|w| w.checked_sub(1))
        .and_then(|idx| WEEK_THEMES.get(idx))
        .copied()
        .unwrap_or(FALLBACK_THEME);
    format!("Tuần {week}: {theme}")
}

/// Display topic: exercise title, else exercise topic, else `"Bài {day}"`.
fn day_topic(day: u32, exercise: Option<&Exercise>) -> String {
    exercise
        .and_then(Exercise::display_name)
        .map_or_else(|| format!("Bài {day}"), str::to_owned)
}

/// Groups plans into weeks of [`DAYS_PER_WEEK`] days.
///
/// Plans are ordered by start time; equal start times keep their input
/// order. A plan whose exercise is missing from `exercises` still gets a day,
/// with `exercise` unset and a synthesized topic.
#[must_use]
pub fn build_roadmap(
    mut plans: Vec<LearningPlan>,
    exercises: &HashMap<ExerciseId, Exercise>,
) -> Roadmap {
    plans.sort_by_key(|plan| plan.start_time);

    let total_days = plans.len();
    let mut weeks = Vec::with_capacity(total_days.div_ceil(DAYS_PER_WEEK));
    let mut current = Vec::with_capacity(DAYS_PER_WEEK);
    let mut completed_days = 0;

    for (idx, plan) in plans.into_iter().enumerate() {
        let day = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        let exercise = exercises.get(&plan.exercise_id).cloned();
        let status = DayStatus::from(plan.status);
        if status == DayStatus::Completed {
            completed_days += 1;
        }

        current.push(DayData {
            day,
            topic: day_topic(day, exercise.as_ref()),
            status,
            score: None,
            plan,
            exercise,
        });

        if current.len() == DAYS_PER_WEEK || idx + 1 == total_days {
            let week = u32::try_from(weeks.len() + 1).unwrap_or(u32::MAX);
            weeks.push(WeekData {
                week,
                title: week_title(week),
                days: std::mem::take(&mut current),
            });
        }
    }

    Roadmap {
        weeks,
        completed_days,
        total_days,
    }
}
