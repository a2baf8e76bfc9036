use ace_core::{ContinueTarget, DayData, DayStatus, LessonRoute, Roadmap, WeekData};

use crate::vm::time_fmt::format_date;

const FALLBACK_KIND_LABEL: &str = "Bài học";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayVm {
    pub day: u32,
    pub title: String,
    pub subtitle: String,
    pub status: DayStatus,
    /// `None` when the exercise never resolved; the start button is disabled.
    pub lesson: Option<LessonRoute>,
}

impl From<&DayData> for DayVm {
    fn from(day: &DayData) -> Self {
        let kind = day
            .exercise
            .as_ref()
            .map_or(FALLBACK_KIND_LABEL, |e| e.exercise_type.as_str());
        Self {
            day: day.day,
            title: format!("Ngày {}: {}", day.day, day.topic),
            subtitle: format!("{kind} • {}", format_date(day.plan.start_time)),
            status: day.status,
            lesson: LessonRoute::for_day(day),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekVm {
    pub week: u32,
    pub title: String,
    pub range_label: String,
    pub completed_label: String,
    pub days: Vec<DayVm>,
}

impl From<&WeekData> for WeekVm {
    fn from(week: &WeekData) -> Self {
        let first = week.first_day().unwrap_or_default();
        let last = week.last_day().unwrap_or_default();
        Self {
            week: week.week,
            title: week.title.clone(),
            range_label: format!("Ngày {first} - {last}"),
            completed_label: format!("{}/{} hoàn thành", week.completed_count(), week.days.len()),
            days: week.days.iter().map(DayVm::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapVm {
    pub weeks: Vec<WeekVm>,
    pub completed_days: usize,
    pub total_days: usize,
    pub remaining_days: usize,
    pub progress_percentage: u8,
    pub continue_target: Option<ContinueTarget>,
}

impl RoadmapVm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    #[must_use]
    pub fn summary_label(&self) -> String {
        format!(
            "Bạn đã hoàn thành {}/{} ngày học",
            self.completed_days, self.total_days
        )
    }
}

#[must_use]
pub fn map_roadmap(roadmap: &Roadmap) -> RoadmapVm {
    RoadmapVm {
        weeks: roadmap.weeks().iter().map(WeekVm::from).collect(),
        completed_days: roadmap.completed_days(),
        total_days: roadmap.total_days(),
        remaining_days: roadmap.remaining_days(),
        progress_percentage: roadmap.progress_percentage(),
        continue_target: ContinueTarget::for_roadmap(roadmap),
    }
}

/// CSS modifier for a day row.
#[must_use]
pub fn status_class(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Completed => "day day--completed",
        DayStatus::Current => "day day--current",
        DayStatus::Locked => "day day--locked",
    }
}
