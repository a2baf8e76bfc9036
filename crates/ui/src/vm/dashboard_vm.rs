use ace_core::model::DashboardStats;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBarVm {
    pub label: &'static str,
    pub percent: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentResultVm {
    pub exercise: String,
    pub score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub streak_label: String,
    pub exercises_label: String,
    pub completion_percentage: u8,
    pub study_hours_label: String,
    pub total_score_label: String,
    pub skills: Vec<SkillBarVm>,
    pub today_count: usize,
    pub recent_results: Vec<RecentResultVm>,
}

fn clamp_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[must_use]
pub fn map_dashboard(stats: &DashboardStats) -> DashboardVm {
    let summary = &stats.summary;
    let progress = &stats.progress;
    DashboardVm {
        streak_label: format!("{} ngày liên tiếp", summary.streak_days),
        exercises_label: format!(
            "{}/{} bài tập",
            summary.completed_exercises, summary.total_exercises
        ),
        completion_percentage: stats.completion_percentage(),
        study_hours_label: format!("{:.1} giờ", summary.study_hours),
        total_score_label: format!("{:.0}", summary.total_score),
        skills: vec![
            SkillBarVm {
                label: "Listening",
                percent: clamp_percent(progress.listening),
            },
            SkillBarVm {
                label: "Reading",
                percent: clamp_percent(progress.reading),
            },
            SkillBarVm {
                label: "Writing",
                percent: clamp_percent(progress.writing),
            },
            SkillBarVm {
                label: "Speaking",
                percent: clamp_percent(progress.speaking),
            },
        ],
        today_count: stats.today.len(),
        recent_results: stats
            .recent_results
            .iter()
            .map(|r| RecentResultVm {
                exercise: r.exercise.clone(),
                score_label: format!("{:.0}", r.score),
            })
            .collect(),
    }
}
