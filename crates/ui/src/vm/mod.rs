mod dashboard_vm;
mod roadmap_vm;
mod time_fmt;

pub use dashboard_vm::{DashboardVm, RecentResultVm, SkillBarVm, map_dashboard};
pub use roadmap_vm::{DayVm, RoadmapVm, WeekVm, map_roadmap, status_class};
pub use time_fmt::format_date;
