#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod navigation;
pub mod roadmap;
pub mod time;

pub use navigation::{ContinueTarget, LessonRoute};
pub use roadmap::{DayData, DayStatus, Roadmap, WeekData, build_roadmap};
