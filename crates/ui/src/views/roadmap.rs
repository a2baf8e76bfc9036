use ace_core::{ContinueTarget, DayStatus};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DayVm, RoadmapVm, WeekVm, map_roadmap, status_class};

const NOT_SIGNED_IN: &str = "Vui lòng đăng nhập để xem lộ trình học tập";
const LOAD_FAILED: &str = "Không thể tải lộ trình học tập. Vui lòng thử lại.";
const EMPTY: &str = "Chưa có lộ trình học tập nào.";

/// The 25-day study plan at `/study-plan`.
#[component]
pub fn RoadmapView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services();

    let resource = use_resource(move || {
        let services = services.clone();
        async move {
            let roadmap = services.load_roadmap().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_roadmap(&roadmap))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page roadmap",
            div { class: "page-header",
                h2 { "Lộ trình học tập 25 ngày" }
                p { class: "muted", "Theo dõi tiến độ và tiếp tục bài học của bạn" }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    div { class: "loading",
                        div { class: "spinner" }
                        p { "Đang tải..." }
                    }
                },
                ViewState::Error(ViewError::NotSignedIn) => rsx! {
                    p { class: "notice", "{NOT_SIGNED_IN}" }
                },
                ViewState::Error(ViewError::LoadFailed) => rsx! {
                    div { class: "notice notice--error",
                        p { "{LOAD_FAILED}" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Thử lại"
                        }
                    }
                },
                ViewState::Ready(vm) if vm.is_empty() => rsx! {
                    p { class: "notice", "{EMPTY}" }
                },
                ViewState::Ready(vm) => rsx! {
                    ProgressOverview { vm: vm.clone() }
                    div { class: "weeks",
                        for week in vm.weeks.clone() {
                            WeekCard { key: "{week.week}", week: week.clone() }
                        }
                    }
                    RoadmapActions { vm: vm.clone() }
                },
            }
        }
    }
}

#[component]
fn ProgressOverview(vm: RoadmapVm) -> Element {
    rsx! {
        section { class: "card progress-overview",
            div { class: "progress-head",
                h3 { "Tiến độ tổng quan" }
                span { class: "progress-value", "{vm.progress_percentage}%" }
            }
            div { class: "progress-bar",
                div {
                    class: "progress-fill",
                    style: "width: {vm.progress_percentage}%",
                }
            }
            p { class: "muted", "{vm.summary_label()}" }
            div { class: "stats",
                div { class: "stat",
                    span { class: "stat-value", "{vm.completed_days}" }
                    span { class: "stat-label", "Đã hoàn thành" }
                }
                div { class: "stat",
                    span { class: "stat-value", "{vm.remaining_days}" }
                    span { class: "stat-label", "Còn lại" }
                }
                div { class: "stat",
                    span { class: "stat-value", "{vm.total_days}" }
                    span { class: "stat-label", "Tổng số ngày" }
                }
            }
        }
    }
}

#[component]
fn WeekCard(week: WeekVm) -> Element {
    rsx! {
        section { class: "card week",
            div { class: "week-head",
                div {
                    h3 { "{week.title}" }
                    p { class: "muted", "{week.range_label}" }
                }
                span { class: "week-count", "{week.completed_label}" }
            }
            ul { class: "days",
                for day in week.days {
                    DayRow { key: "{day.day}", day: day.clone() }
                }
            }
        }
    }
}

#[component]
fn DayRow(day: DayVm) -> Element {
    let navigator = use_navigator();
    let lesson = day.lesson;

    rsx! {
        li { class: status_class(day.status), "data-status": day.status.as_str(),
            div { class: "day-info",
                span { class: "day-title", "{day.title}" }
                span { class: "day-subtitle muted", "{day.subtitle}" }
            }
            match day.status {
                DayStatus::Completed => rsx! {
                    span { class: "badge badge--completed", "Hoàn thành" }
                },
                DayStatus::Current => rsx! {
                    button {
                        class: "btn btn-primary btn-sm",
                        disabled: lesson.is_none(),
                        onclick: move |_| {
                            if let Some(lesson) = lesson {
                                navigator.push(Route::from(lesson));
                            }
                        },
                        "Học ngay"
                    }
                },
                DayStatus::Locked => rsx! {
                    span { class: "badge badge--locked", "Chưa mở" }
                },
            }
        }
    }
}

#[component]
fn RoadmapActions(vm: RoadmapVm) -> Element {
    let navigator = use_navigator();
    let continue_target = vm.continue_target;

    rsx! {
        div { class: "roadmap-actions",
            button {
                class: "btn btn-primary",
                onclick: move |_| match continue_target {
                    Some(ContinueTarget::Lesson(lesson)) => {
                        navigator.push(Route::from(lesson));
                    }
                    Some(ContinueTarget::Dashboard) => {
                        navigator.push(Route::Dashboard {});
                    }
                    None => {}
                },
                "Tiếp tục học tập"
            }
            button {
                class: "btn btn-ghost",
                onclick: move |_| {
                    navigator.push(Route::Dashboard {});
                },
                "Xem dashboard"
            }
        }
    }
}
