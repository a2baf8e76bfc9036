use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardVm, map_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services();

    let resource = use_resource(move || {
        let services = services.clone();
        async move {
            let stats = services.load_dashboard().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_dashboard(&stats))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard",
            h2 { "Dashboard" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Đang tải..." }
                },
                ViewState::Error(ViewError::NotSignedIn) => rsx! {
                    p { class: "notice", "Vui lòng đăng nhập để xem dashboard" }
                },
                ViewState::Error(ViewError::LoadFailed) => rsx! {
                    div { class: "notice notice--error",
                        p { "Không thể tải dữ liệu dashboard." }
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
                ViewState::Ready(vm) => rsx! {
                    DashboardBody { vm }
                },
            }
        }
    }
}

#[component]
fn DashboardBody(vm: DashboardVm) -> Element {
    rsx! {
        div { class: "stats",
            div { class: "stat",
                span { class: "stat-value", "{vm.streak_label}" }
                span { class: "stat-label", "Chuỗi ngày học" }
            }
            div { class: "stat",
                span { class: "stat-value", "{vm.exercises_label}" }
                span { class: "stat-label", "{vm.completion_percentage}% hoàn thành" }
            }
            div { class: "stat",
                span { class: "stat-value", "{vm.study_hours_label}" }
                span { class: "stat-label", "Thời gian học" }
            }
            div { class: "stat",
                span { class: "stat-value", "{vm.total_score_label}" }
                span { class: "stat-label", "Tổng điểm" }
            }
        }

        section { class: "card skills",
            h3 { "Kỹ năng" }
            for skill in vm.skills.iter() {
                div { class: "skill",
                    span { class: "skill-label", "{skill.label}" }
                    div { class: "progress-bar",
                        div { class: "progress-fill", style: "width: {skill.percent}%" }
                    }
                    span { class: "skill-value", "{skill.percent}%" }
                }
            }
        }

        section { class: "card today",
            h3 { "Hôm nay" }
            p { "{vm.today_count} bài học được lên lịch" }
            Link { class: "btn btn-ghost", to: Route::StudyPlan {}, "Xem lộ trình" }
        }

        section { class: "card recent",
            h3 { "Kết quả gần đây" }
            if vm.recent_results.is_empty() {
                p { class: "muted", "Chưa có kết quả nào." }
            } else {
                ul {
                    for result in vm.recent_results.iter() {
                        li {
                            span { "{result.exercise}" }
                            span { class: "score", "{result.score_label}" }
                        }
                    }
                }
            }
        }
    }
}
