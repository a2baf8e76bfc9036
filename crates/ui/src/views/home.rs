use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home",
            section { class: "hero",
                h1 { "Chinh phục TOEIC cùng TOEIC ACE PATH" }
                p { class: "muted", "Lộ trình 25 ngày với bài học Nghe, Đọc, Viết và Nói mỗi ngày." }
                div { class: "hero-actions",
                    Link { class: "btn btn-primary", to: Route::StudyPlan {}, "Bắt đầu lộ trình" }
                    Link { class: "btn btn-ghost", to: Route::Assessment {}, "Đánh giá trình độ" }
                }
            }
        }
    }
}

#[component]
pub fn AssessmentView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Đánh giá trình độ" }
            p { class: "muted", "Bài kiểm tra đầu vào sẽ sớm có mặt." }
        }
    }
}

/// Index of every page in the app.
#[component]
pub fn AllInterfacesView() -> Element {
    let pages = [
        (Route::Home {}, "Trang chủ"),
        (Route::Assessment {}, "Đánh giá trình độ"),
        (Route::StudyPlan {}, "Lộ trình học"),
        (Route::Dashboard {}, "Dashboard"),
    ];

    rsx! {
        div { class: "page",
            h2 { "Tất cả trang" }
            ul { class: "page-index",
                for (route, label) in pages {
                    li {
                        Link { to: route, "{label}" }
                    }
                }
            }
        }
    }
}
