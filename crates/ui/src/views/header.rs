use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

const BRAND: &str = "TOEIC ACE PATH";

fn nav_items() -> [(Route, &'static str); 5] {
    [
        (Route::Home {}, "Trang chủ"),
        (Route::Assessment {}, "Đánh giá trình độ"),
        (Route::StudyPlan {}, "Lộ trình học"),
        (Route::Dashboard {}, "Dashboard"),
        (Route::AllInterfaces {}, "Tất cả trang"),
    ]
}

/// Site chrome: brand, primary navigation and account actions.
#[component]
pub fn Header() -> Element {
    let mut menu_open = use_signal(|| false);
    let menu_class = if menu_open() {
        "header-nav header-nav--open"
    } else {
        "header-nav"
    };
    let toggle_label = if menu_open() { "✕" } else { "☰" };

    rsx! {
        header { class: "header",
            div { class: "header-inner",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand-mark", "A" }
                    span { class: "brand-name", "{BRAND}" }
                }

                nav { class: "{menu_class}",
                    for (route, label) in nav_items() {
                        Link {
                            class: "nav-link",
                            active_class: "nav-link--active",
                            to: route,
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }

                div { class: "header-actions",
                    button { class: "btn btn-ghost", r#type: "button", "Đăng nhập" }
                    button { class: "btn btn-primary", r#type: "button", "Đăng ký miễn phí" }
                }

                button {
                    class: "menu-toggle",
                    r#type: "button",
                    "aria-expanded": "{menu_open}",
                    onclick: move |_| menu_open.toggle(),
                    "{toggle_label}"
                }
            }
        }
    }
}
