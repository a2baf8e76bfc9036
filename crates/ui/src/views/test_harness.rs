use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{ApiConfig, AppServices};
use storage::repository::Storage;

use crate::context::{AppContext, build_app_context};
use crate::views::{DashboardView, Header, LessonView, RoadmapView};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Header,
    StudyPlan,
    Dashboard,
    Lesson(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Header => rsx! { Header {} },
        ViewKind::StudyPlan => rsx! { RoadmapView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Lesson(id) => rsx! { LessonView { id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending work until the rendered HTML contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..100 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount `view` over `storage`, talking to the API at `api_base_url`.
pub fn setup_view_harness(view: ViewKind, storage: &Storage, api_base_url: &str) -> ViewHarness {
    let services =
        AppServices::new(storage, ApiConfig::new(api_base_url)).expect("valid api base url");
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            context: build_app_context(services),
            view,
        },
    );
    ViewHarness { dom }
}
