use serde_json::json;
use services::{AUTH_TOKEN_KEY, USER_ID_KEY};
use storage::repository::{LocalStore, Storage};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::test_harness::{ViewKind, setup_view_harness};

const UNUSED_API: &str = "http://127.0.0.1:9/api";

async fn signed_in_storage(user_id: u64) -> Storage {
    let storage = Storage::in_memory();
    storage
        .local
        .set_item(AUTH_TOKEN_KEY, "token")
        .await
        .expect("store token");
    storage
        .local
        .set_item(USER_ID_KEY, &user_id.to_string())
        .await
        .expect("store user id");
    storage
}

fn plan_json(id: u64, status: &str, day: u32) -> serde_json::Value {
    json!({
        "planId": id,
        "exerciseId": id,
        "status": status,
        "startTime": format!("2024-03-{day:02}T08:00:00Z"),
        "endTime": format!("2024-03-{day:02}T09:00:00Z"),
    })
}

#[tokio::test(flavor = "current_thread")]
async fn header_renders_brand_and_navigation() {
    let storage = Storage::in_memory();
    let mut harness = setup_view_harness(ViewKind::Header, &storage, UNUSED_API);
    harness.rebuild();
    let html = harness.render();
    for expected in [
        "TOEIC ACE PATH",
        "Trang chủ",
        "Đánh giá trình độ",
        "Lộ trình học",
        "Dashboard",
        "Tất cả trang",
        "Đăng nhập",
        "Đăng ký miễn phí",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_without_identity_asks_to_sign_in() {
    let storage = Storage::in_memory();
    let mut harness = setup_view_harness(ViewKind::StudyPlan, &storage, UNUSED_API);
    harness.rebuild();
    let html = harness.drive_until("Vui lòng đăng nhập").await;
    assert!(
        html.contains("Vui lòng đăng nhập để xem lộ trình học tập"),
        "missing sign-in notice in {html}"
    );
    assert!(!html.contains("Thử lại"), "unexpected retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_renders_weeks_and_day_actions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/learningplans/user/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            plan_json(2, "InProgress", 5),
            plan_json(1, "Completed", 4),
        ])))
        .mount(&server)
        .await;
    for (id, kind) in [(1, "Reading"), (2, "Listening")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/exercises/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "title": format!("Office memo {id}"),
                "exerciseType": kind,
            })))
            .mount(&server)
            .await;
    }

    let storage = signed_in_storage(7).await;
    let api = format!("{}/api", server.uri());
    let mut harness = setup_view_harness(ViewKind::StudyPlan, &storage, &api);
    harness.rebuild();
    let html = harness.drive_until("Tuần 1").await;

    assert!(html.contains("Tuần 1: Nền tảng từ vựng"), "missing week in {html}");
    assert!(html.contains("Ngày 1: Office memo 1"), "missing day 1 in {html}");
    assert!(html.contains("Ngày 2: Office memo 2"), "missing day 2 in {html}");
    assert!(html.contains("Listening • 05/03/2024"), "missing subtitle in {html}");
    assert!(html.contains("Hoàn thành"), "missing completed badge in {html}");
    assert!(html.contains("Học ngay"), "missing start button in {html}");
    assert!(html.contains("50%"), "missing progress in {html}");
    assert!(html.contains("Tiếp tục học tập"), "missing continue in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_with_no_plans_shows_empty_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/learningplans/user/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let storage = signed_in_storage(7).await;
    let api = format!("{}/api", server.uri());
    let mut harness = setup_view_harness(ViewKind::StudyPlan, &storage, &api);
    harness.rebuild();
    let html = harness.drive_until("Chưa có lộ trình").await;
    assert!(
        html.contains("Chưa có lộ trình học tập nào."),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_failure_offers_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/learningplans/user/7"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let storage = signed_in_storage(7).await;
    let api = format!("{}/api", server.uri());
    let mut harness = setup_view_harness(ViewKind::StudyPlan, &storage, &api);
    harness.rebuild();
    let html = harness.drive_until("Thử lại").await;
    assert!(
        html.contains("Không thể tải lộ trình học tập. Vui lòng thử lại."),
        "missing failure notice in {html}"
    );
    assert!(html.contains("Thử lại"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_without_identity_asks_to_sign_in() {
    let storage = Storage::in_memory();
    let mut harness = setup_view_harness(ViewKind::Dashboard, &storage, UNUSED_API);
    harness.rebuild();
    let html = harness.drive_until("Vui lòng đăng nhập").await;
    assert!(
        html.contains("Vui lòng đăng nhập để xem dashboard"),
        "missing sign-in notice in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_page_shows_exercise() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/exercises/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "title": "Airport announcements",
            "exerciseType": "Listening",
        })))
        .mount(&server)
        .await;

    let storage = Storage::in_memory();
    let api = format!("{}/api", server.uri());
    let mut harness = setup_view_harness(ViewKind::Lesson(12), &storage, &api);
    harness.rebuild();
    let html = harness.drive_until("Airport").await;
    assert!(html.contains("Bài tập #12"), "missing id in {html}");
    assert!(html.contains("Airport announcements"), "missing title in {html}");
}
