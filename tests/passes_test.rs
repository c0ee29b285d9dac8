//! Integration tests for pass administration routes.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};

use common::TestApp;
use gatepass_core::types::{PassId, UserId};
use gatepass_entity::log::{CreateLog, LogAction};
use gatepass_service::dates::parse_date;

#[tokio::test]
async fn test_create_pass_redirects_and_persists() {
    let app = TestApp::new();
    let user = app.seed_user("Alice", "alice@example.com").await;
    let user_id = user.id.to_string();

    let res = app
        .post_form(
            "/passes",
            &[
                ("userId", user_id.as_str()),
                ("type", "visitor"),
                ("startDate", "2024-01-01"),
                ("endDate", "2024-01-31"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), "/passes");

    let passes = app.store.passes().find_all().await.unwrap();
    assert_eq!(passes.len(), 1);
    assert_eq!(passes[0].user_id, user.id);
    assert_eq!(passes[0].kind, "visitor");
    assert_eq!(passes[0].start_date, parse_date("2024-01-01").unwrap());
    assert_eq!(passes[0].end_date, parse_date("2024-01-31").unwrap());
}

#[tokio::test]
async fn test_listing_shows_owner_and_window() {
    let app = TestApp::new();
    let user = app.seed_user("Alice", "alice@example.com").await;
    app.seed_pass(
        user.id,
        "contractor",
        parse_date("2024-01-01").unwrap(),
        parse_date("2024-01-31").unwrap(),
    )
    .await;

    let res = app.get("/passes").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Alice"));
    assert!(res.body.contains("contractor"));
    assert!(res.body.contains("value=\"2024-01-01\""));
    assert!(res.body.contains("value=\"2024-01-31\""));
}

#[tokio::test]
async fn test_reversed_range_re_renders_with_message() {
    let app = TestApp::new();
    let user = app.seed_user("Alice", "alice@example.com").await;
    let user_id = user.id.to_string();

    let res = app
        .post_form(
            "/passes",
            &[
                ("userId", user_id.as_str()),
                ("type", "visitor"),
                ("startDate", "2024-02-01"),
                ("endDate", "2024-01-01"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("class=\"error\""));
    assert!(res.body.contains("The end date cannot be earlier than the start date"));
    assert!(app.store.passes().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unparsable_date_re_renders_with_message() {
    let app = TestApp::new();
    let user = app.seed_user("Alice", "alice@example.com").await;
    let user_id = user.id.to_string();

    let res = app
        .post_form(
            "/passes",
            &[
                ("userId", user_id.as_str()),
                ("type", "visitor"),
                ("startDate", "soon"),
                ("endDate", "2024-01-31"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Please enter valid dates"));
    assert!(app.store.passes().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_single_day_pass_is_accepted() {
    let app = TestApp::new();
    let user = app.seed_user("Alice", "alice@example.com").await;
    let user_id = user.id.to_string();

    let res = app
        .post_form(
            "/passes",
            &[
                ("userId", user_id.as_str()),
                ("type", "visitor"),
                ("startDate", "2024-01-15"),
                ("endDate", "2024-01-15"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(app.store.passes().find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_pass_for_unknown_user_is_not_found() {
    let app = TestApp::new();
    let missing = UserId::new().to_string();

    let res = app
        .post_form(
            "/passes",
            &[
                ("userId", missing.as_str()),
                ("type", "visitor"),
                ("startDate", "2024-01-01"),
                ("endDate", "2024-01-31"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(app.store.passes().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_pass_with_malformed_user_id_is_rejected() {
    let app = TestApp::new();

    let res = app
        .post_form(
            "/passes",
            &[
                ("userId", "not-a-uuid"),
                ("type", "visitor"),
                ("startDate", "2024-01-01"),
                ("endDate", "2024-01-31"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_pass_updates_window() {
    let app = TestApp::new();
    let user = app.seed_user("Alice", "alice@example.com").await;
    let pass = app
        .seed_pass(
            user.id,
            "visitor",
            parse_date("2024-01-01").unwrap(),
            parse_date("2024-01-31").unwrap(),
        )
        .await;

    let res = app
        .post_form(
            &format!("/passes/edit/{}", pass.id),
            &[
                ("type", "staff"),
                ("startDate", "2024-02-01"),
                ("endDate", "2024-03-01"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), "/passes");

    let passes = app.store.passes().find_all().await.unwrap();
    assert_eq!(passes[0].kind, "staff");
    assert_eq!(passes[0].start_date, parse_date("2024-02-01").unwrap());
    assert_eq!(passes[0].end_date, parse_date("2024-03-01").unwrap());
}

#[tokio::test]
async fn test_edit_with_reversed_range_keeps_pass_unchanged() {
    let app = TestApp::new();
    let user = app.seed_user("Alice", "alice@example.com").await;
    let pass = app
        .seed_pass(
            user.id,
            "visitor",
            parse_date("2024-01-01").unwrap(),
            parse_date("2024-01-31").unwrap(),
        )
        .await;

    let res = app
        .post_form(
            &format!("/passes/edit/{}", pass.id),
            &[
                ("type", "staff"),
                ("startDate", "2024-03-01"),
                ("endDate", "2024-02-01"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("The end date cannot be earlier than the start date"));

    let passes = app.store.passes().find_all().await.unwrap();
    assert_eq!(passes[0].kind, "visitor");
    assert_eq!(passes[0].end_date, parse_date("2024-01-31").unwrap());
}

#[tokio::test]
async fn test_edit_unknown_pass_is_not_found() {
    let app = TestApp::new();

    let res = app
        .post_form(
            &format!("/passes/edit/{}", PassId::new()),
            &[
                ("type", "staff"),
                ("startDate", "2024-02-01"),
                ("endDate", "2024-03-01"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_pass_removes_only_its_logs() {
    let app = TestApp::new();
    let user = app.seed_user("Alice", "alice@example.com").await;
    let now = Utc::now();
    let doomed = app
        .seed_pass(user.id, "visitor", now, now + Duration::days(7))
        .await;
    let keeper = app
        .seed_pass(user.id, "staff", now, now + Duration::days(7))
        .await;
    for pass in [&doomed, &keeper] {
        app.store
            .logs()
            .create(&CreateLog {
                user_id: pass.user_id,
                pass_id: pass.id,
                action: LogAction::Entry,
                timestamp: now,
            })
            .await
            .unwrap();
    }

    let res = app
        .post_form(&format!("/passes/delete/{}", doomed.id), &[])
        .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), "/passes");

    let passes = app.store.passes().find_all().await.unwrap();
    assert_eq!(passes.len(), 1);
    assert_eq!(passes[0].id, keeper.id);
    let logs = app.store.logs().find_all().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].pass_id, keeper.id);
}

#[tokio::test]
async fn test_delete_unknown_pass_is_not_found() {
    let app = TestApp::new();

    let res = app
        .post_form(&format!("/passes/delete/{}", PassId::new()), &[])
        .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
