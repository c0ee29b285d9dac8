//! Integration tests for user administration routes.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};

use common::TestApp;
use gatepass_core::types::UserId;
use gatepass_entity::log::{CreateLog, LogAction};

#[tokio::test]
async fn test_users_page_lists_seeded_users() {
    let app = TestApp::new();
    app.seed_user("Alice", "alice@example.com").await;
    app.seed_user("Bob", "bob@example.com").await;

    let res = app.get("/users").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Alice"));
    assert!(res.body.contains("alice@example.com"));
    assert!(res.body.contains("Bob"));
}

#[tokio::test]
async fn test_create_user_redirects_to_listing() {
    let app = TestApp::new();

    let res = app
        .post_form("/users", &[("name", "Alice"), ("email", "alice@example.com")])
        .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), "/users");

    let users = app.store.users().find_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice");
    assert_eq!(users[0].email, "alice@example.com");
}

#[tokio::test]
async fn test_create_user_with_blank_name_is_rejected() {
    let app = TestApp::new();

    let res = app
        .post_form("/users", &[("name", ""), ("email", "alice@example.com")])
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(app.store.users().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() {
    let app = TestApp::new();
    app.seed_user("Alice", "alice@example.com").await;

    let res = app
        .post_form("/users", &[("name", "Impostor"), ("email", "alice@example.com")])
        .await;

    assert_eq!(res.status, StatusCode::CONFLICT);
    assert!(res.body.contains("already in use"));
    assert_eq!(app.store.users().find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_email_check_ignores_case() {
    let app = TestApp::new();
    app.seed_user("Alice", "alice@example.com").await;

    let res = app
        .post_form("/users", &[("name", "Impostor"), ("email", "ALICE@example.com")])
        .await;

    assert_eq!(res.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_edit_user_updates_fields() {
    let app = TestApp::new();
    let user = app.seed_user("Alice", "alice@example.com").await;

    let res = app
        .post_form(
            &format!("/users/edit/{}", user.id),
            &[("name", "Alice Smith"), ("email", "smith@example.com")],
        )
        .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), "/users");

    let users = app.store.users().find_all().await.unwrap();
    assert_eq!(users[0].name, "Alice Smith");
    assert_eq!(users[0].email, "smith@example.com");
}

#[tokio::test]
async fn test_edit_unknown_user_is_not_found() {
    let app = TestApp::new();

    let res = app
        .post_form(
            &format!("/users/edit/{}", UserId::new()),
            &[("name", "Ghost"), ("email", "ghost@example.com")],
        )
        .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_cascades_through_the_store() {
    let app = TestApp::new();
    let doomed = app.seed_user("Alice", "alice@example.com").await;
    let keeper = app.seed_user("Bob", "bob@example.com").await;
    let now = Utc::now();
    let doomed_pass = app
        .seed_pass(doomed.id, "visitor", now, now + Duration::days(7))
        .await;
    let keeper_pass = app
        .seed_pass(keeper.id, "staff", now, now + Duration::days(7))
        .await;
    for pass in [&doomed_pass, &keeper_pass] {
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
        .post_form(&format!("/users/delete/{}", doomed.id), &[])
        .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), "/users");

    let users = app.store.users().find_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, keeper.id);
    let passes = app.store.passes().find_all().await.unwrap();
    assert_eq!(passes.len(), 1);
    assert_eq!(passes[0].user_id, keeper.id);
    let logs = app.store.logs().find_all().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].user_id, keeper.id);
}

#[tokio::test]
async fn test_delete_unknown_user_still_redirects() {
    let app = TestApp::new();

    let res = app
        .post_form(&format!("/users/delete/{}", UserId::new()), &[])
        .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), "/users");
}

#[tokio::test]
async fn test_user_names_are_escaped_in_listing() {
    let app = TestApp::new();
    app.seed_user("<script>alert(1)</script>", "xss@example.com")
        .await;

    let res = app.get("/users").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("&lt;script&gt;"));
    assert!(!res.body.contains("<script>alert(1)</script>"));
}
