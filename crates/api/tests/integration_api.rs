//! Integration tests for GitHub sync.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app, default_app, get, post_json, StubScanner, TestDeps, TEST_USER};
use serde_json::json;
use skillforge_github::{DetectedSkill, ScanReport};

fn report() -> ScanReport {
    ScanReport {
        skills: vec![
            DetectedSkill {
                name: "TypeScript".into(),
                category: Some("Programming Language".into()),
                proficiency: 72.0,
                last_practiced: None,
            },
            DetectedSkill {
                name: "Terraform".into(),
                category: Some("Infrastructure".into()),
                proficiency: 140.0,
                last_practiced: None,
            },
        ],
        repositories: json!(14),
        language_stats: json!({ "TypeScript": 52000, "HCL": 3100 }),
    }
}

fn app_with_scanner(result: Result<ScanReport, String>) -> axum::Router {
    build_test_app(TestDeps {
        scanner: Some(Arc::new(StubScanner { result })),
        ..Default::default()
    })
}

#[tokio::test]
async fn sync_inserts_detected_skills() {
    let app = app_with_scanner(Ok(report()));

    let response = post_json(
        app.clone(),
        "/api/integrations/github",
        json!({ "userId": "dana", "username": "octocat" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["skillsDetected"], 2);
    assert_eq!(data["repositories"], 14);
    assert_eq!(data["languageStats"]["HCL"], 3100);

    let skills = data["skills"].as_array().unwrap();
    assert_eq!(skills[0]["category"], "Programming Language");
    assert_eq!(skills[0]["source"], "github");
    assert_eq!(skills[1]["category"], "Other");
    assert_eq!(skills[1]["proficiency"], 100.0);

    let listed = body_json(get(app, "/api/skills/user/dana").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn sync_uses_default_user() {
    let app = app_with_scanner(Ok(report()));
    post_json(app.clone(), "/api/integrations/github", json!({ "username": "octocat" })).await;

    let listed = body_json(get(app, &format!("/api/skills/user/{TEST_USER}")).await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn sync_requires_username() {
    let app = app_with_scanner(Ok(report()));
    let response = post_json(app, "/api/integrations/github", json!({ "userId": "dana" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "GitHub username required");
}

#[tokio::test]
async fn sync_without_scanner_is_an_upstream_error() {
    let response = post_json(
        default_app(),
        "/api/integrations/github",
        json!({ "username": "octocat" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn rejected_scan_is_an_upstream_error_and_inserts_nothing() {
    let app = app_with_scanner(Err("API rate limit exceeded".into()));

    let response = post_json(
        app.clone(),
        "/api/integrations/github",
        json!({ "userId": "erin", "username": "octocat" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(response).await["error"],
        "GitHub scan failed: API rate limit exceeded"
    );

    let listed = body_json(get(app, "/api/skills/user/erin").await).await;
    assert_eq!(listed["data"], json!([]));
}
