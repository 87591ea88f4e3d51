//! Test runs over HTTP.

use chrono::{DateTime, Utc};
use serde_json::json;

use super::test_helpers::*;

fn instant(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

#[actix_rt::test]
async fn test_run_start_round_trips() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let release_id = create_release(&app).await;

    let (status, run) = post(
        &app,
        "/api/v1/runs",
        json!({"name": "Smoke", "releaseId": release_id, "start": "2026-01-15T10:00:00Z"}),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(
        instant(run["start"].as_str().unwrap()),
        instant("2026-01-15T10:00:00Z")
    );
    assert!(run["end"].is_null());
    assert_eq!(run["releaseId"], release_id);

    let (_, fetched) = get(&app, &format!("/api/v1/runs/{}", run["id"])).await;
    assert_eq!(fetched, run);

    let (_, list) = get(&app, &format!("/api/v1/runs?releaseId={}", release_id)).await;
    assert_eq!(list["runs"], json!([run]));
}

#[actix_rt::test]
async fn test_run_datetime_validation() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let release_id = create_release(&app).await;

    let (status, body) = post(
        &app,
        "/api/v1/runs",
        json!({"name": "Smoke", "releaseId": release_id, "end": "tomorrow"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid end datetime format. Use ISO 8601.");

    let (status, body) = post(
        &app,
        "/api/v1/runs",
        json!({"name": "Smoke", "releaseId": 999, "start": "garbage"}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Release not found");
}

#[actix_rt::test]
async fn test_run_update_keeps_window_on_bad_input() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let release_id = create_release(&app).await;
    let (_, run) = post(
        &app,
        "/api/v1/runs",
        json!({
            "name": "Smoke",
            "releaseId": release_id,
            "start": "2026-01-15T10:00:00Z",
            "end": "2026-01-15T11:00:00Z"
        }),
    )
    .await;
    let uri = format!("/api/v1/runs/{}", run["id"]);

    let (status, body) = put(
        &app,
        &uri,
        json!({"name": "Nightly", "start": "2026-02-01T00:00:00Z", "end": "bad"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid end datetime format. Use ISO 8601.");

    let (_, unchanged) = get(&app, &uri).await;
    assert_eq!(unchanged, run);

    let (status, updated) = put(&app, &uri, json!({"name": "Nightly"})).await;
    assert_eq!(status, 200);
    assert_eq!(updated["name"], "Nightly");
    assert_eq!(updated["start"], run["start"]);
    assert_eq!(updated["end"], run["end"]);
}

#[actix_rt::test]
async fn test_run_cases() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let release_id = create_release(&app).await;
    let linux = platform_id(&app, "Linux").await;
    let case_id = create_case(&app, 1, &[linux]).await;
    let (_, run) = post(
        &app,
        "/api/v1/runs",
        json!({"name": "Smoke", "releaseId": release_id}),
    )
    .await;
    let uri = format!("/api/v1/runs/{}/cases", run["id"]);

    let (status, body) = post(&app, &uri, json!({"caseId": case_id})).await;
    assert_eq!(status, 201);
    assert_eq!(body, json!({"added": true}));

    let (status, body) = post(&app, &uri, json!({"caseId": case_id})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], format!("Case already in run: {}", case_id));

    let (status, body) = post(&app, &uri, json!({"caseId": 999})).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Case not found");

    let (_, body) = get(&app, &uri).await;
    assert_eq!(body, json!({"cases": [case_id]}));

    let (_, body) = get(&app, &format!("/api/v1/cases/{}/runs", case_id)).await;
    assert_eq!(body, json!({"runs": [run["id"]]}));

    let (status, _) = delete(&app, &format!("/api/v1/runs/{}", run["id"])).await;
    assert_eq!(status, 200);

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Run not found");

    let (_, body) = get(&app, &format!("/api/v1/cases/{}/runs", case_id)).await;
    assert_eq!(body, json!({"runs": []}));
}
