//! Test cases and their relation sets over HTTP.

use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_create_case_projection() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let ios = platform_id(&app, "iOS").await;

    let (status, body) = post(
        &app,
        "/api/v1/cases",
        json!({"caseNumber": 1, "name": "Login", "description": "Sign in", "platformIds": [ios]}),
    )
    .await;
    assert_eq!(status, 201);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(
        body,
        json!({"id": id, "caseNumber": 1, "name": "Login", "description": "Sign in"})
    );

    let (_, platforms) = get(&app, &format!("/api/v1/cases/{}/platforms", id)).await;
    assert_eq!(platforms, json!({"platforms": [ios]}));

    let (_, list) = get(&app, "/api/v1/cases").await;
    assert_eq!(list["cases"], json!([body]));
}

#[actix_rt::test]
async fn test_create_case_validation() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let linux = platform_id(&app, "Linux").await;

    let (status, body) = post(
        &app,
        "/api/v1/cases",
        json!({"caseNumber": 1, "name": "Login", "platformIds": []}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "At least one platform is required");

    let (status, body) = post(
        &app,
        "/api/v1/cases",
        json!({"caseNumber": 1, "name": "Login", "platformIds": [linux, 999]}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Platform not found: 999");

    create_case(&app, 1, &[linux]).await;
    let (status, body) = post(
        &app,
        "/api/v1/cases",
        json!({"caseNumber": 1, "name": "Again", "platformIds": [linux]}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Case number already exists: 1");
}

#[actix_rt::test]
async fn test_update_case_clears_omitted_description() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let linux = platform_id(&app, "Linux").await;
    let id = create_case(&app, 1, &[linux]).await;
    let uri = format!("/api/v1/cases/{}", id);

    let (status, body) = put(
        &app,
        &uri,
        json!({"caseNumber": 10, "name": "Login", "description": "Happy path"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["caseNumber"], 10);

    let (status, body) = put(&app, &uri, json!({"caseNumber": 10, "name": "Login"})).await;
    assert_eq!(status, 200);
    assert!(body["description"].is_null());

    let (status, body) = put(
        &app,
        "/api/v1/cases/999",
        json!({"caseNumber": 10, "name": "Login"}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Case not found");
}

#[actix_rt::test]
async fn test_set_platforms_is_all_or_nothing() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let linux = platform_id(&app, "Linux").await;
    let android = platform_id(&app, "Android").await;
    let id = create_case(&app, 5, &[linux]).await;
    let uri = format!("/api/v1/cases/{}/platforms", id);

    let (status, body) = put(&app, &uri, json!({"platformIds": [android, 999]})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Platform not found: 999");

    let (status, body) = put(&app, &uri, json!({"platformIds": []})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "At least one platform is required");

    let (_, body) = get(&app, &uri).await;
    assert_eq!(body, json!({"platforms": [linux]}));

    let (status, body) = put(&app, &uri, json!({"platformIds": [android, linux]})).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"platforms": [android, linux]}));

    let (status, body) = put(
        &app,
        "/api/v1/cases/999/platforms",
        json!({"platformIds": [linux]}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Case not found");
}

#[actix_rt::test]
async fn test_related_cases() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let linux = platform_id(&app, "Linux").await;
    let first = create_case(&app, 1, &[linux]).await;
    let second = create_case(&app, 2, &[linux]).await;
    let uri = format!("/api/v1/cases/{}/related", first);

    let (status, body) = put(&app, &uri, json!({"relatedCaseIds": [second]})).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"relatedCases": [second]}));

    let (status, body) = put(&app, &uri, json!({"relatedCaseIds": [first]})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Case cannot be related to itself");

    let (status, body) = put(&app, &uri, json!({"relatedCaseIds": [888]})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Related case not found: 888");

    let (_, body) = get(&app, &uri).await;
    assert_eq!(body, json!({"relatedCases": [second]}));

    // Relations are one-directional
    let (_, body) = get(&app, &format!("/api/v1/cases/{}/related", second)).await;
    assert_eq!(body, json!({"relatedCases": []}));
}

#[actix_rt::test]
async fn test_delete_case_keeps_steps() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let linux = platform_id(&app, "Linux").await;
    let ios = platform_id(&app, "iOS").await;
    let id = create_case(&app, 1, &[linux, ios]).await;
    let other = create_case(&app, 2, &[linux]).await;
    put(
        &app,
        &format!("/api/v1/cases/{}/related", id),
        json!({"relatedCaseIds": [other]}),
    )
    .await;
    let (status, step) = post(
        &app,
        "/api/v1/steps",
        json!({"order": 1, "description": "Open app", "caseId": id}),
    )
    .await;
    assert_eq!(status, 201);

    let (status, body) = delete(&app, &format!("/api/v1/cases/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"deleted": true}));

    let (status, _) = get(&app, &format!("/api/v1/cases/{}/platforms", id)).await;
    assert_eq!(status, 404);

    let (_, body) = get(&app, &format!("/api/v1/platforms/{}/cases", ios)).await;
    assert_eq!(body, json!({"cases": []}));

    let (status, body) = get(&app, &format!("/api/v1/steps/{}", step["id"])).await;
    assert_eq!(status, 200);
    assert_eq!(body, step);

    let (status, body) = delete(&app, &format!("/api/v1/cases/{}", id)).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Case not found");
}
