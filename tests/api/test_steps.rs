//! Steps, preconditions and expectations over HTTP.

use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_case_walkthrough() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    create_release(&app).await;
    let linux = platform_id(&app, "Linux").await;
    let case_id = create_case(&app, 1, &[linux]).await;

    let (status, step) = post(
        &app,
        "/api/v1/steps",
        json!({"order": 1, "description": "Open app", "caseId": case_id}),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(step["order"], 1);
    assert_eq!(step["caseId"], case_id);

    let (status, expectation) = post(
        &app,
        "/api/v1/expectations",
        json!({"description": "App opens", "stepId": step["id"]}),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(expectation["stepId"], step["id"]);

    let (status, body) = get(&app, &format!("/api/v1/steps?caseId={}", case_id)).await;
    assert_eq!(status, 200);
    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0]["order"], 1);

    let (_, body) = get(&app, &format!("/api/v1/expectations?stepId={}", step["id"])).await;
    assert_eq!(body["expectations"], json!([expectation]));
}

#[actix_rt::test]
async fn test_steps_filtered_by_case_are_ordered() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let linux = platform_id(&app, "Linux").await;
    let case_id = create_case(&app, 1, &[linux]).await;

    for (order, description) in [(3, "Submit"), (1, "Open"), (2, "Type")] {
        let (status, _) = post(
            &app,
            "/api/v1/steps",
            json!({"order": order, "description": description, "caseId": case_id}),
        )
        .await;
        assert_eq!(status, 201);
    }

    let (_, body) = get(&app, &format!("/api/v1/steps?caseId={}", case_id)).await;
    let orders: Vec<i64> = body["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[actix_rt::test]
async fn test_step_parents_must_exist() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = post(
        &app,
        "/api/v1/steps",
        json!({"order": 1, "description": "Open", "caseId": 9}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Case not found");

    let (status, body) = post(
        &app,
        "/api/v1/expectations",
        json!({"description": "Opens", "stepId": 9}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Step not found");

    let (status, body) = post(
        &app,
        "/api/v1/preconditions",
        json!({"description": " ", "caseId": 9}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Description is required");
}

#[actix_rt::test]
async fn test_precondition_crud() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let linux = platform_id(&app, "Linux").await;
    let case_id = create_case(&app, 1, &[linux]).await;

    let (status, created) = post(
        &app,
        "/api/v1/preconditions",
        json!({"description": "Network connection required", "caseId": case_id}),
    )
    .await;
    assert_eq!(status, 201);
    let uri = format!("/api/v1/preconditions/{}", created["id"]);

    let (status, updated) = put(&app, &uri, json!({"description": "Offline"})).await;
    assert_eq!(status, 200);
    assert_eq!(updated["description"], "Offline");
    assert_eq!(updated["caseId"], case_id);

    let (_, list) = get(&app, &format!("/api/v1/preconditions?caseId={}", case_id)).await;
    assert_eq!(list["preconditions"], json!([updated]));

    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, 200);
    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Precondition not found");
}
