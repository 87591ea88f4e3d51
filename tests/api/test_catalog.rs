//! Products, releases and platforms over HTTP.

use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_health_and_ready() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get(&app, "/api/v1/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/api/v1/ready").await;
    assert_eq!(status, 200);
    assert_eq!(body["database"], "connected");
}

#[actix_rt::test]
async fn test_openapi_document_served() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get(&app, "/api/v1/openapi.json").await;
    assert_eq!(status, 200);
    assert!(body["paths"]["/api/v1/cases/{id}/related"].is_object());
}

#[actix_rt::test]
async fn test_product_crud() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, created) = post(&app, "/api/v1/products", json!({"name": " App "})).await;
    assert_eq!(status, 201);
    assert_eq!(created["name"], "App");
    let uri = format!("/api/v1/products/{}", created["id"]);

    let (status, fetched) = get(&app, &uri).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);

    let (status, updated) = put(&app, &uri, json!({"name": "Mobile"})).await;
    assert_eq!(status, 200);
    assert_eq!(updated["name"], "Mobile");

    let (status, list) = get(&app, "/api/v1/products").await;
    assert_eq!(status, 200);
    assert_eq!(list["products"], json!([updated]));

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"deleted": true}));

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"error": "Product not found"}));
}

#[actix_rt::test]
async fn test_release_projection_and_filter() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let release_id = create_release(&app).await;

    let (status, release) = get(&app, &format!("/api/v1/releases/{}", release_id)).await;
    assert_eq!(status, 200);
    let product_id = release["productId"].as_i64().unwrap();
    assert_eq!(
        release,
        json!({"id": release_id, "name": "1.0", "description": null, "productId": product_id})
    );

    let (_, filtered) = get(&app, &format!("/api/v1/releases?productId={}", product_id)).await;
    assert_eq!(filtered["releases"].as_array().unwrap().len(), 1);

    let (_, empty) = get(&app, "/api/v1/releases?productId=999").await;
    assert_eq!(empty["releases"], json!([]));
}

#[actix_rt::test]
async fn test_release_requires_existing_product() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = post(
        &app,
        "/api/v1/releases",
        json!({"name": "1.0", "productId": 42}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Product not found");

    let (status, body) = post(
        &app,
        "/api/v1/releases",
        json!({"name": "", "productId": 42}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Name is required");
}

#[actix_rt::test]
async fn test_platforms_seeded_and_unique() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, list) = get(&app, "/api/v1/platforms").await;
    assert_eq!(status, 200);
    assert_eq!(list["platforms"].as_array().unwrap().len(), 5);

    let (status, body) = post(&app, "/api/v1/platforms", json!({"name": "macOS"})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Platform already exists: macOS");

    let (status, web) = post(&app, "/api/v1/platforms", json!({"name": "Web"})).await;
    assert_eq!(status, 201);

    let linux = platform_id(&app, "Linux").await;
    let case_id = create_case(&app, 1, &[linux]).await;

    let (status, body) = get(&app, &format!("/api/v1/platforms/{}/cases", linux)).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"cases": [case_id]}));

    let (_, body) = get(&app, &format!("/api/v1/platforms/{}/cases", web["id"])).await;
    assert_eq!(body, json!({"cases": []}));
}
