//! Shared helpers for the HTTP API tests.

use actix_web::{App, dev::ServiceResponse, test, web};
use serde_json::Value;
use testcase_manager_lib::api;
use testcase_manager_lib::db::DbPool;
use testcase_manager_lib::middleware::RequestLogger;

/// Fresh in-memory database with the schema and default platforms.
pub async fn create_test_pool() -> DbPool {
    let pool = DbPool::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");
    pool
}

/// Create an app wired like the server.
pub async fn create_test_app(
    pool: &DbPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(api::json_config())
            .app_data(api::path_config())
            .app_data(api::query_config())
            .service(web::scope("/api/v1").configure(api::configure)),
    )
    .await
}

async fn send<S>(app: &S, req: actix_http::Request) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

pub async fn get<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, test::TestRequest::get().uri(uri).to_request()).await
}

pub async fn post<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(
        app,
        test::TestRequest::post().uri(uri).set_json(body).to_request(),
    )
    .await
}

pub async fn put<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(
        app,
        test::TestRequest::put().uri(uri).set_json(body).to_request(),
    )
    .await
}

pub async fn delete<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, test::TestRequest::delete().uri(uri).to_request()).await
}

/// Look up a seeded platform id by name.
pub async fn platform_id<S>(app: &S, name: &str) -> i64
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, body) = get(app, "/api/v1/platforms").await;
    assert_eq!(status, 200);
    body["platforms"]
        .as_array()
        .expect("platform list")
        .iter()
        .find(|p| p["name"] == name)
        .and_then(|p| p["id"].as_i64())
        .unwrap_or_else(|| panic!("platform {} not seeded", name))
}

/// Create a test case on the given platforms and return its id.
pub async fn create_case<S>(app: &S, number: i64, platform_ids: &[i64]) -> i64
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, body) = post(
        app,
        "/api/v1/cases",
        serde_json::json!({
            "caseNumber": number,
            "name": format!("Case {}", number),
            "platformIds": platform_ids,
        }),
    )
    .await;
    assert_eq!(status, 201, "Failed to create case: {}", body);
    body["id"].as_i64().expect("case id")
}

/// Create a product with one release and return the release id.
pub async fn create_release<S>(app: &S) -> i64
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, product) = post(app, "/api/v1/products", serde_json::json!({"name": "App"})).await;
    assert_eq!(status, 201);

    let (status, release) = post(
        app,
        "/api/v1/releases",
        serde_json::json!({"name": "1.0", "productId": product["id"]}),
    )
    .await;
    assert_eq!(status, 201, "Failed to create release: {}", release);
    release["id"].as_i64().expect("release id")
}
