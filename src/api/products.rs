//! Product endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{DeletedResponse, NameRequest, ProductListResponse, ProductResponse};
use crate::services::catalog;

/// Configure product routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_products)
        .service(create_product)
        .service(get_product)
        .service(update_product)
        .service(delete_product);
}

/// List all products.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = ProductListResponse)
    )
)]
#[get("/products")]
pub async fn list_products(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let products = catalog::list_products(pool.connection()).await?;

    Ok(HttpResponse::Ok().json(ProductListResponse {
        products: products.into_iter().map(ProductResponse::from).collect(),
    }))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = NameRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
#[post("/products")]
pub async fn create_product(
    pool: web::Data<DbPool>,
    body: web::Json<NameRequest>,
) -> AppResult<HttpResponse> {
    let product = catalog::create_product(pool.connection(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ProductResponse::from(product)))
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/products/{id}")]
pub async fn get_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let product = catalog::get_product(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// Rename a product.
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = NameRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/products/{id}")]
pub async fn update_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<NameRequest>,
) -> AppResult<HttpResponse> {
    let product =
        catalog::update_product(pool.connection(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeletedResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/products/{id}")]
pub async fn delete_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    catalog::delete_product(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse::new()))
}
