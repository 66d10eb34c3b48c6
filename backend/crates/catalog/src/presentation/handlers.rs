//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use kernel::extract::AppJson;

use crate::application::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    UpdateProductUseCase,
};
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{ProductRequest, ProductResponse};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<P>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<P>,
}

/// GET /products
pub async fn list_products<P>(
    State(state): State<CatalogAppState<P>>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let products = ListProductsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /products
pub async fn create_product<P>(
    State(state): State<CatalogAppState<P>>,
    AppJson(req): AppJson<ProductRequest>,
) -> CatalogResult<(StatusCode, Json<ProductResponse>)>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let product = CreateProductUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// GET /products/{id}
pub async fn show_product<P>(
    State(state): State<CatalogAppState<P>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ProductResponse>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let product = GetProductUseCase::new(state.repo.clone()).execute(&id).await?;

    Ok(Json(product.into()))
}

/// PUT/PATCH /products/{id}
pub async fn update_product<P>(
    State(state): State<CatalogAppState<P>>,
    Path(id): Path<String>,
    AppJson(req): AppJson<ProductRequest>,
) -> CatalogResult<Json<ProductResponse>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let product = UpdateProductUseCase::new(state.repo.clone())
        .execute(&id, req.into())
        .await?;

    Ok(Json(product.into()))
}

/// DELETE /products/{id}
pub async fn delete_product<P>(
    State(state): State<CatalogAppState<P>>,
    Path(id): Path<String>,
) -> CatalogResult<StatusCode>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    DeleteProductUseCase::new(state.repo.clone()).execute(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
