//! Contractor category endpoints
//!
//! Categories are reference data: create/list/get only, no update or
//! delete surface.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::{CategoryRepo, CategoryRow};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CategoryCreate, CategoryRead, ContractorRead};

impl From<CategoryRow> for CategoryRead {
    fn from(row: CategoryRow) -> Self {
        Self {
            category_id: row.category_id,
            category_name: row.category_name,
        }
    }
}

/// POST /contractor-categories - create a new category
async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CategoryCreate>,
) -> Result<(StatusCode, Json<CategoryRead>), ApiError> {
    let category = CategoryRepo::new(&state.pool).create(&req).await?;
    Ok((StatusCode::CREATED, Json(CategoryRead::from(category))))
}

/// GET /contractor-categories - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryRead>>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    Ok(Json(
        categories.into_iter().map(CategoryRead::from).collect(),
    ))
}

/// GET /contractor-categories/{id} - get a single category
async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryRead>, ApiError> {
    let category = CategoryRepo::new(&state.pool).get(id).await?;
    Ok(Json(CategoryRead::from(category)))
}

/// GET /contractor-categories/{id}/contractors - contractors in a category
async fn list_category_contractors(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ContractorRead>>, ApiError> {
    let contractors = CategoryRepo::new(&state.pool).contractors(id).await?;
    Ok(Json(
        contractors.into_iter().map(ContractorRead::from).collect(),
    ))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/contractor-categories",
            get(list_categories).post(create_category),
        )
        .route("/contractor-categories/{id}", get(get_category))
        .route(
            "/contractor-categories/{id}/contractors",
            get(list_category_contractors),
        )
}
