//! Contractor endpoints
//!
//! Creating or replacing a contractor with a category_id or event_id that
//! does not exist returns 409; the database never accepts a dangling
//! reference.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::db::repos::{ContractorRepo, ContractorRow};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ContractorCreate, ContractorRead};

impl From<ContractorRow> for ContractorRead {
    fn from(row: ContractorRow) -> Self {
        Self {
            contractor_id: row.contractor_id,
            name: row.name,
            status: row.status,
            description: row.description,
            phone_number: row.phone_number,
            service_cost: row.service_cost,
            category_id: row.category_id,
            event_id: row.event_id,
        }
    }
}

/// POST /contractors - create a new contractor
async fn create_contractor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContractorCreate>,
) -> Result<(StatusCode, Json<ContractorRead>), ApiError> {
    let contractor = ContractorRepo::new(&state.pool).create(&req).await?;
    Ok((StatusCode::CREATED, Json(ContractorRead::from(contractor))))
}

/// GET /contractors - list all contractors
async fn list_contractors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContractorRead>>, ApiError> {
    let contractors = ContractorRepo::new(&state.pool).list().await?;
    Ok(Json(
        contractors.into_iter().map(ContractorRead::from).collect(),
    ))
}

/// GET /contractors/{id} - get a single contractor
async fn get_contractor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ContractorRead>, ApiError> {
    let contractor = ContractorRepo::new(&state.pool).get(id).await?;
    Ok(Json(ContractorRead::from(contractor)))
}

/// PUT /contractors/{id} - replace every field of a contractor
async fn update_contractor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<ContractorCreate>,
) -> Result<Json<ContractorRead>, ApiError> {
    let contractor = ContractorRepo::new(&state.pool).update(id, &req).await?;
    Ok(Json(ContractorRead::from(contractor)))
}

/// DELETE /contractors/{id} - remove a contractor
async fn delete_contractor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    ContractorRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "message": "Contractor deleted successfully" })))
}

/// Contractor routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contractors", get(list_contractors).post(create_contractor))
        .route(
            "/contractors/{id}",
            get(get_contractor)
                .put(update_contractor)
                .delete(delete_contractor),
        )
}
