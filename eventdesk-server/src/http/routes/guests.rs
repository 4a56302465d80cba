//! Guest endpoints
//!
//! Guests expose only create/list/get.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::{GuestRepo, GuestRow};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{GuestCreate, GuestRead};

impl From<GuestRow> for GuestRead {
    fn from(row: GuestRow) -> Self {
        Self {
            guest_id: row.guest_id,
            full_name: row.full_name,
            guest_type: row.guest_type,
            category: row.category,
            comment: row.comment,
            status: row.status,
            phone_number: row.phone_number,
        }
    }
}

/// POST /guests - create a new guest
async fn create_guest(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GuestCreate>,
) -> Result<(StatusCode, Json<GuestRead>), ApiError> {
    let guest = GuestRepo::new(&state.pool).create(&req).await?;
    Ok((StatusCode::CREATED, Json(GuestRead::from(guest))))
}

/// GET /guests - list all guests
async fn list_guests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GuestRead>>, ApiError> {
    let guests = GuestRepo::new(&state.pool).list().await?;
    Ok(Json(guests.into_iter().map(GuestRead::from).collect()))
}

/// GET /guests/{id} - get a single guest
async fn get_guest(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<GuestRead>, ApiError> {
    let guest = GuestRepo::new(&state.pool).get(id).await?;
    Ok(Json(GuestRead::from(guest)))
}

/// Guest routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/guests", get(list_guests).post(create_guest))
        .route("/guests/{id}", get(get_guest))
}
