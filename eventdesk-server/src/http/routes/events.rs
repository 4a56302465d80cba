//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::db::repos::{EventRepo, EventRow};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ContractorRead, EventCreate, EventRead};

impl From<EventRow> for EventRead {
    fn from(row: EventRow) -> Self {
        Self {
            event_id: row.event_id,
            name: row.name,
            event_date: row.event_date,
            event_type: row.event_type,
            budget: row.budget,
        }
    }
}

/// POST /events - create a new event
async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EventCreate>,
) -> Result<(StatusCode, Json<EventRead>), ApiError> {
    let event = EventRepo::new(&state.pool).create(&req).await?;
    Ok((StatusCode::CREATED, Json(EventRead::from(event))))
}

/// GET /events - list all events
async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EventRead>>, ApiError> {
    let events = EventRepo::new(&state.pool).list().await?;
    Ok(Json(events.into_iter().map(EventRead::from).collect()))
}

/// GET /events/{id} - get a single event
async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<EventRead>, ApiError> {
    let event = EventRepo::new(&state.pool).get(id).await?;
    Ok(Json(EventRead::from(event)))
}

/// PUT /events/{id} - replace every field of an event
async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<EventCreate>,
) -> Result<Json<EventRead>, ApiError> {
    let event = EventRepo::new(&state.pool).update(id, &req).await?;
    Ok(Json(EventRead::from(event)))
}

/// DELETE /events/{id} - remove an event
async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    EventRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "message": "Event deleted successfully" })))
}

/// GET /events/{id}/contractors - contractors booked for an event
async fn list_event_contractors(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ContractorRead>>, ApiError> {
    let contractors = EventRepo::new(&state.pool).contractors(id).await?;
    Ok(Json(
        contractors.into_iter().map(ContractorRead::from).collect(),
    ))
}

/// Event routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/{id}/contractors", get(list_event_contractors))
}
