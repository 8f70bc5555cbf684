//! Workout endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::Confirmation;
use crate::db::repos::{Workout, WorkoutRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonPayload, ValidId};
use crate::http::server::AppState;
use crate::models::schema::DATE_FORMAT;
use crate::models::NewWorkout;

/// Workout response
#[derive(Serialize)]
pub struct WorkoutResponse {
    pub workout_id: i64,
    pub member_id: i64,
    pub date: String,
}

impl From<Workout> for WorkoutResponse {
    fn from(w: Workout) -> Self {
        Self {
            workout_id: w.workout_id,
            member_id: w.member_id,
            date: w.date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Create workout response
#[derive(Serialize)]
pub struct WorkoutCreated {
    pub message: &'static str,
    pub workout_id: i64,
}

/// GET /workouts - list all workouts
async fn list_workouts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WorkoutResponse>>, ApiError> {
    let workouts = WorkoutRepo::new(&state.connections).list_all().await?;
    Ok(Json(workouts.into_iter().map(WorkoutResponse::from).collect()))
}

/// POST /workouts - schedule a workout
async fn create_workout(
    State(state): State<Arc<AppState>>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<WorkoutCreated>), ApiError> {
    let workout = NewWorkout::from_payload(&payload)?;
    let workout_id = WorkoutRepo::new(&state.connections).create(&workout).await?;

    Ok((
        StatusCode::CREATED,
        Json(WorkoutCreated {
            message: "Workout added successfully",
            workout_id,
        }),
    ))
}

/// GET /workouts/{id} - get a single workout
async fn get_workout(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let workout = WorkoutRepo::new(&state.connections)
        .get(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "workout",
            id,
        })?;

    Ok(Json(WorkoutResponse::from(workout)))
}

/// PUT /workouts/{id} - reschedule a workout
async fn update_workout(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<Confirmation>, ApiError> {
    let workout = NewWorkout::from_payload(&payload)?;
    WorkoutRepo::new(&state.connections).update(id, &workout).await?;

    Ok(Json(Confirmation::new("Workout was updated successfully")))
}

/// DELETE /workouts/{id} - remove a workout
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Confirmation>, ApiError> {
    WorkoutRepo::new(&state.connections).delete(id).await?;
    Ok(Json(Confirmation::new("Workout removed successfully")))
}

/// Workout routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workouts", get(list_workouts).post(create_workout))
        .route(
            "/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}
