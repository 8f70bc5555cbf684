//! Member endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::Confirmation;
use crate::db::repos::{Member, MemberDeletion, MemberRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonPayload, ValidId};
use crate::http::server::AppState;
use crate::models::NewMember;

/// Member response; the id is not part of the wire record
#[derive(Serialize)]
pub struct MemberResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<Member> for MemberResponse {
    fn from(m: Member) -> Self {
        Self {
            name: m.name,
            email: m.email,
            phone: m.phone,
        }
    }
}

/// Create member response
#[derive(Serialize)]
pub struct MemberCreated {
    pub message: &'static str,
    pub member_id: i64,
}

/// GET /members - list all members
async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = MemberRepo::new(&state.connections).list_all().await?;
    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

/// POST /members - add a member
async fn create_member(
    State(state): State<Arc<AppState>>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<MemberCreated>), ApiError> {
    let member = NewMember::from_payload(&payload)?;
    let member_id = MemberRepo::new(&state.connections).create(&member).await?;

    Ok((
        StatusCode::CREATED,
        Json(MemberCreated {
            message: "New member was added successfully",
            member_id,
        }),
    ))
}

/// GET /members/{id} - get a single member
async fn get_member(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = MemberRepo::new(&state.connections)
        .get(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "member",
            id,
        })?;

    Ok(Json(MemberResponse::from(member)))
}

/// PUT /members/{id} - replace a member's details
///
/// Succeeds even when no member has this id.
async fn update_member(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<Confirmation>, ApiError> {
    let member = NewMember::from_payload(&payload)?;
    MemberRepo::new(&state.connections).update(id, &member).await?;

    Ok(Json(Confirmation::new("Member details updated successfully")))
}

/// DELETE /members/{id} - remove a member without workouts
async fn delete_member(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Confirmation>, ApiError> {
    match MemberRepo::new(&state.connections).delete(id).await? {
        MemberDeletion::Deleted => Ok(Json(Confirmation::new("Member removed successfully"))),
        MemberDeletion::NotFound => Err(ApiError::NotFound {
            resource: "member",
            id,
        }),
        MemberDeletion::Blocked { .. } => Err(ApiError::Blocked {
            resource: "member",
            id,
            dependents: "workouts",
        }),
    }
}

/// Member routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
}
