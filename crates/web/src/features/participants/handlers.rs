use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::ListParams,
        participant::{MessageResponse, ParticipantRequest},
    },
    models::Participant,
};

use crate::error::{ApiResult, WebError};
use crate::extract::ValidatedJson;

use super::services;

#[utoipa::path(
    get,
    path = "/participants/",
    params(ListParams),
    responses(
        (status = 200, description = "Participants ranked by score, highest first", body = Vec<Participant>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "participants"
)]
pub async fn list_participants(
    State(db): State<Database>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = query?;
    params.validate().map_err(WebError::BadRequest)?;

    let participants = services::list_participants(db.pool(), &params).await?;

    Ok(Json(participants).into_response())
}

#[utoipa::path(
    post,
    path = "/participants/",
    request_body = ParticipantRequest,
    responses(
        (status = 200, description = "Participant created successfully", body = Participant),
        (status = 400, description = "Validation error")
    ),
    tag = "participants"
)]
pub async fn create_participant(
    State(db): State<Database>,
    ValidatedJson(req): ValidatedJson<ParticipantRequest>,
) -> ApiResult<Response> {
    let participant = services::create_participant(db.pool(), &req).await?;

    Ok(Json(participant).into_response())
}

#[utoipa::path(
    get,
    path = "/participants/{id}",
    params(
        ("id" = i64, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Participant found", body = Participant),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn get_participant(
    State(db): State<Database>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Response> {
    let Path(id) = path?;
    let participant = services::get_participant(db.pool(), id).await?;

    Ok(Json(participant).into_response())
}

#[utoipa::path(
    put,
    path = "/participants/{id}",
    params(
        ("id" = i64, Path, description = "Participant ID")
    ),
    request_body = ParticipantRequest,
    responses(
        (status = 200, description = "Participant updated successfully", body = Participant),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn update_participant(
    State(db): State<Database>,
    path: Result<Path<i64>, PathRejection>,
    ValidatedJson(req): ValidatedJson<ParticipantRequest>,
) -> ApiResult<Response> {
    let Path(id) = path?;
    let updated = services::update_participant(db.pool(), id, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/participants/{id}",
    params(
        ("id" = i64, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Participant deleted successfully", body = MessageResponse),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn delete_participant(
    State(db): State<Database>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Response> {
    let Path(id) = path?;
    services::delete_participant(db.pool(), id).await?;

    Ok(Json(MessageResponse::new("Participant deleted successfully")).into_response())
}
