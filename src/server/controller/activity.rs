use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    model::{activity::ActivityWithSignupsDto, api::ErrorDto},
    server::{
        error::AppError, model::activity::ActivityWithSignups, service::activity::ActivityService,
        state::AppState,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// List all activities.
///
/// Each activity embeds its signups, and each signup embeds its camper.
///
/// # Returns
/// - `200 OK` - All activities ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved activities", body = Vec<ActivityWithSignupsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let activities = ActivityService::new(&state.db).get_all().await?;

    let dto: Vec<ActivityWithSignupsDto> = activities
        .into_iter()
        .map(ActivityWithSignups::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Delete an activity together with every signup for it.
///
/// # Returns
/// - `202 Accepted` - Activity and signups deleted, empty JSON object body
/// - `404 Not Found` - No activity with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/activities/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "Activity ID")
    ),
    responses(
        (status = 202, description = "Successfully deleted activity and its signups"),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ActivityService::new(&state.db).delete(id).await?;

    Ok((StatusCode::ACCEPTED, Json(json!({}))))
}
