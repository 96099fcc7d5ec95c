use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        camper::{CamperDto, CamperWithSignupsDto, CreateCamperDto, UpdateCamperDto},
    },
    server::{
        error::AppError,
        model::camper::{CamperWithSignups, CreateCamperParam, UpdateCamperParam},
        service::camper::CamperService,
        state::AppState,
    },
};

/// Tag for grouping camper endpoints in OpenAPI documentation
pub static CAMPER_TAG: &str = "camper";

/// List all campers.
///
/// Each camper embeds its signups, and each signup embeds its activity.
///
/// # Returns
/// - `200 OK` - All campers ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers",
    tag = CAMPER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved campers", body = Vec<CamperWithSignupsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let campers = CamperService::new(&state.db).get_all().await?;

    let dto: Vec<CamperWithSignupsDto> = campers
        .into_iter()
        .map(CamperWithSignups::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a new camper.
///
/// # Returns
/// - `201 Created` - The created camper with an empty signup list
/// - `403 Forbidden` - Name not a non-empty string, or age not an integer in 8 through 18
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/campers",
    tag = CAMPER_TAG,
    request_body = CreateCamperDto,
    responses(
        (status = 201, description = "Successfully created camper", body = CamperWithSignupsDto),
        (status = 403, description = "Invalid camper data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_camper(
    State(state): State<AppState>,
    Json(payload): Json<CreateCamperDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCamperParam::try_from(payload)?;

    let camper = CamperService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(camper.into_dto())))
}

/// Get a single camper. Signups are not included.
///
/// # Returns
/// - `200 OK` - The camper
/// - `404 Not Found` - No camper with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i32, Path, description = "Camper ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved camper", body = CamperDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camper(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let camper = CamperService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(camper.into_dto())))
}

/// Patch a camper's name and/or age.
///
/// Only `name` and `age` are read from the body; any other key is ignored. The patched
/// fields are validated with the same rules as on creation, including their JSON types.
///
/// # Returns
/// - `201 Created` - The updated camper with its signups
/// - `403 Forbidden` - Name not a non-empty string, or age not an integer in 8 through 18
/// - `404 Not Found` - No camper with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i32, Path, description = "Camper ID")
    ),
    request_body = UpdateCamperDto,
    responses(
        (status = 201, description = "Successfully updated camper", body = CamperWithSignupsDto),
        (status = 403, description = "Invalid camper data", body = ErrorDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_camper(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCamperDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateCamperParam::try_from(payload)?;

    let camper = CamperService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::CREATED, Json(camper.into_dto())))
}
