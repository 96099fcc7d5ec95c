use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        signup::{CreateSignupDto, SignupDto},
    },
    server::{
        error::AppError, model::signup::CreateSignupParam, service::signup::SignupService,
        state::AppState,
    },
};

/// Tag for grouping signup endpoints in OpenAPI documentation
pub static SIGNUP_TAG: &str = "signup";

/// Sign a camper up for an activity at an hour of the day.
///
/// # Returns
/// - `201 Created` - The created signup with its camper and activity
/// - `403 Forbidden` - Time not an integer in 0 through 23
/// - `404 Not Found` - Camper or activity does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/signups",
    tag = SIGNUP_TAG,
    request_body = CreateSignupDto,
    responses(
        (status = 201, description = "Successfully created signup", body = SignupDto),
        (status = 403, description = "Invalid signup data", body = ErrorDto),
        (status = 404, description = "Camper or activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_signup(
    State(state): State<AppState>,
    Json(payload): Json<CreateSignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateSignupParam::try_from(payload)?;

    let signup = SignupService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(signup.into_dto())))
}
