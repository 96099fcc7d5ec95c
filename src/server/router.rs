use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        activity::{self, ACTIVITY_TAG},
        camper::{self, CAMPER_TAG},
        home::{self, HOME_TAG},
        signup::{self, SIGNUP_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Camp Roster API", description = "Campers, activities and signups"),
    tags(
        (name = HOME_TAG, description = "Liveness"),
        (name = CAMPER_TAG, description = "Camper management"),
        (name = ACTIVITY_TAG, description = "Activity management"),
        (name = SIGNUP_TAG, description = "Signing campers up for activities"),
    )
)]
struct ApiDoc;

/// Builds the API routes together with the OpenAPI document generated from them.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(home::home))
        .routes(routes!(camper::get_campers, camper::create_camper))
        .routes(routes!(camper::get_camper, camper::update_camper))
        .routes(routes!(activity::get_activities))
        .routes(routes!(activity::delete_activity))
        .routes(routes!(signup::create_signup))
        .split_for_parts()
}

/// The complete application: API routes, Swagger UI at `/api/docs`, request tracing and CORS.
pub fn app(state: AppState) -> Router {
    let (router, api) = router();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
