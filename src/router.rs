//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is served at `/api/docs` with the raw document at
//! `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars catalog and favorites API"), tags(
        (name = controller::user::USER_TAG, description = "User registration and favorites overview"),
        (name = controller::character::CHARACTER_TAG, description = "Character catalog routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog routes"),
        (name = controller::starship::STARSHIP_TAG, description = "Starship catalog routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite association routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::create_character))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::create_planet))
        .routes(routes!(controller::starship::get_starships))
        .routes(routes!(controller::starship::create_starship))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_starship,
            controller::favorite::remove_favorite_starship
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
