use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::planet::PlanetRepository,
    error::{api::ApiError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        catalog::{CreatePlanetDto, PlanetDto},
    },
};

pub static PLANET_TAG: &str = "planet";

/// List all planets in the catalog
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All catalog planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planets = planet_repository.list().await?;
    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, Json(planet_dtos)))
}

/// Add a planet to the catalog
#[utoipa::path(
    post,
    path = "/planet",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(body): Json<CreatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let name = body.name.ok_or(ApiError::MissingField("name"))?;
    let population = body.population.ok_or(ApiError::MissingField("population"))?;
    let climate = body.climate.ok_or(ApiError::MissingField("climate"))?;

    let planet_repository = PlanetRepository::new(&state.db);
    let planet = planet_repository.create(name, population, climate).await?;

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))))
}
