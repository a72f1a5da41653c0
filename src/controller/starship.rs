use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::starship::StarshipRepository,
    error::{api::ApiError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        catalog::{CreateStarshipDto, StarshipDto},
    },
};

pub static STARSHIP_TAG: &str = "starship";

/// List all starships in the catalog
#[utoipa::path(
    get,
    path = "/starships",
    tag = STARSHIP_TAG,
    responses(
        (status = 200, description = "All catalog starships", body = Vec<StarshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let starship_repository = StarshipRepository::new(&state.db);

    let starships = starship_repository.list().await?;
    let starship_dtos: Vec<StarshipDto> = starships.into_iter().map(StarshipDto::from).collect();

    Ok((StatusCode::OK, Json(starship_dtos)))
}

/// Add a starship to the catalog
#[utoipa::path(
    post,
    path = "/starship",
    tag = STARSHIP_TAG,
    request_body = CreateStarshipDto,
    responses(
        (status = 200, description = "Starship created", body = StarshipDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_starship(
    State(state): State<AppState>,
    Json(body): Json<CreateStarshipDto>,
) -> Result<impl IntoResponse, Error> {
    let name = body.name.ok_or(ApiError::MissingField("name"))?;
    let model = body.model.ok_or(ApiError::MissingField("model"))?;
    let manufacturer = body
        .manufacturer
        .ok_or(ApiError::MissingField("manufacturer"))?;

    let starship_repository = StarshipRepository::new(&state.db);
    let starship = starship_repository
        .create(name, model, manufacturer)
        .await?;

    Ok((StatusCode::OK, Json(StarshipDto::from(starship))))
}
