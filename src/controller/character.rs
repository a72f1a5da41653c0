use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::character::CharacterRepository,
    error::{api::ApiError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        catalog::{CharacterDto, CreateCharacterDto},
    },
};

pub static CHARACTER_TAG: &str = "character";

/// List all characters in the catalog
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All catalog characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.db);

    let characters = character_repository.list().await?;
    let character_dtos: Vec<CharacterDto> =
        characters.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, Json(character_dtos)))
}

/// Add a character to the catalog
#[utoipa::path(
    post,
    path = "/character",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "Character created", body = CharacterDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    Json(body): Json<CreateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let name = body.name.ok_or(ApiError::MissingField("name"))?;
    let height = body.height.ok_or(ApiError::MissingField("height"))?;
    let weight = body.weight.ok_or(ApiError::MissingField("weight"))?;

    let character_repository = CharacterRepository::new(&state.db);
    let character = character_repository.create(name, height, weight).await?;

    Ok((StatusCode::OK, Json(CharacterDto::from(character))))
}
