use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
    },
    service::favorite::FavoriteService,
};

pub static FAVORITE_TAG: &str = "favorite";

fn favorite_added() -> (StatusCode, Json<MessageDto>) {
    (
        StatusCode::OK,
        Json(MessageDto {
            msg: "Favorite added".to_string(),
        }),
    )
}

fn favorite_removed() -> (StatusCode, Json<MessageDto>) {
    (
        StatusCode::OK,
        Json(MessageDto {
            msg: "Favorite removed".to_string(),
        }),
    )
}

/// Mark a character as a favorite of a user
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("character_id" = i32, Path, description = "ID of the character")
    ),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Already a favorite", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .add_character_favorite(user_id, character_id)
        .await?;

    Ok(favorite_added())
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("character_id" = i32, Path, description = "ID of the character")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 404, description = "Not a favorite of this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_character_favorite(user_id, character_id)
        .await?;

    Ok(favorite_removed())
}

/// Mark a planet as a favorite of a user
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Already a favorite", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .add_planet_favorite(user_id, planet_id)
        .await?;

    Ok(favorite_added())
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 404, description = "Not a favorite of this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_planet_favorite(user_id, planet_id)
        .await?;

    Ok(favorite_removed())
}

/// Mark a starship as a favorite of a user
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorite/starship/{starship_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("starship_id" = i32, Path, description = "ID of the starship")
    ),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Already a favorite", body = ErrorDto),
        (status = 404, description = "User or starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_starship(
    State(state): State<AppState>,
    Path((user_id, starship_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .add_starship_favorite(user_id, starship_id)
        .await?;

    Ok(favorite_added())
}

/// Remove a starship from a user's favorites
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorite/starship/{starship_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("starship_id" = i32, Path, description = "ID of the starship")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 404, description = "Not a favorite of this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_starship(
    State(state): State<AppState>,
    Path((user_id, starship_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_starship_favorite(user_id, starship_id)
        .await?;

    Ok(favorite_removed())
}
