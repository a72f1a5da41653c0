use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::user::UserRepository,
    error::{api::ApiError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        user::{CreateUserDto, RegisteredUserDto, UserDto, UserFavoritesDto},
    },
    service::favorite::FavoriteService,
};

pub static USER_TAG: &str = "user";

/// List all registered users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All registered users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let users = user_repository.list().await?;
    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(user_dtos)))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User registered", body = RegisteredUserDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let email = body.email.ok_or(ApiError::MissingField("email"))?;
    let password = body.password.ok_or(ApiError::MissingField("password"))?;

    let user_repository = UserRepository::new(&state.db);
    let user = user_repository.create(email, password).await?;

    Ok((
        StatusCode::OK,
        Json(RegisteredUserDto {
            msg: "User registered".to_string(),
            user: user.into(),
        }),
    ))
}

/// Get a user together with their favorite characters, planets, and starships
#[utoipa::path(
    get,
    path = "/user_favorites/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "User with their three favorite lists", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_user_favorites(user_id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}
