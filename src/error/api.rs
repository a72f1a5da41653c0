use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Catalog kind a favorite points at, used in favorite error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Character,
    Planet,
    Starship,
}

impl std::fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Planet => write!(f, "planet"),
            Self::Starship => write!(f, "starship"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("The {0} field is required")]
    MissingField(&'static str),
    #[error("User with ID {0} does not exist")]
    UserNotFound(i32),
    #[error("Character with ID {0} does not exist")]
    CharacterNotFound(i32),
    #[error("Planet with ID {0} does not exist")]
    PlanetNotFound(i32),
    #[error("Starship with ID {0} does not exist")]
    StarshipNotFound(i32),
    #[error("The {kind} with ID {target_id} is not a favorite of user {user_id}")]
    FavoriteNotFound {
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    },
    #[error("The {kind} with ID {target_id} is already a favorite of user {user_id}")]
    DuplicateFavorite {
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::DuplicateFavorite { .. } => StatusCode::BAD_REQUEST,
            Self::UserNotFound(_)
            | Self::CharacterNotFound(_)
            | Self::PlanetNotFound(_)
            | Self::StarshipNotFound(_)
            | Self::FavoriteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            self.status_code(),
            Json(ErrorDto {
                msg: self.to_string(),
            }),
        )
            .into_response()
    }
}
