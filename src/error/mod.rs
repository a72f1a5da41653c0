//! Error types for the Holocron server.
//!
//! A single [`Error`] aggregates the structured client-facing [`ApiError`]
//! and database errors. Everything without an explicit HTTP mapping is
//! logged and returned as a generic 500 through [`InternalServerError`].

pub mod api;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::api::ApiError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum Error {
    /// Structured client error (missing field, unknown ID, duplicate favorite).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApiError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message but returns a generic body to the client so
/// store-level details never leak to API consumers.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                msg: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
