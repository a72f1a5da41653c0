//! HTTP controller endpoints for the Holocron API.
//!
//! Controllers validate inputs, call into repositories and services, and
//! map results to HTTP responses. Each handler carries a utoipa annotation
//! feeding the OpenAPI document assembled in [`crate::router`].

pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
