//! Wire-facing DTOs and shared application state.

pub mod api;
pub mod app;
pub mod catalog;
pub mod user;
