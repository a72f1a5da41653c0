//! Repository layer.
//!
//! Repositories are thin structs over a [`sea_orm::ConnectionTrait`]
//! reference; every query is keyed explicitly (no entity back-references).

pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
