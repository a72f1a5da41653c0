//! Holocron server core modules.
//!
//! This crate implements a small HTTP/JSON API over a Star Wars catalog:
//! user registration, character/planet/starship listings, and per-user
//! favorite associations between users and catalog entries.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
