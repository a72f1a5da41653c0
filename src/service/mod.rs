//! Business logic services coordinating between repositories.

pub mod favorite;
