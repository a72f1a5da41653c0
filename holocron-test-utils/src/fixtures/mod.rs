//! Fixture helpers for inserting rows during test setup.
//!
//! - `catalog` - characters, planets, and starships
//! - `user` - user accounts and favorite join rows

pub mod catalog;
pub mod user;
