use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::{CharacterDto, PlanetDto, StarshipDto};

/// A registered user; the password never leaves the store.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

/// Payload for `POST /user`.
///
/// Fields are optional so a missing one can be reported by name instead of
/// failing deserialization wholesale.
#[derive(Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisteredUserDto {
    pub msg: String,
    pub user: UserDto,
}

/// A user together with their three favorite lists.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub user: UserDto,
    pub favorite_characters: Vec<CharacterDto>,
    pub favorite_planets: Vec<PlanetDto>,
    pub favorite_starships: Vec<StarshipDto>,
}
