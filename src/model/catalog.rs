use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub weight: i32,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(model: entity::character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            weight: model.weight,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub population: i64,
    pub climate: String,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(model: entity::planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            population: model.population,
            climate: model.climate,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
}

impl From<entity::starship::Model> for StarshipDto {
    fn from(model: entity::starship::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            model: model.model,
            manufacturer: model.manufacturer,
        }
    }
}

/// Payload for `POST /character`; fields are validated for presence only.
#[derive(Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub name: Option<String>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
}

/// Payload for `POST /planet`; fields are validated for presence only.
#[derive(Deserialize, ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
}

/// Payload for `POST /starship`; fields are validated for presence only.
#[derive(Deserialize, ToSchema)]
pub struct CreateStarshipDto {
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
}
