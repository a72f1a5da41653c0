//! Repositories for the three favorite join tables.
//!
//! The slices are structurally identical but kept as separate concrete
//! repositories, mirroring the separately-routed endpoints they back.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite_character::Model, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_user_and_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<entity::favorite_character::Model>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }

    /// All favorite join rows for a user, dereferenced to the character rows.
    pub async fn list_characters_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        let rows = entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .find_also_related(entity::character::Entity)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, character)| character)
            .collect())
    }

    /// Deletes a favorite join row
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}

pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite_planet::Model, DbErr> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_user_and_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<entity::favorite_planet::Model>, DbErr> {
        entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await
    }

    /// All favorite join rows for a user, dereferenced to the planet rows.
    pub async fn list_planets_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::planet::Model>, DbErr> {
        let rows = entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .find_also_related(entity::planet::Entity)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, planet)| planet).collect())
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanet::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}

pub struct FavoriteStarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteStarshipRepository<'a, C> {
    /// Creates a new instance of [`FavoriteStarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<entity::favorite_starship::Model, DbErr> {
        let favorite = entity::favorite_starship::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            starship_id: ActiveValue::Set(starship_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_user_and_starship(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<Option<entity::favorite_starship::Model>, DbErr> {
        entity::prelude::FavoriteStarship::find()
            .filter(entity::favorite_starship::Column::UserId.eq(user_id))
            .filter(entity::favorite_starship::Column::StarshipId.eq(starship_id))
            .one(self.db)
            .await
    }

    /// All favorite join rows for a user, dereferenced to the starship rows.
    pub async fn list_starships_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::starship::Model>, DbErr> {
        let rows = entity::prelude::FavoriteStarship::find()
            .filter(entity::favorite_starship::Column::UserId.eq(user_id))
            .find_also_related(entity::starship::Entity)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, starship)| starship)
            .collect())
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteStarship::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
