//! Favorites subsystem.
//!
//! Maintains the many-to-many association between a user and each of the
//! three catalog kinds. The duplicate check here produces the structured
//! 400 response; the composite unique index created by the migrations backs
//! the same invariant at the store level, so two concurrent identical
//! requests cannot both insert.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        character::CharacterRepository,
        favorite::{
            FavoriteCharacterRepository, FavoritePlanetRepository, FavoriteStarshipRepository,
        },
        planet::PlanetRepository,
        starship::StarshipRepository,
        user::UserRepository,
    },
    error::{
        api::{ApiError, FavoriteKind},
        Error,
    },
    model::user::UserFavoritesDto,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a character as a favorite of a user.
    ///
    /// # Returns
    /// - `Ok(())` - Association row created
    /// - `Err(ApiError::UserNotFound)` - No user with the provided ID
    /// - `Err(ApiError::CharacterNotFound)` - No character with the provided ID
    /// - `Err(ApiError::DuplicateFavorite)` - The association already exists
    pub async fn add_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<(), Error> {
        let user_repository = UserRepository::new(self.db);
        let character_repository = CharacterRepository::new(self.db);
        let favorite_repository = FavoriteCharacterRepository::new(self.db);

        if user_repository.get(user_id).await?.is_none() {
            return Err(ApiError::UserNotFound(user_id).into());
        }

        if character_repository.get(character_id).await?.is_none() {
            return Err(ApiError::CharacterNotFound(character_id).into());
        }

        if favorite_repository
            .get_by_user_and_character(user_id, character_id)
            .await?
            .is_some()
        {
            return Err(ApiError::DuplicateFavorite {
                kind: FavoriteKind::Character,
                user_id,
                target_id: character_id,
            }
            .into());
        }

        favorite_repository.create(user_id, character_id).await?;

        Ok(())
    }

    /// Removes a character from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Association row deleted
    /// - `Err(ApiError::FavoriteNotFound)` - No such association
    pub async fn remove_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<(), Error> {
        let favorite_repository = FavoriteCharacterRepository::new(self.db);

        let favorite = favorite_repository
            .get_by_user_and_character(user_id, character_id)
            .await?
            .ok_or(ApiError::FavoriteNotFound {
                kind: FavoriteKind::Character,
                user_id,
                target_id: character_id,
            })?;

        favorite_repository.delete(favorite.id).await?;

        Ok(())
    }

    /// Marks a planet as a favorite of a user.
    pub async fn add_planet_favorite(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let user_repository = UserRepository::new(self.db);
        let planet_repository = PlanetRepository::new(self.db);
        let favorite_repository = FavoritePlanetRepository::new(self.db);

        if user_repository.get(user_id).await?.is_none() {
            return Err(ApiError::UserNotFound(user_id).into());
        }

        if planet_repository.get(planet_id).await?.is_none() {
            return Err(ApiError::PlanetNotFound(planet_id).into());
        }

        if favorite_repository
            .get_by_user_and_planet(user_id, planet_id)
            .await?
            .is_some()
        {
            return Err(ApiError::DuplicateFavorite {
                kind: FavoriteKind::Planet,
                user_id,
                target_id: planet_id,
            }
            .into());
        }

        favorite_repository.create(user_id, planet_id).await?;

        Ok(())
    }

    /// Removes a planet from a user's favorites.
    pub async fn remove_planet_favorite(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let favorite_repository = FavoritePlanetRepository::new(self.db);

        let favorite = favorite_repository
            .get_by_user_and_planet(user_id, planet_id)
            .await?
            .ok_or(ApiError::FavoriteNotFound {
                kind: FavoriteKind::Planet,
                user_id,
                target_id: planet_id,
            })?;

        favorite_repository.delete(favorite.id).await?;

        Ok(())
    }

    /// Marks a starship as a favorite of a user.
    pub async fn add_starship_favorite(&self, user_id: i32, starship_id: i32) -> Result<(), Error> {
        let user_repository = UserRepository::new(self.db);
        let starship_repository = StarshipRepository::new(self.db);
        let favorite_repository = FavoriteStarshipRepository::new(self.db);

        if user_repository.get(user_id).await?.is_none() {
            return Err(ApiError::UserNotFound(user_id).into());
        }

        if starship_repository.get(starship_id).await?.is_none() {
            return Err(ApiError::StarshipNotFound(starship_id).into());
        }

        if favorite_repository
            .get_by_user_and_starship(user_id, starship_id)
            .await?
            .is_some()
        {
            return Err(ApiError::DuplicateFavorite {
                kind: FavoriteKind::Starship,
                user_id,
                target_id: starship_id,
            }
            .into());
        }

        favorite_repository.create(user_id, starship_id).await?;

        Ok(())
    }

    /// Removes a starship from a user's favorites.
    pub async fn remove_starship_favorite(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<(), Error> {
        let favorite_repository = FavoriteStarshipRepository::new(self.db);

        let favorite = favorite_repository
            .get_by_user_and_starship(user_id, starship_id)
            .await?
            .ok_or(ApiError::FavoriteNotFound {
                kind: FavoriteKind::Starship,
                user_id,
                target_id: starship_id,
            })?;

        favorite_repository.delete(favorite.id).await?;

        Ok(())
    }

    /// Retrieves a user together with their three favorite lists.
    ///
    /// Each list is built by an explicit query keyed on the user ID that
    /// joins through to the target rows.
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - User found, lists possibly empty
    /// - `Err(ApiError::UserNotFound)` - No user with the provided ID
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get(user_id)
            .await?
            .ok_or(ApiError::UserNotFound(user_id))?;

        let favorite_characters = FavoriteCharacterRepository::new(self.db)
            .list_characters_by_user_id(user_id)
            .await?;
        let favorite_planets = FavoritePlanetRepository::new(self.db)
            .list_planets_by_user_id(user_id)
            .await?;
        let favorite_starships = FavoriteStarshipRepository::new(self.db)
            .list_starships_by_user_id(user_id)
            .await?;

        Ok(UserFavoritesDto {
            user: user.into(),
            favorite_characters: favorite_characters.into_iter().map(Into::into).collect(),
            favorite_planets: favorite_planets.into_iter().map(Into::into).collect(),
            favorite_starships: favorite_starships.into_iter().map(Into::into).collect(),
        })
    }
}
