use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&mut self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set("test-password".to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite_character::Model, TestError> {
        Ok(entity::prelude::FavoriteCharacter::insert(
            entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite_planet::Model, TestError> {
        Ok(entity::prelude::FavoritePlanet::insert(
            entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_favorite_starship(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<entity::favorite_starship::Model, TestError> {
        Ok(entity::prelude::FavoriteStarship::insert(
            entity::favorite_starship::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                starship_id: ActiveValue::Set(starship_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
