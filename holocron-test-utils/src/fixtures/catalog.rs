use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog(&mut self) -> CatalogFixtures<'_> {
        CatalogFixtures { context: self }
    }
}

pub struct CatalogFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_character(
        &self,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                height: ActiveValue::Set(180),
                weight: ActiveValue::Set(80),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            population: ActiveValue::Set(200_000),
            climate: ActiveValue::Set("temperate".to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_starship(&self, name: &str) -> Result<entity::starship::Model, TestError> {
        Ok(
            entity::prelude::Starship::insert(entity::starship::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                model: ActiveValue::Set("YT-1300 light freighter".to_string()),
                manufacturer: ActiveValue::Set("Corellian Engineering Corporation".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
