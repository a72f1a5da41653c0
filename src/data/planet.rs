use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        population: i64,
        climate: String,
    ) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            population: ActiveValue::Set(population),
            climate: ActiveValue::Set(climate),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Full unfiltered scan in store iteration order.
    pub async fn list(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find().all(self.db).await
    }
}
