use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    /// Creates a new instance of [`StarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        model: String,
        manufacturer: String,
    ) -> Result<entity::starship::Model, DbErr> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(name),
            model: ActiveValue::Set(model),
            manufacturer: ActiveValue::Set(manufacturer),
            ..Default::default()
        };

        starship.insert(self.db).await
    }

    pub async fn get(&self, starship_id: i32) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await
    }

    /// Full unfiltered scan in store iteration order.
    pub async fn list(&self) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find().all(self.db).await
    }
}
