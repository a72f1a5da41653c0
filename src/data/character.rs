use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        height: i32,
        weight: i32,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name),
            height: ActiveValue::Set(height),
            weight: ActiveValue::Set(weight),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get(&self, character_id: i32) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Full unfiltered scan in store iteration order.
    pub async fn list(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find().all(self.db).await
    }
}
