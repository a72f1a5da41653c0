pub use sea_orm_migration::prelude::*;

mod m20260830_000001_user;
mod m20260830_000002_character;
mod m20260830_000003_planet;
mod m20260830_000004_starship;
mod m20260830_000005_favorite_character;
mod m20260830_000006_favorite_planet;
mod m20260830_000007_favorite_starship;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_user::Migration),
            Box::new(m20260830_000002_character::Migration),
            Box::new(m20260830_000003_planet::Migration),
            Box::new(m20260830_000004_starship::Migration),
            Box::new(m20260830_000005_favorite_character::Migration),
            Box::new(m20260830_000006_favorite_planet::Migration),
            Box::new(m20260830_000007_favorite_starship::Migration),
        ]
    }
}
