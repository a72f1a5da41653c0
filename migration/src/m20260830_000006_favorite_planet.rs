use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000001_user::User, m20260830_000003_planet::Planets};

static IDX_FAVORITE_PLANET_UNIQUE: &str = "idx-favorite_planets-user_id-planet_id";
static FK_FAVORITE_PLANET_USER_ID: &str = "fk-favorite_planets-user_id";
static FK_FAVORITE_PLANET_PLANET_ID: &str = "fk-favorite_planets-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlanets::Id))
                    .col(integer(FavoritePlanets::UserId))
                    .col(integer(FavoritePlanets::PlanetId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_PLANET_UNIQUE)
                    .table(FavoritePlanets::Table)
                    .col(FavoritePlanets::UserId)
                    .col(FavoritePlanets::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PLANET_USER_ID)
                    .from_tbl(FavoritePlanets::Table)
                    .from_col(FavoritePlanets::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PLANET_PLANET_ID)
                    .from_tbl(FavoritePlanets::Table)
                    .from_col(FavoritePlanets::PlanetId)
                    .to_tbl(Planets::Table)
                    .to_col(Planets::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PLANET_PLANET_ID)
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PLANET_USER_ID)
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_PLANET_UNIQUE)
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritePlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}
