use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000001_user::User, m20260830_000004_starship::Starships};

static IDX_FAVORITE_STARSHIP_UNIQUE: &str = "idx-favorite_starships-user_id-starship_id";
static FK_FAVORITE_STARSHIP_USER_ID: &str = "fk-favorite_starships-user_id";
static FK_FAVORITE_STARSHIP_STARSHIP_ID: &str = "fk-favorite_starships-starship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteStarships::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteStarships::Id))
                    .col(integer(FavoriteStarships::UserId))
                    .col(integer(FavoriteStarships::StarshipId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_STARSHIP_UNIQUE)
                    .table(FavoriteStarships::Table)
                    .col(FavoriteStarships::UserId)
                    .col(FavoriteStarships::StarshipId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_STARSHIP_USER_ID)
                    .from_tbl(FavoriteStarships::Table)
                    .from_col(FavoriteStarships::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_STARSHIP_STARSHIP_ID)
                    .from_tbl(FavoriteStarships::Table)
                    .from_col(FavoriteStarships::StarshipId)
                    .to_tbl(Starships::Table)
                    .to_col(Starships::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_STARSHIP_STARSHIP_ID)
                    .table(FavoriteStarships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_STARSHIP_USER_ID)
                    .table(FavoriteStarships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_STARSHIP_UNIQUE)
                    .table(FavoriteStarships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteStarships::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteStarships {
    Table,
    Id,
    UserId,
    StarshipId,
}
