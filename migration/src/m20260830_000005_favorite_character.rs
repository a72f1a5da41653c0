use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000001_user::User, m20260830_000002_character::Characters};

static IDX_FAVORITE_CHARACTER_UNIQUE: &str = "idx-favorite_characters-user_id-character_id";
static FK_FAVORITE_CHARACTER_USER_ID: &str = "fk-favorite_characters-user_id";
static FK_FAVORITE_CHARACTER_CHARACTER_ID: &str = "fk-favorite_characters-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteCharacters::Id))
                    .col(integer(FavoriteCharacters::UserId))
                    .col(integer(FavoriteCharacters::CharacterId))
                    .to_owned(),
            )
            .await?;

        // Backs the duplicate-favorite invariant so concurrent inserts
        // cannot slip past the application-layer check.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_CHARACTER_UNIQUE)
                    .table(FavoriteCharacters::Table)
                    .col(FavoriteCharacters::UserId)
                    .col(FavoriteCharacters::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_CHARACTER_USER_ID)
                    .from_tbl(FavoriteCharacters::Table)
                    .from_col(FavoriteCharacters::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_CHARACTER_CHARACTER_ID)
                    .from_tbl(FavoriteCharacters::Table)
                    .from_col(FavoriteCharacters::CharacterId)
                    .to_tbl(Characters::Table)
                    .to_col(Characters::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_CHARACTER_CHARACTER_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_CHARACTER_USER_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_CHARACTER_UNIQUE)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteCharacters {
    Table,
    Id,
    UserId,
    CharacterId,
}
