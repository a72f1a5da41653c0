//! Tests for removing favorites at the service layer.

use holocron::{
    error::{
        api::{ApiError, FavoriteKind},
        Error,
    },
    service::favorite::FavoriteService,
};
use holocron_test_utils::prelude::*;

/// Expect the removed starship to disappear from the user's list
#[tokio::test]
async fn removes_association() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;
    let starship_model = test.catalog().insert_starship("Millennium Falcon").await?;

    test.user()
        .insert_favorite_starship(user_model.id, starship_model.id)
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    favorite_service
        .remove_starship_favorite(user_model.id, starship_model.id)
        .await?;

    let favorites = favorite_service.get_user_favorites(user_model.id).await?;

    assert!(favorites.favorite_starships.is_empty());

    Ok(())
}

/// Expect FavoriteNotFound when removing the same pair a second time
#[tokio::test]
async fn fails_for_second_removal() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;
    let character_model = test.catalog().insert_character("Han Solo").await?;

    test.user()
        .insert_favorite_character(user_model.id, character_model.id)
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    favorite_service
        .remove_character_favorite(user_model.id, character_model.id)
        .await?;

    let result = favorite_service
        .remove_character_favorite(user_model.id, character_model.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::FavoriteNotFound {
            kind: FavoriteKind::Character,
            ..
        }))
    ));

    Ok(())
}

/// Expect removal for one user to leave another user's identical favorite alone
#[tokio::test]
async fn leaves_other_users_untouched() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let first_user = test.user().insert_user("luke@rebellion.org").await?;
    let second_user = test.user().insert_user("leia@rebellion.org").await?;
    let planet_model = test.catalog().insert_planet("Tatooine").await?;

    test.user()
        .insert_favorite_planet(first_user.id, planet_model.id)
        .await?;
    test.user()
        .insert_favorite_planet(second_user.id, planet_model.id)
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    favorite_service
        .remove_planet_favorite(first_user.id, planet_model.id)
        .await?;

    let second_favorites = favorite_service.get_user_favorites(second_user.id).await?;

    assert_eq!(second_favorites.favorite_planets.len(), 1);

    Ok(())
}
