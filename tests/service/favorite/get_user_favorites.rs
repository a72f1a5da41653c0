//! Tests for the aggregated favorites view at the service layer.

use holocron::{
    error::{api::ApiError, Error},
    service::favorite::FavoriteService,
};
use holocron_test_utils::prelude::*;

/// Expect three empty lists for a user with no favorites
#[tokio::test]
async fn empty_lists_for_new_user() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;

    let favorite_service = FavoriteService::new(&test.db);
    let favorites = favorite_service.get_user_favorites(user_model.id).await?;

    assert_eq!(favorites.user.email, "luke@rebellion.org");
    assert!(favorites.favorite_characters.is_empty());
    assert!(favorites.favorite_planets.is_empty());
    assert!(favorites.favorite_starships.is_empty());

    Ok(())
}

/// Expect each favorite to land in the list for its own kind
#[tokio::test]
async fn separates_kinds() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;
    let character_model = test.catalog().insert_character("Han Solo").await?;
    let planet_model = test.catalog().insert_planet("Tatooine").await?;
    let starship_model = test.catalog().insert_starship("Millennium Falcon").await?;

    test.user()
        .insert_favorite_character(user_model.id, character_model.id)
        .await?;
    test.user()
        .insert_favorite_planet(user_model.id, planet_model.id)
        .await?;
    test.user()
        .insert_favorite_starship(user_model.id, starship_model.id)
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let favorites = favorite_service.get_user_favorites(user_model.id).await?;

    assert_eq!(favorites.favorite_characters.len(), 1);
    assert_eq!(favorites.favorite_characters[0].name, "Han Solo");
    assert_eq!(favorites.favorite_planets.len(), 1);
    assert_eq!(favorites.favorite_planets[0].name, "Tatooine");
    assert_eq!(favorites.favorite_starships.len(), 1);
    assert_eq!(favorites.favorite_starships[0].name, "Millennium Falcon");

    Ok(())
}

/// Expect UserNotFound for a user ID with no row
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let favorite_service = FavoriteService::new(&test.db);
    let nonexistent_user_id = 7;
    let result = favorite_service.get_user_favorites(nonexistent_user_id).await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::UserNotFound(7)))
    ));

    Ok(())
}

/// Expect another user's favorites to stay out of the requested user's lists
#[tokio::test]
async fn scopes_lists_to_the_requested_user() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let first_user = test.user().insert_user("luke@rebellion.org").await?;
    let second_user = test.user().insert_user("leia@rebellion.org").await?;
    let character_model = test.catalog().insert_character("Han Solo").await?;

    test.user()
        .insert_favorite_character(second_user.id, character_model.id)
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let favorites = favorite_service.get_user_favorites(first_user.id).await?;

    assert!(favorites.favorite_characters.is_empty());

    Ok(())
}
