//! Tests for the character favorite endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    controller::favorite::{add_favorite_character, remove_favorite_character},
    error::{
        api::{ApiError, FavoriteKind},
        Error,
    },
    model::app::AppState,
};
use holocron_test_utils::prelude::*;

/// Expect 200 OK when favoriting an existing character for an existing user
#[tokio::test]
async fn adds_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;
    let character_model = test.catalog().insert_character("Han Solo").await?;

    let result = add_favorite_character(
        State(test.to_app_state::<AppState>()),
        Path((user_model.id, character_model.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when the user does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let character_model = test.catalog().insert_character("Han Solo").await?;

    let nonexistent_user_id = 42;
    let result = add_favorite_character(
        State(test.to_app_state::<AppState>()),
        Path((nonexistent_user_id, character_model.id)),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::UserNotFound(_)))
    ));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found when the character does not exist
#[tokio::test]
async fn fails_for_nonexistent_character() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;

    let nonexistent_character_id = 42;
    let result = add_favorite_character(
        State(test.to_app_state::<AppState>()),
        Path((user_model.id, nonexistent_character_id)),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::CharacterNotFound(_)))
    ));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 Bad Request when the character is already a favorite of the user
#[tokio::test]
async fn fails_for_duplicate_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;
    let character_model = test.catalog().insert_character("Han Solo").await?;

    test.user()
        .insert_favorite_character(user_model.id, character_model.id)
        .await?;

    let result = add_favorite_character(
        State(test.to_app_state::<AppState>()),
        Path((user_model.id, character_model.id)),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::DuplicateFavorite {
            kind: FavoriteKind::Character,
            ..
        }))
    ));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK when removing an existing favorite
#[tokio::test]
async fn removes_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;
    let character_model = test.catalog().insert_character("Han Solo").await?;

    test.user()
        .insert_favorite_character(user_model.id, character_model.id)
        .await?;

    let result = remove_favorite_character(
        State(test.to_app_state::<AppState>()),
        Path((user_model.id, character_model.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when removing a character that was never favorited
#[tokio::test]
async fn fails_to_remove_nonexistent_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;
    let character_model = test.catalog().insert_character("Han Solo").await?;

    let result = remove_favorite_character(
        State(test.to_app_state::<AppState>()),
        Path((user_model.id, character_model.id)),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::FavoriteNotFound {
            kind: FavoriteKind::Character,
            ..
        }))
    ));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
