//! Tests for the starship favorite endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    controller::favorite::{add_favorite_starship, remove_favorite_starship},
    error::{
        api::{ApiError, FavoriteKind},
        Error,
    },
    model::app::AppState,
};
use holocron_test_utils::prelude::*;

/// Expect 200 OK when favoriting an existing starship for an existing user
#[tokio::test]
async fn adds_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;
    let starship_model = test.catalog().insert_starship("Millennium Falcon").await?;

    let result = add_favorite_starship(
        State(test.to_app_state::<AppState>()),
        Path((user_model.id, starship_model.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 Bad Request when the starship is already a favorite of the user
#[tokio::test]
async fn fails_for_duplicate_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("luke@rebellion.org").await?;
    let starship_model = test.catalog().insert_starship("Millennium Falcon").await?;

    test.user()
        .insert_favorite_starship(user_model.id, starship_model.id)
        .await?;

    let result = add_favorite_starship(
        State(test.to_app_state::<AppState>()),
        Path((user_model.id, starship_model.id)),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::DuplicateFavorite {
            kind: FavoriteKind::Starship,
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
    let starship_model = test.catalog().insert_starship("Millennium Falcon").await?;

    test.user()
        .insert_favorite_starship(user_model.id, starship_model.id)
        .await?;

    let result = remove_favorite_starship(
        State(test.to_app_state::<AppState>()),
        Path((user_model.id, starship_model.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
