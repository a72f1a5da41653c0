//! Tests for the get_users endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{controller::user::get_users, model::app::AppState};
use holocron_test_utils::prelude::*;

/// Expect 200 OK with no users registered
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = get_users(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 OK with multiple registered users
#[tokio::test]
async fn success_with_multiple_users() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    test.user().insert_user("luke@rebellion.org").await?;
    test.user().insert_user("leia@rebellion.org").await?;

    let result = get_users(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 500 when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_users(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
