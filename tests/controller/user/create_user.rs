//! Tests for the create_user endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{
    controller::user::create_user,
    error::{api::ApiError, Error},
    model::{app::AppState, user::CreateUserDto},
};
use holocron_test_utils::prelude::*;

/// Expect 200 OK when registering a user with both required fields
#[tokio::test]
async fn registers_user() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let body = CreateUserDto {
        email: Some("luke@rebellion.org".to_string()),
        password: Some("secret".to_string()),
    };
    let result = create_user(State(test.to_app_state::<AppState>()), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 Bad Request when the email field is absent
#[tokio::test]
async fn fails_for_missing_email() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let body = CreateUserDto {
        email: None,
        password: Some("secret".to_string()),
    };
    let result = create_user(State(test.to_app_state::<AppState>()), Json(body)).await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::MissingField("email")))
    ));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request when the password field is absent
#[tokio::test]
async fn fails_for_missing_password() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let body = CreateUserDto {
        email: Some("luke@rebellion.org".to_string()),
        password: None,
    };
    let result = create_user(State(test.to_app_state::<AppState>()), Json(body)).await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::MissingField("password")))
    ));

    Ok(())
}

/// Expect 500 when the email is already registered; the unique-constraint
/// violation surfaces as an unstructured store error
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    test.user().insert_user("luke@rebellion.org").await?;

    let body = CreateUserDto {
        email: Some("luke@rebellion.org".to_string()),
        password: Some("secret".to_string()),
    };
    let result = create_user(State(test.to_app_state::<AppState>()), Json(body)).await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
