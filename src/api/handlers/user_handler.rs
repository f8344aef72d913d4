//! User handlers.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use crate::api::AppState;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::{AppResult, OptionExt};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user))
}

/// Create a new user.
///
/// Responds 201 with the created user and a Location header, or 400 when
/// the name or email fails domain validation.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user = state
        .user_service
        .create_user(payload.name, payload.email)
        .await?;

    let body = UserResponse::try_from(user)?;
    let location = format!("/users/{}", body.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    ))
}

/// Get a user by ID.
///
/// Responds 200 with the user, or 404 when no such user exists.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .find_user_by_id(id)
        .await?
        .ok_or_not_found()?;

    Ok(Json(UserResponse::try_from(user)?))
}
